use yew::prelude::*;

use crate::components::registration_modal::RegistrationModal;
use crate::components::sticky_header::StickyHeader;
use crate::pages::footer::Footer;
use crate::pages::hero::Hero;
use crate::pages::story::Story;

#[function_component(Home)]
pub fn home() -> Html {
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    html! {
        <div class="page">
            <StickyHeader />
            <main class="page__main">
                <Hero />
                <Story on_join={open_modal} />
            </main>
            <Footer />
            <RegistrationModal is_open={*modal_open} on_close={close_modal} />
            <style>
                {r#"
                :root {
                    --brand: #18181B;
                    --brand-secondary: #3F3F46;
                    --brand-accent: #2563EB;
                    --bg-primary: #FAFAFA;
                    --text-primary: #09090B;
                    --text-secondary: #71717A;
                    --font-heading: "Space Grotesk", sans-serif;
                    --font-body: "Archivo", sans-serif;
                }
                body {
                    margin: 0;
                    background: var(--bg-primary);
                    color: var(--text-primary);
                    font-family: var(--font-body);
                }
                ::selection { background: var(--brand-accent); color: #fff; }
                .accent { color: var(--brand-accent); }
                .page {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    overflow-x: hidden;
                }
                .page__main {
                    flex: 1;
                    width: 100%;
                    max-width: 1400px;
                    box-sizing: border-box;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                @media (max-width: 767px) {
                    .page__main { padding: 0 1rem; }
                }
                "#}
            </style>
        </div>
    }
}
