use yew::prelude::*;

use crate::config::SOCIAL_LINKS;
use crate::navigation::CONTACT;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <section id={CONTACT} class="footer">
            <div class="footer__glow"></div>
            <footer class="footer__bar">
                <div class="footer__owner">
                    <div class="footer__initials">{"IM"}</div>
                    <span>{"Ibrakhim Magomaev"}</span>
                </div>
                <div class="footer__links">
                    { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                        <a href={*href} target="_blank" rel="noopener noreferrer">{ *name }</a>
                    }) }
                </div>
                <div class="footer__copyright">
                    <span>{"© 2026"}</span>
                    <span class="footer__rights">{"Все права не защищены"}</span>
                </div>
            </footer>
            <style>
                {r#"
                .footer {
                    position: relative;
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 8rem 0 2.5rem;
                    overflow: hidden;
                }
                .footer__glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, transparent, rgba(63, 63, 70, 0.05));
                    pointer-events: none;
                }
                .footer__bar {
                    z-index: 10;
                    width: 100%;
                    max-width: 1400px;
                    box-sizing: border-box;
                    padding: 0 1.5rem;
                    margin-top: 8rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                    color: var(--text-secondary);
                }
                .footer__owner { display: flex; align-items: center; gap: 0.75rem; font-weight: 500; color: var(--text-primary); }
                .footer__initials {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: var(--brand);
                    color: #fff;
                    font-family: var(--font-heading);
                    font-weight: 700;
                    font-size: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .footer__links { display: flex; gap: 1.5rem; font-weight: 500; }
                .footer__copyright { display: flex; gap: 0.25rem; opacity: 0.6; }
                @media (max-width: 767px) {
                    .footer__bar { flex-direction: column; }
                    .footer__rights { display: none; }
                }
                "#}
            </style>
        </section>
    }
}
