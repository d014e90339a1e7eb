use log::{info, Level};
use yew::prelude::*;

mod clipboard;
mod config;
mod confirmation;
mod leads;
mod navigation;
mod timing;
mod motion {
    pub mod curve;
    pub mod floating;
    pub mod observer;
}
mod components {
    pub mod copy_code;
    pub mod floating_icons;
    pub mod registration_modal;
    pub mod scroll_paragraph;
    pub mod sticky_header;
}
mod pages {
    pub mod footer;
    pub mod hero;
    pub mod home;
    pub mod story;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! { <Home /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
