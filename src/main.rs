use log::{info, Level};
use yew::prelude::*;

mod config;
mod reveal;
mod components {
    pub mod contact;
    pub mod faq;
    pub mod icons;
}
mod pages {
    pub mod landing;
}

use config::SiteConfig;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing config={SiteConfig::default()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
