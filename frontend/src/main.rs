use yew::prelude::*;
use log::info;

mod config;
mod reveal {
    pub mod controller;
    pub mod platform;
    pub mod web;
}
mod nav {
    pub mod mega_menu;
}
mod effects {
    pub mod pointer_tint;
}
mod components {
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use components::{footer::Footer, header::Header};
use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Header />
            <Home />
            <Footer />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::site().brand);
    yew::Renderer::<App>::new().render();
}
