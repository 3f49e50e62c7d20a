pub mod api;
pub mod config;
pub mod pages;
pub mod search;

use dioxus::prelude::*;
use pages::Search;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:q")]
    Search { q: Option<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(config::load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-900", Router::<Route> {} }
    }
}
