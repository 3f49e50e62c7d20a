//! Loading spinner component

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Centered spinner shown while a page is loading
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "flex justify-center items-center my-8", aria_busy: "true",
            LoaderIcon { class: "w-10 h-10 text-indigo-400 animate-spin" }
        }
    }
}
