//! Query input and submit button

use crate::components::icons::{LoaderIcon, SearchIcon};
use crate::components::{Button, ButtonVariant, TextInput};
use dioxus::prelude::*;

#[component]
pub fn SearchBar(
    value: String,
    is_loading: bool,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex gap-2 mb-4",
            TextInput {
                value,
                on_input,
                on_enter: move |_| on_submit.call(()),
                placeholder: "Entrez le nom d'un Pokémon",
                autofocus: true,
            }
            Button {
                variant: ButtonVariant::Primary,
                loading: is_loading,
                aria_label: "Rechercher".to_string(),
                onclick: move |_| on_submit.call(()),
                if is_loading {
                    LoaderIcon { class: "w-5 h-5 animate-spin" }
                } else {
                    SearchIcon {}
                    "Rechercher"
                }
            }
        }
    }
}
