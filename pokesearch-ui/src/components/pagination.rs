//! Prev/next page controls

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::components::{Button, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn PaginationBar(
    current_page: u32,
    total_pages: u32,
    can_go_prev: bool,
    can_go_next: bool,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        nav { class: "flex justify-center items-center gap-4 mt-4",
            Button {
                variant: ButtonVariant::Secondary,
                disabled: !can_go_prev,
                onclick: move |_| on_prev.call(()),
                ChevronLeftIcon {}
                "Précédent"
            }
            span { class: "text-gray-300", "{current_page} sur {total_pages}" }
            Button {
                variant: ButtonVariant::Secondary,
                disabled: !can_go_next,
                onclick: move |_| on_next.call(()),
                "Suivant"
                ChevronRightIcon {}
            }
        }
    }
}
