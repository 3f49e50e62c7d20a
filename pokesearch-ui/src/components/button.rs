//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background - search and other primary actions
    Primary,
    /// Gray background - paging and dismiss actions
    Secondary,
}

/// Styled button. `loading` disables it the same way `disabled` does.
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-indigo-600 hover:bg-indigo-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "bg-gray-700 hover:bg-gray-600 text-gray-300 disabled:opacity-50 disabled:cursor-not-allowed"
        }
    };

    let base = "inline-flex items-center justify-center gap-2 rounded-lg px-4 py-2 transition-colors";
    let computed_class = match &class {
        Some(extra) => format!("{base} {variant_class} {extra}"),
        None => format!("{base} {variant_class}"),
    };

    rsx! {
        button {
            class: "{computed_class}",
            disabled: is_disabled,
            aria_label: aria_label.as_deref(),
            aria_busy: if loading { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
