//! Reusable text input component

use dioxus::prelude::*;

/// Text input with consistent styling. `on_enter` fires on the Enter key.
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] on_enter: Option<EventHandler<()>>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] autofocus: bool,
) -> Element {
    rsx! {
        input {
            r#type: "text",
            class: "flex-grow bg-gray-800/50 rounded-lg px-3 py-2 focus:outline-none focus:ring-1 focus:ring-indigo-500/50 text-gray-200 placeholder-gray-500",
            value: "{value}",
            placeholder,
            oninput: move |e| on_input.call(e.value()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter {
                    if let Some(handler) = on_enter {
                        handler.call(());
                    }
                }
            },
            onmounted: move |event| async move {
                if autofocus {
                    let _ = event.data().set_focus(true).await;
                }
            },
        }
    }
}
