//! Dismissible overlay
//!
//! Rendering the component is the `open` state, unmounting it is `closed`.
//! While mounted it holds a document `keydown` listener that dismisses on
//! Escape. The listener lives in an [`OverlayLifecycle`], so it is attached
//! once per mount regardless of re-renders and removed on unmount.
//!
//! The backdrop dismisses on click. The content wrapper stops propagation so
//! clicks inside the content never reach the backdrop.

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use pokesearch_common::overlay::{is_escape_key, OverlayLifecycle};

use crate::wasm_utils::{event_key, DocumentEventListener};

#[component]
pub fn Modal(
    /// Called on backdrop click or Escape
    on_close: EventHandler<()>,
    children: Element,
    /// Extra classes for the content panel
    #[props(default)]
    class: Option<String>,
) -> Element {
    let mut lifecycle: Signal<OverlayLifecycle<DocumentEventListener>> =
        use_signal(OverlayLifecycle::new);

    // use_effect so the window lookup runs after the first render
    use_effect(move || {
        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            return;
        };

        // The keydown callback runs from wasm-bindgen outside the Dioxus runtime
        let runtime = Runtime::current();
        let mut dismiss = dismiss_on_escape(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            on_close.call(());
        });

        lifecycle.write().open(move || {
            DocumentEventListener::new(document, "keydown", move |event| {
                dismiss(event_key(&event).as_deref())
            })
        });
    });

    use_drop(move || {
        if let Ok(mut lifecycle) = lifecycle.try_write() {
            lifecycle.close();
        }
    });

    let panel_class = class.unwrap_or_default();

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60 p-10",
            role: "dialog",
            aria_modal: "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-gray-800 rounded-lg shadow-xl overflow-auto max-w-lg w-full max-h-full p-4 {panel_class}",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Keydown handler of an open overlay: `on_close` runs for Escape only.
fn dismiss_on_escape(mut on_close: impl FnMut()) -> impl FnMut(Option<&str>) {
    move |key: Option<&str>| {
        if key.is_some_and(is_escape_key) {
            on_close();
        }
    }
}
