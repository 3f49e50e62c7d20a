//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must not outlive the
//! closure, and `closure.forget()` would leak both. [`DocumentEventListener`]
//! owns the closure and removes the listener in `Drop`, so the listener's
//! lifetime follows Rust ownership:
//!
//! ```ignore
//! let listener = DocumentEventListener::new(document, "keydown", callback);
//! // ...
//! drop(listener); // listener removed
//! ```
//!
//! Overlays keep the listener inside an `OverlayLifecycle` so that open and
//! close map to exactly one attach and one detach.

use wasm_bindgen_x::prelude::*;

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DocumentEventListener {
    /// Attaches `callback` for `event_name` on the document.
    pub fn new(
        document: web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        if document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach document {} listener", event_name);
        }

        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// `KeyboardEvent.key` of a raw DOM event, if it has one.
pub fn event_key(event: &JsValue) -> Option<String> {
    js_sys_x::Reflect::get(event, &"key".into())
        .ok()
        .and_then(|key| key.as_string())
}
