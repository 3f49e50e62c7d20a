//! Open/closed lifecycle of a dismissible overlay
//!
//! An open overlay holds a guard for whatever it acquired on opening,
//! typically a document key listener whose `Drop` removes it again.
//! Opening an open overlay does not acquire a second guard, and closing
//! drops the guard exactly once, so repeated renders or repeated dismissals
//! cannot leak or double-release the listener.

/// DOM `KeyboardEvent.key` of the key that dismisses an overlay.
pub const DISMISS_KEY: &str = "Escape";

pub fn is_escape_key(key: &str) -> bool {
    key == DISMISS_KEY
}

/// Holds the guard acquired while the overlay is open
#[derive(Debug)]
pub struct OverlayLifecycle<G> {
    guard: Option<G>,
}

impl<G> Default for OverlayLifecycle<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> OverlayLifecycle<G> {
    pub fn new() -> Self {
        Self { guard: None }
    }

    /// Open the overlay, acquiring a guard only if currently closed.
    ///
    /// Returns whether `acquire` ran.
    pub fn open(&mut self, acquire: impl FnOnce() -> G) -> bool {
        if self.guard.is_some() {
            return false;
        }
        self.guard = Some(acquire());
        true
    }

    /// Close the overlay, releasing the guard. Returns whether anything was released.
    pub fn close(&mut self) -> bool {
        self.guard.take().is_some()
    }
}
