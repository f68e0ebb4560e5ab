//! Correction listener: Single-subscriber notification of applied corrections.

use std::rc::Weak;

/// Observer notified after an RTL correction has been applied.
///
/// Invoked synchronously inside the layout pass, after the scroll offset has
/// been written, so implementations may read the just-applied position.
pub trait CorrectionListener {
    /// Called once per corrected layout pass.
    fn on_correction(&self);
}

/// Single replace-not-queue listener slot holding a weak reference.
#[derive(Default)]
pub(crate) struct ListenerSlot {
    slot: Option<Weak<dyn CorrectionListener>>,
}

impl ListenerSlot {
    /// Replace the registered listener. The previous one is dropped without
    /// notification.
    pub fn set(&mut self, listener: Option<Weak<dyn CorrectionListener>>) {
        self.slot = listener;
    }

    /// Notify the listener if one is registered and still alive.
    ///
    /// Returns whether a notification was delivered. A dead weak reference
    /// counts as unregistered and is cleared.
    pub fn notify(&mut self) -> bool {
        match self.slot.as_ref().and_then(Weak::upgrade) {
            Some(listener) => {
                listener.on_correction();
                true
            }
            None => {
                self.slot = None;
                false
            }
        }
    }
}
