//! Imperative handle for a mounted `ConfirmDialog`

use dioxus::prelude::*;
use tracing::warn;

use super::options::ConfirmOptions;
use super::state::{ConfirmDialogState, Notify};

/// Lets a parent drive one `ConfirmDialog` directly, without the bus.
///
/// Create it with [`use_confirm_dialog_handle`] and pass it as the dialog's
/// `handle` prop. The dialog's bus subscription also goes through it.
#[derive(Clone, Copy, PartialEq)]
pub struct ConfirmDialogHandle {
    state: Signal<ConfirmDialogState>,
    declared: CopyValue<ConfirmOptions>,
}

pub fn use_confirm_dialog_handle() -> ConfirmDialogHandle {
    use_hook(|| ConfirmDialogHandle {
        state: Signal::new(ConfirmDialogState::default()),
        declared: CopyValue::new(ConfirmOptions::default()),
    })
}

impl ConfirmDialogHandle {
    /// Reconcile `options` exactly like a matching broadcast.
    pub fn confirm(&self, options: ConfirmOptions) {
        self.update(|state, declared| state.receive(declared, options));
    }

    pub fn accept(&self) {
        self.update(|state, declared| state.accept(declared));
    }

    pub fn reject(&self) {
        self.update(|state, declared| state.reject(declared));
    }

    /// Hide as if the user dismissed the dialog.
    pub fn dismiss(&self) {
        self.update(|state, declared| state.dismiss(declared));
    }

    /// Reactive: the calling component re-renders when visibility changes.
    pub fn is_visible(&self) -> bool {
        self.state.read().is_visible()
    }

    pub(crate) fn state(&self) -> Signal<ConfirmDialogState> {
        self.state
    }

    /// Reset to the declared options of a freshly mounted dialog.
    pub(crate) fn attach(&self, declared: &ConfirmOptions) {
        let mut state = self.state;
        state.set(ConfirmDialogState::new(declared));
        self.set_declared(declared.clone());
    }

    pub(crate) fn set_declared(&self, declared: ConfirmOptions) {
        let mut slot = self.declared;
        slot.set(declared);
    }

    pub(crate) fn settle_reshow(&self) {
        let mut state = self.state;
        let Ok(mut guard) = state.try_write() else {
            return;
        };
        guard.settle_reshow();
    }

    pub(crate) fn sync_declared_visible(&self, visible: bool) {
        self.update(|state, declared| state.sync_declared_visible(declared, visible));
    }

    fn update(&self, apply: impl FnOnce(&mut ConfirmDialogState, &ConfirmOptions) -> Notify) {
        let declared = match self.declared.try_read() {
            Ok(declared) => (*declared).clone(),
            Err(_) => {
                warn!("Confirm dialog is no longer mounted, ignoring update");
                return;
            }
        };
        let mut state = self.state;
        let notify = match state.try_write() {
            Ok(mut guard) => apply(&mut *guard, &declared),
            Err(_) => {
                warn!("Confirm dialog is no longer mounted, ignoring update");
                return;
            }
        };
        notify.run();
    }
}
