//! Confirm dialog
//!
//! Two ways to use it:
//!
//! - Declarative: mount `ConfirmDialog { options: ConfirmOptions::new().message(..).visible(open) }`
//!   and drive it through its props or a [`ConfirmDialogHandle`].
//! - Imperative: call [`provide_confirm_bus`] near the root, mount one bare
//!   `ConfirmDialog {}`, then call [`confirm_dialog`] from anywhere below.

mod footer;
mod handle;
mod options;
mod state;
mod trigger;
mod view;

use dioxus::prelude::*;

pub use handle::{use_confirm_dialog_handle, ConfirmDialogHandle};
pub use options::{
    Action, ConfirmOptions, ConfirmResult, Content, Footer, FooterContext, HideCallback,
    IconContext, IconSpec,
};
pub use state::{ConfirmDialogState, Notify};
pub use trigger::{confirm_dialog, ConfirmBus, ConfirmHandle, CONFIRM_DIALOG_EVENT};
pub use view::ConfirmDialog;

/// Provide a fresh [`ConfirmBus`] to this component's subtree.
pub fn provide_confirm_bus() -> ConfirmBus {
    use_context_provider(ConfirmBus::new)
}

/// The nearest [`ConfirmBus`] in context.
pub fn use_confirm_bus() -> ConfirmBus {
    use_context::<ConfirmBus>()
}
