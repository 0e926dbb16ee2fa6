//! Overlay components

pub mod button;
pub mod confirm_dialog;
pub mod dialog;
pub mod icons;
pub mod portal;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use confirm_dialog::{
    confirm_dialog, provide_confirm_bus, use_confirm_bus, use_confirm_dialog_handle, Action,
    ConfirmBus, ConfirmDialog, ConfirmDialogHandle, ConfirmDialogState, ConfirmHandle,
    ConfirmOptions, ConfirmResult, Content, Footer, FooterContext, HideCallback, IconContext,
    IconSpec, Notify, CONFIRM_DIALOG_EVENT,
};
pub use dialog::Dialog;
pub use icons::{AlertTriangleIcon, CheckIcon, InfoIcon, LucideIcon, XIcon};
pub use portal::{AppendTo, Portal};
