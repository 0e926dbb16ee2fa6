//! veil-ui - Overlay components for Dioxus apps
//!
//! The main export is [`ConfirmDialog`], usable either declaratively (mounted
//! with its own options) or imperatively through [`confirm_dialog`] and a
//! [`ConfirmBus`] provided via context.

pub mod components;

pub use components::*;
pub use veil_common::{Breakpoints, Locale, LocaleError};
