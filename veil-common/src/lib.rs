//! veil-common - Framework-free building blocks for veil overlays
//!
//! Holds the pieces of the confirm dialog that don't need a renderer:
//! the overlay event bus, the dialog phase state machine, class-name and
//! breakpoint helpers, and the locale table.

pub mod breakpoints;
pub mod bus;
pub mod class_names;
pub mod dialog_phase;
pub mod locale;

pub use breakpoints::{breakpoint_css, Breakpoint, Breakpoints};
pub use bus::{OverlayBus, SubscriptionId};
pub use class_names::class_names;
pub use dialog_phase::{reconcile, BroadcastView, DialogPhase, Reconcile};
pub use locale::{Locale, LocaleError};
