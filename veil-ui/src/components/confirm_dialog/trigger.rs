//! Imperative entry point: `confirm_dialog(&bus, options)`

use tracing::debug;
use veil_common::OverlayBus;

use super::options::ConfirmOptions;

/// Event name confirm broadcasts are published under
pub const CONFIRM_DIALOG_EVENT: &str = "confirm-dialog";

/// Bus carrying confirm dialog broadcasts
pub type ConfirmBus = OverlayBus<ConfirmOptions>;

/// Show a confirm dialog through the listener mounted on `bus`.
///
/// `visible` defaults to true; when it resolves to true the options are
/// published right away. Nothing is validated here, the listening dialog
/// applies its defaults.
pub fn confirm_dialog(bus: &ConfirmBus, options: ConfirmOptions) -> ConfirmHandle {
    let options = ConfirmOptions {
        visible: Some(options.visible.unwrap_or(true)),
        ..options
    };
    if options.visible == Some(true) {
        bus.publish(CONFIRM_DIALOG_EVENT, &options);
    }
    ConfirmHandle {
        bus: bus.clone(),
        options,
    }
}

/// Re-show or hide a dialog started with [`confirm_dialog`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmHandle {
    bus: ConfirmBus,
    options: ConfirmOptions,
}

impl ConfirmHandle {
    /// Publish the first options with `overrides` laid over them.
    pub fn show(&self, overrides: ConfirmOptions) {
        let options = self.options.merged(overrides).visible(true);
        debug!(tag_key = ?options.tag_key, "Re-showing confirm dialog");
        self.bus.publish(CONFIRM_DIALOG_EVENT, &options);
    }

    /// Publish an untagged hide request.
    ///
    /// The request carries no tag key, so it reaches every listener and is
    /// honored by the untagged one, whichever dialog this handle started.
    pub fn hide(&self) {
        self.bus
            .publish(CONFIRM_DIALOG_EVENT, &ConfirmOptions::new().visible(false));
    }

    pub fn options(&self) -> &ConfirmOptions {
        &self.options
    }
}
