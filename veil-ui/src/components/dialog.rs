//! Dialog primitive using the native HTML `<dialog>` element
//!
//! Uses `showModal()` for browser-native:
//! - Top-layer rendering
//! - Focus trap
//! - Escape key (`cancel` event)
//! - `::backdrop` styling
//!
//! `cancel` only fires from user actions, never from `close()`, so every
//! `on_hide` call corresponds to one dismissal gesture: escape, mask click
//! or the header close button. `showModal()` throws if the dialog is already
//! open, so the open/close script checks `open` first.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use veil_common::{breakpoint_css, class_names, Breakpoints};

use crate::components::icons::XIcon;

static DIALOG_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn toggle_script(dialog_id: &str, open: bool) -> String {
    if open {
        format!("const d = document.getElementById({dialog_id:?}); if (d && !d.open) {{ d.showModal(); }}")
    } else {
        format!("const d = document.getElementById({dialog_id:?}); if (d && d.open) {{ d.close(); }}")
    }
}

#[component]
pub fn Dialog(
    /// Whether the dialog is open
    visible: bool,
    /// Called once per user dismissal (escape, mask click, close button)
    on_hide: EventHandler<()>,
    /// Body content
    children: Element,
    /// Footer content
    footer: Element,
    #[props(default)] header: Option<String>,
    /// Extra classes for the dialog panel
    #[props(default)]
    class: Option<String>,
    /// Inline style for the dialog panel
    #[props(default)]
    style: Option<String>,
    #[props(default)] breakpoints: Option<Breakpoints>,
    #[props(default = true)] closable: bool,
    #[props(default)] dismissable_mask: bool,
    #[props(default = true)] close_on_escape: bool,
    #[props(default = "Close".to_string())] close_label: String,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = DIALOG_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("dialog-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(use_reactive((&visible,), move |(visible,)| {
        let _ = document::eval(&toggle_script(&dialog_id_for_effect, visible));
    }));

    let css = breakpoints
        .as_ref()
        .map(|bps| breakpoint_css(&dialog_id, bps))
        .unwrap_or_default();
    let panel_class = class_names([
        Some("p-dialog bg-gray-800 rounded-lg shadow-xl max-w-md w-full mx-4"),
        class.as_deref(),
    ]);

    // Layout lives in the inner container; display classes on the <dialog>
    // itself would override the native display:none when closed.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/80",
            oncancel: move |evt| {
                evt.prevent_default();
                if close_on_escape {
                    on_hide.call(());
                }
            },
            if visible {
                if !css.is_empty() {
                    style { "{css}" }
                }
                div {
                    class: "p-dialog-mask fixed inset-0 flex items-center justify-center",
                    onclick: move |_| {
                        if dismissable_mask {
                            on_hide.call(());
                        }
                    },
                    div {
                        class: "{panel_class}",
                        style: style.as_deref(),
                        role: "alertdialog",
                        aria_modal: "true",
                        "data-dialog-id": "{dialog_id}",
                        onclick: move |evt| evt.stop_propagation(),
                        div { class: "p-dialog-header flex items-center justify-between p-6 pb-2",
                            if let Some(header) = header.as_deref() {
                                span { class: "p-dialog-title text-xl font-bold text-white", "{header}" }
                            }
                            if closable {
                                button {
                                    class: "p-dialog-header-close text-gray-400 hover:text-white",
                                    r#type: "button",
                                    aria_label: "{close_label}",
                                    onclick: move |_| on_hide.call(()),
                                    XIcon {}
                                }
                            }
                        }
                        div { class: "p-dialog-content flex items-center gap-3 px-6 py-4 text-gray-300",
                            {children}
                        }
                        div { class: "p-dialog-footer flex gap-3 justify-end px-6 pb-6", {footer} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_script_is_idempotent() {
        let open = toggle_script("dialog-3", true);
        assert!(open.contains("if (d && !d.open)"));
        assert!(open.contains("showModal()"));

        let close = toggle_script("dialog-3", false);
        assert!(close.contains("if (d && d.open)"));
        assert!(close.contains("d.close()"));
    }
}
