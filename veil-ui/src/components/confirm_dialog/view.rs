//! ConfirmDialog component

use dioxus::prelude::*;
use tracing::debug;
use veil_common::{class_names, DialogPhase, Locale, SubscriptionId};

use super::footer::footer_parts;
use super::handle::{use_confirm_dialog_handle, ConfirmDialogHandle};
use super::options::{Action, ConfirmOptions};
use super::state::ConfirmDialogState;
use super::trigger::{ConfirmBus, CONFIRM_DIALOG_EVENT};
use crate::components::button::Button;
use crate::components::dialog::Dialog;
use crate::components::portal::Portal;

/// Accept/reject confirmation dialog.
///
/// Mounted with a message or a target it is fully controlled by `options`
/// (and `handle`, if given). Mounted without either it becomes the listener
/// for [`confirm_dialog`](super::confirm_dialog) calls on the [`ConfirmBus`]
/// in context, taking broadcasts whose tag key matches its own.
#[component]
pub fn ConfirmDialog(
    #[props(default)] options: ConfirmOptions,
    #[props(default)] handle: Option<ConfirmDialogHandle>,
) -> Element {
    let own_handle = use_confirm_dialog_handle();
    let handle = handle.unwrap_or(own_handle);
    let locale = try_use_context::<Locale>().unwrap_or_default();
    let bus = try_use_context::<ConfirmBus>();

    use_hook(|| handle.attach(&options));
    handle.set_declared(options.clone());

    // Bus subscription follows listener eligibility and ends with the dialog
    let listens = ConfirmDialogState::listens_to_bus(&options);
    let tag_key = options.tag_key.clone();
    let mut subscription = use_hook(|| CopyValue::new(None::<SubscriptionId>));
    let bus_for_effect = bus.clone();
    use_effect(use_reactive((&listens,), move |(listens,)| {
        let Some(bus) = bus_for_effect.as_ref() else {
            if listens {
                debug!(?tag_key, "No ConfirmBus in context, confirm dialog won't listen");
            }
            return;
        };
        if let Some(id) = subscription.write().take() {
            bus.unsubscribe(CONFIRM_DIALOG_EVENT, id);
        }
        if listens {
            let id = bus.subscribe(CONFIRM_DIALOG_EVENT, move |incoming: &ConfirmOptions| {
                handle.confirm(incoming.clone());
            });
            subscription.set(Some(id));
        }
    }));
    use_drop(move || {
        let Some(bus) = bus.as_ref() else {
            return;
        };
        if let Ok(mut slot) = subscription.try_write() {
            if let Some(id) = slot.take() {
                bus.unsubscribe(CONFIRM_DIALOG_EVENT, id);
            }
        }
    });

    let declared_visible = options.visible.unwrap_or(false);
    use_effect(use_reactive((&declared_visible,), move |(visible,)| {
        handle.sync_declared_visible(visible);
    }));

    let phase = handle.state().read().phase();
    use_effect(use_reactive((&phase,), move |(phase,)| {
        if phase == DialogPhase::PendingReshow {
            handle.settle_reshow();
        }
    }));

    let current = handle.state().read().current(&options).clone();

    let parts = footer_parts(&current, &locale);
    let accept_icon = current
        .accept_icon
        .as_ref()
        .map(|icon| icon.render("p-button-icon", &current));
    let reject_icon = current
        .reject_icon
        .as_ref()
        .map(|icon| icon.render("p-button-icon", &current));

    let default_footer = rsx! {
        Button {
            label: parts.reject_label.clone(),
            variant: parts.reject_variant,
            class: Some(parts.reject_class_name.clone()),
            icon: reject_icon,
            onclick: move |_| handle.reject(),
        }
        Button {
            label: parts.accept_label.clone(),
            class: Some(parts.accept_class_name.clone()),
            icon: accept_icon,
            autofocus: true,
            onclick: move |_| handle.accept(),
        }
    };

    let footer = match current.footer.as_ref() {
        Some(footer) => footer.resolve(parts.into_context(
            Action::new(move || handle.accept()),
            Action::new(move || handle.reject()),
            default_footer,
            current.clone(),
        )),
        None => default_footer,
    };

    let message = current.message.as_ref().map(|message| message.render(&current));
    let icon = current
        .icon
        .as_ref()
        .map(|icon| icon.render("p-confirm-dialog-icon", &current));
    let dialog_class = class_names([Some("p-confirm-dialog"), current.class_name.as_deref()]);

    rsx! {
        Portal { append_to: current.append_to.clone().unwrap_or_default(),
            Dialog {
                visible: phase.is_visible(),
                header: current.header.clone(),
                class: Some(dialog_class),
                style: current.style.clone(),
                breakpoints: current.breakpoints.clone(),
                closable: current.closable.unwrap_or(true),
                dismissable_mask: current.dismissable_mask.unwrap_or(false),
                close_on_escape: current.close_on_escape.unwrap_or(true),
                close_label: locale.label("close"),
                footer,
                on_hide: move |_| handle.dismiss(),
                {icon}
                span { class: "p-confirm-dialog-message", {message} }
            }
        }
    }
}
