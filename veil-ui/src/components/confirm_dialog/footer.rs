//! Labels and classes of the default footer

use dioxus::prelude::*;
use veil_common::{class_names, Locale};

use super::options::{Action, ConfirmOptions, FooterContext};
use crate::components::button::ButtonVariant;

/// What the default reject/accept buttons are built from
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FooterParts {
    pub accept_label: String,
    pub reject_label: String,
    pub accept_class_name: String,
    pub reject_class_name: String,
    pub reject_variant: ButtonVariant,
}

/// Resolve labels (options, then locale) and button classes for `options`.
///
/// The reject button is a text button unless the options give it a class.
pub(crate) fn footer_parts(options: &ConfirmOptions, locale: &Locale) -> FooterParts {
    let accept_label = options
        .accept_label
        .clone()
        .unwrap_or_else(|| locale.label("accept"));
    let reject_label = options
        .reject_label
        .clone()
        .unwrap_or_else(|| locale.label("reject"));
    let accept_class_name = class_names([
        Some("p-confirm-dialog-accept"),
        options.accept_class_name.as_deref(),
    ]);
    let reject_class_name = class_names([
        Some("p-confirm-dialog-reject"),
        options.reject_class_name.is_none().then_some("p-button-text"),
        options.reject_class_name.as_deref(),
    ]);
    let reject_variant = if options.reject_class_name.is_some() {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Text
    };

    FooterParts {
        accept_label,
        reject_label,
        accept_class_name,
        reject_class_name,
        reject_variant,
    }
}

impl FooterParts {
    /// Hand the parts to a footer builder along with the default footer.
    pub(crate) fn into_context(
        self,
        accept: Action,
        reject: Action,
        element: Element,
        options: ConfirmOptions,
    ) -> FooterContext {
        FooterContext {
            accept,
            reject,
            accept_class_name: self.accept_class_name,
            reject_class_name: self.reject_class_name,
            accept_label: self.accept_label,
            reject_label: self.reject_label,
            element,
            options,
        }
    }
}
