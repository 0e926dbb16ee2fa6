//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button - accessibility and click handling without styling.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] autofocus: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled,
            autofocus,
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled - the main action
    #[default]
    Primary,
    /// Filled red - destructive actions
    Danger,
    /// Text only, used for dismissive actions like "No"
    Text,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
}

/// Styled button with an optional leading icon
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] autofocus: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] icon: Option<Element>,
    label: String,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let sizing = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm",
        ButtonSize::Medium => "px-4 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "p-button bg-indigo-600 hover:bg-indigo-500 text-white disabled:opacity-50"
        }
        ButtonVariant::Danger => {
            "p-button p-button-danger bg-red-600 hover:bg-red-500 text-white disabled:opacity-50"
        }
        ButtonVariant::Text => "p-button text-gray-300 hover:text-white hover:bg-gray-700/50",
    };

    let base = format!("inline-flex items-center gap-2 rounded-lg transition-colors {sizing} {variant_class}");
    let computed_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base,
    };

    rsx! {
        ChromelessButton {
            disabled,
            autofocus,
            class: Some(computed_class),
            onclick,
            {icon}
            span { class: "p-button-label", "{label}" }
        }
    }
}
