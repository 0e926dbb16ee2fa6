//! Confirm dialog options and the callback/content types they carry

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;
use veil_common::Breakpoints;

use crate::components::portal::AppendTo;

/// How the dialog was closed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    Accept,
    Reject,
}

impl ConfirmResult {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfirmResult::Accept => "accept",
            ConfirmResult::Reject => "reject",
        }
    }
}

/// Zero-argument callback. Equality is identity.
#[derive(Clone)]
pub struct Action(Rc<dyn Fn()>);

impl Action {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Action(Rc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// Hide callback. Receives `Some(result)` after accept/reject and `None`
/// for dismissals and programmatic hides.
#[derive(Clone)]
pub struct HideCallback(Rc<dyn Fn(Option<ConfirmResult>)>);

impl HideCallback {
    pub fn new(f: impl Fn(Option<ConfirmResult>) + 'static) -> Self {
        HideCallback(Rc::new(f))
    }

    pub fn call(&self, result: Option<ConfirmResult>) {
        (self.0)(result)
    }
}

impl PartialEq for HideCallback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for HideCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HideCallback(..)")
    }
}

/// Message content
#[derive(Clone)]
pub enum Content {
    Text(String),
    /// Built at render time from the options being displayed
    Render(Rc<dyn Fn(&ConfirmOptions) -> Element>),
}

impl Content {
    pub fn render(&self, options: &ConfirmOptions) -> Element {
        match self {
            Content::Text(text) => rsx! { "{text}" },
            Content::Render(build) => build(options),
        }
    }
}

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Content::Text(a), Content::Text(b)) => a == b,
            (Content::Render(a), Content::Render(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Content::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// What an icon builder gets to work with
pub struct IconContext<'a> {
    /// Class the dialog would put on a class-based icon
    pub class_name: &'a str,
    pub options: &'a ConfirmOptions,
}

/// Icon descriptor
#[derive(Clone)]
pub enum IconSpec {
    /// Icon font class(es), rendered as `<span class>`
    Class(String),
    Render(Rc<dyn Fn(IconContext<'_>) -> Element>),
}

impl IconSpec {
    pub fn class(icon: impl Into<String>) -> Self {
        IconSpec::Class(icon.into())
    }

    pub fn custom(build: impl Fn(IconContext<'_>) -> Element + 'static) -> Self {
        IconSpec::Render(Rc::new(build))
    }

    pub fn render(&self, class_name: &str, options: &ConfirmOptions) -> Element {
        match self {
            IconSpec::Class(icon) => rsx! {
                span { class: "{class_name} {icon}" }
            },
            IconSpec::Render(build) => build(IconContext {
                class_name,
                options,
            }),
        }
    }
}

impl PartialEq for IconSpec {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (IconSpec::Class(a), IconSpec::Class(b)) => a == b,
            (IconSpec::Render(a), IconSpec::Render(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for IconSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSpec::Class(class) => f.debug_tuple("Class").field(class).finish(),
            IconSpec::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Values a footer builder can reuse from the default footer
pub struct FooterContext {
    pub accept: Action,
    pub reject: Action,
    pub accept_class_name: String,
    pub reject_class_name: String,
    pub accept_label: String,
    pub reject_label: String,
    /// The default reject/accept button pair
    pub element: Element,
    pub options: ConfirmOptions,
}

/// Footer override
#[derive(Clone)]
pub enum Footer {
    /// Fixed content, replaces the default buttons
    Static(Rc<dyn Fn() -> Element>),
    Builder(Rc<dyn Fn(FooterContext) -> Element>),
}

impl Footer {
    pub fn fixed(content: impl Fn() -> Element + 'static) -> Self {
        Footer::Static(Rc::new(content))
    }

    pub fn resolve(&self, context: FooterContext) -> Element {
        match self {
            Footer::Static(content) => content(),
            Footer::Builder(build) => build(context),
        }
    }
}

impl PartialEq for Footer {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Footer::Static(a), Footer::Static(b)) => Rc::ptr_eq(a, b),
            (Footer::Builder(a), Footer::Builder(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Footer::Static(_) => f.write_str("Static(..)"),
            Footer::Builder(_) => f.write_str("Builder(..)"),
        }
    }
}

/// Everything a confirm dialog can be configured with.
///
/// Every field is optional so a partial set can be laid over another with
/// [`ConfirmOptions::merged`]. Unset fields fall back to the dialog's
/// defaults at render time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfirmOptions {
    /// Routes broadcasts to the listener with the same key
    pub tag_key: Option<String>,
    pub visible: Option<bool>,
    pub message: Option<Content>,
    pub header: Option<String>,
    pub icon: Option<IconSpec>,
    pub accept_label: Option<String>,
    pub reject_label: Option<String>,
    pub accept_icon: Option<IconSpec>,
    pub reject_icon: Option<IconSpec>,
    pub accept_class_name: Option<String>,
    pub reject_class_name: Option<String>,
    pub class_name: Option<String>,
    pub style: Option<String>,
    pub footer: Option<Footer>,
    pub breakpoints: Option<Breakpoints>,
    /// Id of the element the confirmation is about
    pub target: Option<String>,
    pub append_to: Option<AppendTo>,
    pub closable: Option<bool>,
    pub dismissable_mask: Option<bool>,
    pub close_on_escape: Option<bool>,
    pub on_accept: Option<Action>,
    pub on_reject: Option<Action>,
    pub on_hide: Option<HideCallback>,
}

impl ConfirmOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay `overrides` over `self`: every field set in `overrides` wins.
    pub fn merged(&self, overrides: ConfirmOptions) -> ConfirmOptions {
        let base = self.clone();
        ConfirmOptions {
            tag_key: overrides.tag_key.or(base.tag_key),
            visible: overrides.visible.or(base.visible),
            message: overrides.message.or(base.message),
            header: overrides.header.or(base.header),
            icon: overrides.icon.or(base.icon),
            accept_label: overrides.accept_label.or(base.accept_label),
            reject_label: overrides.reject_label.or(base.reject_label),
            accept_icon: overrides.accept_icon.or(base.accept_icon),
            reject_icon: overrides.reject_icon.or(base.reject_icon),
            accept_class_name: overrides.accept_class_name.or(base.accept_class_name),
            reject_class_name: overrides.reject_class_name.or(base.reject_class_name),
            class_name: overrides.class_name.or(base.class_name),
            style: overrides.style.or(base.style),
            footer: overrides.footer.or(base.footer),
            breakpoints: overrides.breakpoints.or(base.breakpoints),
            target: overrides.target.or(base.target),
            append_to: overrides.append_to.or(base.append_to),
            closable: overrides.closable.or(base.closable),
            dismissable_mask: overrides.dismissable_mask.or(base.dismissable_mask),
            close_on_escape: overrides.close_on_escape.or(base.close_on_escape),
            on_accept: overrides.on_accept.or(base.on_accept),
            on_reject: overrides.on_reject.or(base.on_reject),
            on_hide: overrides.on_hide.or(base.on_hide),
        }
    }

    pub fn tag_key(mut self, tag_key: impl Into<String>) -> Self {
        self.tag_key = Some(tag_key.into());
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(Content::Text(message.into()));
        self
    }

    pub fn message_with(mut self, build: impl Fn(&ConfirmOptions) -> Element + 'static) -> Self {
        self.message = Some(Content::Render(Rc::new(build)));
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn icon(mut self, icon: IconSpec) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn accept_label(mut self, label: impl Into<String>) -> Self {
        self.accept_label = Some(label.into());
        self
    }

    pub fn reject_label(mut self, label: impl Into<String>) -> Self {
        self.reject_label = Some(label.into());
        self
    }

    pub fn accept_icon(mut self, icon: IconSpec) -> Self {
        self.accept_icon = Some(icon);
        self
    }

    pub fn reject_icon(mut self, icon: IconSpec) -> Self {
        self.reject_icon = Some(icon);
        self
    }

    pub fn accept_class_name(mut self, class: impl Into<String>) -> Self {
        self.accept_class_name = Some(class.into());
        self
    }

    pub fn reject_class_name(mut self, class: impl Into<String>) -> Self {
        self.reject_class_name = Some(class.into());
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn footer_with(mut self, build: impl Fn(FooterContext) -> Element + 'static) -> Self {
        self.footer = Some(Footer::Builder(Rc::new(build)));
        self
    }

    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn append_to(mut self, append_to: AppendTo) -> Self {
        self.append_to = Some(append_to);
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    pub fn dismissable_mask(mut self, dismissable: bool) -> Self {
        self.dismissable_mask = Some(dismissable);
        self
    }

    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = Some(close);
        self
    }

    pub fn on_accept(mut self, f: impl Fn() + 'static) -> Self {
        self.on_accept = Some(Action::new(f));
        self
    }

    pub fn on_reject(mut self, f: impl Fn() + 'static) -> Self {
        self.on_reject = Some(Action::new(f));
        self
    }

    pub fn on_hide(mut self, f: impl Fn(Option<ConfirmResult>) + 'static) -> Self {
        self.on_hide = Some(HideCallback::new(f));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_prefers_overrides() {
        let base = ConfirmOptions::new()
            .message("Delete?")
            .header("Confirm")
            .tag_key("main");
        let merged = base.merged(ConfirmOptions::new().header("Really?").visible(true));

        assert_eq!(merged.header.as_deref(), Some("Really?"));
        assert_eq!(merged.message, Some(Content::Text("Delete?".into())));
        assert_eq!(merged.tag_key.as_deref(), Some("main"));
        assert_eq!(merged.visible, Some(true));
    }

    #[test]
    fn test_merged_keeps_callbacks_identity() {
        let base = ConfirmOptions::new().on_accept(|| {});
        let merged = base.merged(ConfirmOptions::new());
        assert_eq!(merged.on_accept, base.on_accept);
    }

    #[test]
    fn test_action_equality_is_identity() {
        let a = Action::new(|| {});
        let b = Action::new(|| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_result_tags() {
        assert_eq!(ConfirmResult::Accept.as_str(), "accept");
        assert_eq!(ConfirmResult::Reject.as_str(), "reject");
    }
}
