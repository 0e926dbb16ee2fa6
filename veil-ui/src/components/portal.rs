//! Portal - render content somewhere else in the document
//!
//! The content is rendered in place inside a wrapper element, then the
//! wrapper is moved under the append target once mounted. Dioxus addresses
//! nodes by id, so updates keep reaching the moved wrapper. Changing the
//! append target of a mounted portal moves it again; overlays that need a
//! clean remount should hide first.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

static PORTAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Where a portal puts its content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AppendTo {
    /// `document.body`
    #[default]
    Body,
    /// Stay where the portal is declared
    SelfHost,
    /// The element with this id
    Element(String),
}

/// Script that moves the portal wrapper under its target, if it must move.
pub fn relocate_script(portal_id: &str, append_to: &AppendTo) -> Option<String> {
    let target = match append_to {
        AppendTo::SelfHost => return None,
        AppendTo::Body => "document.body".to_string(),
        AppendTo::Element(id) => format!("document.getElementById({id:?})"),
    };
    Some(format!(
        "const node = document.getElementById({portal_id:?}); const target = {target}; \
         if (node && target && node.parentElement !== target) {{ target.appendChild(node); }}"
    ))
}

#[component]
pub fn Portal(#[props(default)] append_to: AppendTo, children: Element) -> Element {
    let portal_id = use_hook(|| {
        let id = PORTAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("portal-{}", id)
    });
    let portal_id_for_effect = portal_id.clone();

    use_effect(use_reactive((&append_to,), move |(append_to,)| {
        if let Some(script) = relocate_script(&portal_id_for_effect, &append_to) {
            let _ = document::eval(&script);
        }
    }));

    rsx! {
        div { id: "{portal_id}", class: "p-portal contents", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_host_does_not_move() {
        assert_eq!(relocate_script("portal-1", &AppendTo::SelfHost), None);
    }

    #[test]
    fn test_body_target() {
        let script = relocate_script("portal-1", &AppendTo::Body).unwrap();
        assert!(script.contains("document.getElementById(\"portal-1\")"));
        assert!(script.contains("const target = document.body;"));
    }

    #[test]
    fn test_element_target_is_quoted() {
        let script = relocate_script("portal-2", &AppendTo::Element("sidebar".into())).unwrap();
        assert!(script.contains("const target = document.getElementById(\"sidebar\");"));
    }
}
