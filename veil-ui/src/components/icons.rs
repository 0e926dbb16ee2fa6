//! Icon components using the Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit the text color.
//! Default size is w-4 h-4, override with the `class` prop.

use dioxus::prelude::*;

/// Shared 24x24 stroked `<svg>` frame; children are the icon's shapes.
#[component]
pub fn LucideIcon(#[props(default = "w-4 h-4".to_string())] class: String, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

/// X icon (close)
#[component]
pub fn XIcon(#[props(default = "w-4 h-4".to_string())] class: String) -> Element {
    rsx! {
        LucideIcon { class,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

/// Check icon (accept)
#[component]
pub fn CheckIcon(#[props(default = "w-4 h-4".to_string())] class: String) -> Element {
    rsx! {
        LucideIcon { class,
            path { d: "M20 6 9 17l-5-5" }
        }
    }
}

/// Alert triangle icon (warning)
#[component]
pub fn AlertTriangleIcon(#[props(default = "w-4 h-4".to_string())] class: String) -> Element {
    rsx! {
        LucideIcon { class,
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        }
    }
}

/// Info icon (circled i)
#[component]
pub fn InfoIcon(#[props(default = "w-4 h-4".to_string())] class: String) -> Element {
    rsx! {
        LucideIcon { class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 16v-4" }
            path { d: "M12 8h.01" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_render() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                XIcon {}
                CheckIcon { class: "w-6 h-6".to_string() }
                AlertTriangleIcon {}
                InfoIcon {}
            }
        });
        dom.rebuild_in_place();
    }
}
