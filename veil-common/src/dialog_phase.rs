//! Dialog phase state machine
//!
//! A confirm dialog is either hidden, visible, or hidden while waiting to be
//! shown again on a new target. Moving a mounted dialog to another target
//! requires an unmount/remount of the underlying dialog, so a retarget goes
//! through `PendingReshow` and settles to `Visible` after the next render.
//!
//! ```text
//!              Show                        settle
//!   Hidden ──────────▶ Visible ◀──────────────────── PendingReshow
//!     ▲  ◀──────────────  │                                ▲
//!     │       Hide        │            Retarget            │
//!     └───────────────────┴────────────────────────────────┘
//! ```

/// Visibility phase of a confirm dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Hidden,
    Visible,
    /// Hidden, shown again with the held options once the hide has rendered
    PendingReshow,
}

/// Outcome of reconciling a broadcast against the current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// Tag key differs; the broadcast is meant for another listener
    ForeignTag,
    /// Target changed and the dialog has no static target of its own
    Retarget,
    Show,
    Hide,
    /// Same visibility and target; nothing to do
    Unchanged,
}

impl Reconcile {
    /// Whether the broadcast options should replace the held options
    pub fn stores_options(self) -> bool {
        matches!(self, Reconcile::Retarget | Reconcile::Show | Reconcile::Hide)
    }
}

/// The fields of a broadcast that reconciliation looks at
#[derive(Debug, Clone, Copy)]
pub struct BroadcastView<'a, G> {
    pub tag_key: Option<&'a str>,
    pub visible: bool,
    pub target: Option<&'a G>,
}

impl DialogPhase {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            DialogPhase::Visible
        } else {
            DialogPhase::Hidden
        }
    }

    /// `PendingReshow` renders as hidden
    pub fn is_visible(self) -> bool {
        self == DialogPhase::Visible
    }

    /// Apply a reconciliation outcome.
    pub fn next(self, step: Reconcile) -> DialogPhase {
        match step {
            Reconcile::Retarget => DialogPhase::PendingReshow,
            Reconcile::Show => DialogPhase::Visible,
            Reconcile::Hide => DialogPhase::Hidden,
            Reconcile::ForeignTag | Reconcile::Unchanged => self,
        }
    }

    /// Complete a pending reshow. Other phases are left alone.
    pub fn settle(self) -> DialogPhase {
        match self {
            DialogPhase::PendingReshow => DialogPhase::Visible,
            other => other,
        }
    }
}

/// Decide what a broadcast does to a dialog.
///
/// `current_target` is the target of the options the dialog is rendering
/// (held broadcast, else its own). `has_static_target` is true when the
/// dialog was declared with a target, in which case broadcasts never move it.
pub fn reconcile<G: PartialEq>(
    own_tag_key: Option<&str>,
    has_static_target: bool,
    phase: DialogPhase,
    current_target: Option<&G>,
    incoming: BroadcastView<'_, G>,
) -> Reconcile {
    if incoming.tag_key != own_tag_key {
        return Reconcile::ForeignTag;
    }

    if incoming.target != current_target && !has_static_target {
        return Reconcile::Retarget;
    }

    if incoming.visible != phase.is_visible() {
        return if incoming.visible {
            Reconcile::Show
        } else {
            Reconcile::Hide
        };
    }

    Reconcile::Unchanged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view<'a>(
        tag_key: Option<&'a str>,
        visible: bool,
        target: Option<&'a String>,
    ) -> BroadcastView<'a, String> {
        BroadcastView {
            tag_key,
            visible,
            target,
        }
    }

    #[test]
    fn test_foreign_tag_is_ignored() {
        let step = reconcile(
            Some("T1"),
            false,
            DialogPhase::Hidden,
            None,
            view(Some("T2"), true, None),
        );
        assert_eq!(step, Reconcile::ForeignTag);
        assert_eq!(DialogPhase::Hidden.next(step), DialogPhase::Hidden);
        assert!(!step.stores_options());
    }

    #[test]
    fn test_untagged_listener_ignores_tagged_broadcast() {
        let step = reconcile::<String>(
            None,
            false,
            DialogPhase::Visible,
            None,
            view(Some("A"), false, None),
        );
        assert_eq!(step, Reconcile::ForeignTag);
    }

    #[test]
    fn test_show_when_hidden() {
        let step = reconcile(
            Some("A"),
            false,
            DialogPhase::Hidden,
            None,
            view(Some("A"), true, None),
        );
        assert_eq!(step, Reconcile::Show);
        assert!(step.stores_options());
        assert_eq!(DialogPhase::Hidden.next(step), DialogPhase::Visible);
    }

    #[test]
    fn test_hide_when_visible() {
        let step = reconcile::<String>(None, false, DialogPhase::Visible, None, view(None, false, None));
        assert_eq!(step, Reconcile::Hide);
        assert_eq!(DialogPhase::Visible.next(step), DialogPhase::Hidden);
    }

    #[test]
    fn test_duplicate_broadcast_is_unchanged() {
        let step = reconcile::<String>(None, false, DialogPhase::Visible, None, view(None, true, None));
        assert_eq!(step, Reconcile::Unchanged);
        assert!(!step.stores_options());
    }

    #[test]
    fn test_target_change_retargets_then_settles_visible() {
        let target = "row-3".to_string();
        let step = reconcile(
            None,
            false,
            DialogPhase::Visible,
            None,
            view(None, true, Some(&target)),
        );
        assert_eq!(step, Reconcile::Retarget);

        let phase = DialogPhase::Visible.next(step);
        assert_eq!(phase, DialogPhase::PendingReshow);
        assert!(!phase.is_visible());
        assert_eq!(phase.settle(), DialogPhase::Visible);
    }

    #[test]
    fn test_retarget_from_hide_request_still_reshows() {
        let old = "row-1".to_string();
        let step = reconcile(None, false, DialogPhase::Visible, Some(&old), view(None, false, None));
        assert_eq!(step, Reconcile::Retarget);
        assert_eq!(DialogPhase::Visible.next(step).settle(), DialogPhase::Visible);
    }

    #[test]
    fn test_static_target_never_retargets() {
        let own = "anchor".to_string();
        let other = "elsewhere".to_string();
        let step = reconcile(
            None,
            true,
            DialogPhase::Hidden,
            Some(&own),
            view(None, true, Some(&other)),
        );
        assert_eq!(step, Reconcile::Show);
    }

    #[test]
    fn test_retarget_takes_priority_over_visibility() {
        let old = "a".to_string();
        let new = "b".to_string();
        let step = reconcile(
            None,
            false,
            DialogPhase::Hidden,
            Some(&old),
            view(None, false, Some(&new)),
        );
        assert_eq!(step, Reconcile::Retarget);
    }

    #[test]
    fn test_settle_leaves_stable_phases() {
        assert_eq!(DialogPhase::Hidden.settle(), DialogPhase::Hidden);
        assert_eq!(DialogPhase::Visible.settle(), DialogPhase::Visible);
    }
}
