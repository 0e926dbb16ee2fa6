//! Confirm dialog state
//!
//! The renderer-independent half of `ConfirmDialog`: which phase the dialog
//! is in, which options it is showing, and which user callbacks a change
//! has to fire. Callbacks are returned as a [`Notify`] instead of being
//! called in place, so the caller can release its borrow of the state first
//! (a callback is free to publish another broadcast).

use std::fmt;

use tracing::debug;
use veil_common::{reconcile, BroadcastView, DialogPhase, Reconcile};

use super::options::{Action, ConfirmOptions, ConfirmResult, HideCallback};

enum Pending {
    Action(Action),
    Hide(HideCallback, Option<ConfirmResult>),
}

/// User callbacks to run once the state is no longer borrowed
#[must_use = "callbacks only fire when the notification is run"]
#[derive(Default)]
pub struct Notify(Vec<Pending>);

impl Notify {
    fn push_action(&mut self, action: Option<&Action>) {
        if let Some(action) = action {
            self.0.push(Pending::Action(action.clone()));
        }
    }

    fn push_hide(&mut self, on_hide: Option<&HideCallback>, result: Option<ConfirmResult>) {
        if let Some(on_hide) = on_hide {
            self.0.push(Pending::Hide(on_hide.clone(), result));
        }
    }

    fn append(&mut self, mut other: Notify) {
        self.0.append(&mut other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fire the callbacks in order.
    pub fn run(self) {
        for pending in self.0 {
            match pending {
                Pending::Action(action) => action.call(),
                Pending::Hide(on_hide, result) => on_hide.call(result),
            }
        }
    }
}

impl fmt::Debug for Notify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Notify").field(&self.0.len()).finish()
    }
}

/// Phase plus the most recently accepted broadcast.
///
/// Methods take the dialog's declared options because those are owned by
/// the component props, not by the state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfirmDialogState {
    phase: DialogPhase,
    held: Option<ConfirmOptions>,
}

impl ConfirmDialogState {
    pub fn new(declared: &ConfirmOptions) -> Self {
        Self {
            phase: DialogPhase::from_visible(declared.visible.unwrap_or(false)),
            held: None,
        }
    }

    /// Only a dialog declared without message and target acts as the global
    /// listener; one with either is driven by its owner alone.
    pub fn listens_to_bus(declared: &ConfirmOptions) -> bool {
        declared.message.is_none() && declared.target.is_none()
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    pub fn held(&self) -> Option<&ConfirmOptions> {
        self.held.as_ref()
    }

    /// Options being rendered: the held broadcast, else the declared ones.
    pub fn current<'a>(&'a self, declared: &'a ConfirmOptions) -> &'a ConfirmOptions {
        self.held.as_ref().unwrap_or(declared)
    }

    /// Reconcile a broadcast (or a direct `confirm` call).
    pub fn receive(&mut self, declared: &ConfirmOptions, incoming: ConfirmOptions) -> Notify {
        let step = reconcile(
            declared.tag_key.as_deref(),
            declared.target.is_some(),
            self.phase,
            self.current(declared).target.as_ref(),
            BroadcastView {
                tag_key: incoming.tag_key.as_deref(),
                visible: incoming.visible.unwrap_or(false),
                target: incoming.target.as_ref(),
            },
        );
        debug!(?step, phase = ?self.phase, tag_key = ?declared.tag_key, "Reconciled confirm broadcast");

        // A retarget hides with the options being replaced, a plain hide with the new ones.
        // The retarget hide is reported even when the dialog was already hidden.
        let mut notify = Notify::default();
        if step == Reconcile::Retarget {
            notify.push_hide(self.current(declared).on_hide.as_ref(), None);
            self.phase = DialogPhase::Hidden;
        }
        if step.stores_options() {
            self.held = Some(incoming);
        }
        match step {
            Reconcile::Hide => notify.append(self.hide(declared, None)),
            _ => self.phase = self.phase.next(step),
        }
        notify
    }

    /// Finish a retarget after the hidden dialog has rendered.
    /// Returns whether anything changed.
    pub fn settle_reshow(&mut self) -> bool {
        if self.phase != DialogPhase::PendingReshow {
            return false;
        }
        self.phase = self.phase.settle();
        debug!(phase = ?self.phase, "Settled confirm dialog reshow");
        true
    }

    /// Follow a change of the declared `visible` property.
    pub fn sync_declared_visible(&mut self, declared: &ConfirmOptions, visible: bool) -> Notify {
        if visible {
            self.phase = self.phase.next(Reconcile::Show);
            Notify::default()
        } else if self.phase != DialogPhase::Hidden {
            self.hide(declared, None)
        } else {
            Notify::default()
        }
    }

    pub fn accept(&mut self, declared: &ConfirmOptions) -> Notify {
        let mut notify = Notify::default();
        notify.push_action(self.current(declared).on_accept.as_ref());
        notify.append(self.hide(declared, Some(ConfirmResult::Accept)));
        notify
    }

    pub fn reject(&mut self, declared: &ConfirmOptions) -> Notify {
        let mut notify = Notify::default();
        notify.push_action(self.current(declared).on_reject.as_ref());
        notify.append(self.hide(declared, Some(ConfirmResult::Reject)));
        notify
    }

    /// User dismissal through the dialog itself (escape, mask, close button).
    pub fn dismiss(&mut self, declared: &ConfirmOptions) -> Notify {
        self.hide(declared, None)
    }

    // `on_hide` fires for a user decision, or when a shown dialog goes away.
    fn hide(&mut self, declared: &ConfirmOptions, result: Option<ConfirmResult>) -> Notify {
        let mut notify = Notify::default();
        if result.is_some() || self.phase.is_visible() {
            notify.push_hide(self.current(declared).on_hide.as_ref(), result);
        }
        self.phase = DialogPhase::Hidden;
        notify
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    fn logged(log: &Log, tag: &str) -> ConfirmOptions {
        let (a, r, h) = (log.clone(), log.clone(), log.clone());
        let tag_a = tag.to_string();
        let tag_r = tag.to_string();
        let tag_h = tag.to_string();
        ConfirmOptions::new()
            .on_accept(move || a.borrow_mut().push(format!("{tag_a}:accept")))
            .on_reject(move || r.borrow_mut().push(format!("{tag_r}:reject")))
            .on_hide(move |result| {
                h.borrow_mut().push(format!(
                    "{tag_h}:hide:{}",
                    result.map_or("none", ConfirmResult::as_str)
                ))
            })
    }

    #[test]
    fn test_new_follows_declared_visibility() {
        assert_eq!(ConfirmDialogState::new(&ConfirmOptions::new()).phase(), DialogPhase::Hidden);
        assert_eq!(
            ConfirmDialogState::new(&ConfirmOptions::new().visible(true)).phase(),
            DialogPhase::Visible
        );
    }

    #[test]
    fn test_listens_only_without_message_and_target() {
        assert!(ConfirmDialogState::listens_to_bus(&ConfirmOptions::new()));
        assert!(!ConfirmDialogState::listens_to_bus(&ConfirmOptions::new().message("Sure?")));
        assert!(!ConfirmDialogState::listens_to_bus(&ConfirmOptions::new().target("row-1")));
    }

    #[test]
    fn test_show_stores_broadcast() {
        let declared = ConfirmOptions::new().tag_key("A");
        let mut state = ConfirmDialogState::new(&declared);

        let incoming = ConfirmOptions::new().tag_key("A").visible(true).message("Proceed?");
        let notify = state.receive(&declared, incoming.clone());

        assert!(notify.is_empty());
        assert!(state.is_visible());
        assert_eq!(state.held(), Some(&incoming));
        assert_eq!(state.current(&declared), &incoming);
    }

    #[test]
    fn test_foreign_tag_changes_nothing() {
        let declared = ConfirmOptions::new().tag_key("T1");
        let mut state = ConfirmDialogState::new(&declared);

        let notify = state.receive(&declared, ConfirmOptions::new().tag_key("T2").visible(true));
        assert!(notify.is_empty());
        assert_eq!(state, ConfirmDialogState::new(&declared));
    }

    #[test]
    fn test_accept_runs_callbacks_in_order_and_hides() {
        let log: Log = Rc::default();
        let declared = ConfirmOptions::new();
        let mut state = ConfirmDialogState::new(&declared);
        state
            .receive(&declared, logged(&log, "b").visible(true))
            .run();

        let notify = state.accept(&declared);
        assert_eq!(notify.len(), 2);
        notify.run();

        assert!(!state.is_visible());
        assert_eq!(*log.borrow(), vec!["b:accept", "b:hide:accept"]);
    }

    #[test]
    fn test_reject_reports_reject() {
        let log: Log = Rc::default();
        let declared = logged(&log, "d").visible(true);
        let mut state = ConfirmDialogState::new(&declared);

        state.reject(&declared).run();
        assert_eq!(*log.borrow(), vec!["d:reject", "d:hide:reject"]);
        assert_eq!(state.phase(), DialogPhase::Hidden);
    }

    #[test]
    fn test_dismiss_reports_no_result() {
        let log: Log = Rc::default();
        let declared = logged(&log, "d").visible(true);
        let mut state = ConfirmDialogState::new(&declared);

        state.dismiss(&declared).run();
        assert_eq!(*log.borrow(), vec!["d:hide:none"]);

        // Already hidden: nothing left to report
        state.dismiss(&declared).run();
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_broadcast_hide_uses_new_options() {
        let log: Log = Rc::default();
        let declared = ConfirmOptions::new();
        let mut state = ConfirmDialogState::new(&declared);
        state.receive(&declared, logged(&log, "old").visible(true)).run();

        state.receive(&declared, logged(&log, "new").visible(false)).run();
        assert_eq!(*log.borrow(), vec!["new:hide:none"]);
        assert!(!state.is_visible());
    }

    #[test]
    fn test_retarget_hides_with_previous_options_then_settles() {
        let log: Log = Rc::default();
        let declared = ConfirmOptions::new();
        let mut state = ConfirmDialogState::new(&declared);
        state.receive(&declared, logged(&log, "old").visible(true)).run();

        let moved = logged(&log, "new").visible(true).target("row-2");
        state.receive(&declared, moved.clone()).run();
        assert_eq!(state.phase(), DialogPhase::PendingReshow);
        assert_eq!(*log.borrow(), vec!["old:hide:none"]);

        assert!(state.settle_reshow());
        assert_eq!(state.phase(), DialogPhase::Visible);
        assert_eq!(state.current(&declared).target.as_deref(), Some("row-2"));
        assert!(!state.settle_reshow());
    }

    #[test]
    fn test_hide_request_after_targeted_confirm_reshows() {
        let declared = ConfirmOptions::new();
        let mut state = ConfirmDialogState::new(&declared);
        state
            .receive(&declared, ConfirmOptions::new().visible(true).target("row-1"))
            .run();
        state.settle_reshow();
        assert!(state.is_visible());

        // An untagged hide carries no target, so it moves the dialog
        state
            .receive(&declared, ConfirmOptions::new().visible(false))
            .run();
        assert_eq!(state.phase(), DialogPhase::PendingReshow);

        assert!(state.settle_reshow());
        assert_eq!(state.phase(), DialogPhase::Visible);
        assert_eq!(state.current(&declared).target, None);
    }

    #[test]
    fn test_retarget_while_hidden_reports_hide() {
        let log: Log = Rc::default();
        let declared = ConfirmOptions::new();
        let mut state = ConfirmDialogState::new(&declared);
        state.receive(&declared, logged(&log, "old").visible(true)).run();
        state.dismiss(&declared).run();
        assert_eq!(*log.borrow(), vec!["old:hide:none"]);

        state
            .receive(&declared, logged(&log, "new").visible(true).target("row-4"))
            .run();
        assert_eq!(*log.borrow(), vec!["old:hide:none", "old:hide:none"]);
        assert_eq!(state.phase(), DialogPhase::PendingReshow);
    }

    #[test]
    fn test_second_retarget_also_reshows() {
        let declared = ConfirmOptions::new();
        let mut state = ConfirmDialogState::new(&declared);

        for target in ["row-1", "row-2"] {
            state
                .receive(&declared, ConfirmOptions::new().visible(true).target(target))
                .run();
            assert_eq!(state.phase(), DialogPhase::PendingReshow);
            state.settle_reshow();
            assert!(state.is_visible());
        }
    }

    #[test]
    fn test_static_target_ignores_broadcast_target() {
        let declared = ConfirmOptions::new().target("anchor");
        let mut state = ConfirmDialogState::new(&declared);

        state
            .receive(&declared, ConfirmOptions::new().visible(true).target("other"))
            .run();
        assert_eq!(state.phase(), DialogPhase::Visible);
    }

    #[test]
    fn test_declared_visibility_sync() {
        let log: Log = Rc::default();
        let declared = logged(&log, "p");
        let mut state = ConfirmDialogState::new(&declared);

        state.sync_declared_visible(&declared, false).run();
        assert!(log.borrow().is_empty());

        state.sync_declared_visible(&declared, true).run();
        assert!(state.is_visible());

        state.sync_declared_visible(&declared, false).run();
        assert!(!state.is_visible());
        assert_eq!(*log.borrow(), vec!["p:hide:none"]);
    }

    #[test]
    fn test_callback_may_borrow_state_owner_again() {
        let declared = ConfirmOptions::new();
        let state = Rc::new(RefCell::new(ConfirmDialogState::new(&declared)));

        let inner = state.clone();
        let reentrant = ConfirmOptions::new().visible(true).on_accept(move || {
            assert!(!inner.borrow().is_visible());
        });
        state.borrow_mut().receive(&declared, reentrant).run();

        let notify = state.borrow_mut().accept(&declared);
        notify.run();
    }
}
