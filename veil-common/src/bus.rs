//! Overlay event bus
//!
//! A single-threaded publish/subscribe registry keyed by event name. The bus
//! is a cheap handle (`Rc` inside) meant to be injected through context, so
//! independent overlay trees can each own one instead of sharing a global.
//!
//! Delivery is synchronous and in subscription order. The bus keeps no
//! history: a handler only sees events published while it is subscribed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

type Handler<T> = Rc<dyn Fn(&T)>;

/// Identifies one subscription on an [`OverlayBus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Registry<T> {
    next_id: u64,
    handlers: HashMap<String, Vec<(SubscriptionId, Handler<T>)>>,
}

impl<T> Registry<T> {
    fn contains(&self, event: &str, id: SubscriptionId) -> bool {
        self.handlers
            .get(event)
            .is_some_and(|list| list.iter().any(|(sub, _)| *sub == id))
    }
}

/// Shared publish/subscribe bus for overlay events
pub struct OverlayBus<T> {
    inner: Rc<RefCell<Registry<T>>>,
}

impl<T> OverlayBus<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 0,
                handlers: HashMap::new(),
            })),
        }
    }

    /// Register `handler` for `event`. The returned id is needed to unsubscribe.
    pub fn subscribe(&self, event: &str, handler: impl Fn(&T) + 'static) -> SubscriptionId {
        let mut registry = self.inner.borrow_mut();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry
            .handlers
            .entry(event.to_string())
            .or_default()
            .push((id, Rc::new(handler)));
        debug!(event, subscription = id.0, "Subscribed to overlay event");
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, event: &str, id: SubscriptionId) -> bool {
        let mut registry = self.inner.borrow_mut();
        let Some(list) = registry.handlers.get_mut(event) else {
            return false;
        };
        let before = list.len();
        list.retain(|(sub, _)| *sub != id);
        let removed = list.len() != before;
        if list.is_empty() {
            registry.handlers.remove(event);
        }
        if removed {
            debug!(event, subscription = id.0, "Unsubscribed from overlay event");
        }
        removed
    }

    /// Deliver `payload` to every handler subscribed to `event`.
    ///
    /// Handlers may publish, subscribe or unsubscribe while being called. A
    /// handler removed during dispatch is skipped if it hasn't run yet.
    /// Returns how many handlers received the payload.
    pub fn publish(&self, event: &str, payload: &T) -> usize {
        let snapshot: Vec<(SubscriptionId, Handler<T>)> = match self.inner.borrow().handlers.get(event) {
            Some(list) => list.clone(),
            None => Vec::new(),
        };
        debug!(event, subscribers = snapshot.len(), "Publishing overlay event");

        let mut delivered = 0;
        for (id, handler) in snapshot {
            if !self.inner.borrow().contains(event, id) {
                continue;
            }
            trace!(event, subscription = id.0, "Delivering overlay event");
            handler(payload);
            delivered += 1;
        }
        delivered
    }

    pub fn subscriber_count(&self, event: &str) -> usize {
        self.inner
            .borrow()
            .handlers
            .get(event)
            .map_or(0, |list| list.len())
    }
}

impl<T> Default for OverlayBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for OverlayBus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Two handles are equal when they point at the same registry
impl<T> PartialEq for OverlayBus<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> fmt::Debug for OverlayBus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.inner.borrow();
        f.debug_struct("OverlayBus")
            .field("events", &registry.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_publish_reaches_subscribers_in_order() {
        let bus: OverlayBus<u32> = OverlayBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s1 = seen.clone();
        bus.subscribe("evt", move |v| s1.borrow_mut().push(("first", *v)));
        let s2 = seen.clone();
        bus.subscribe("evt", move |v| s2.borrow_mut().push(("second", *v)));

        assert_eq!(bus.publish("evt", &7), 2);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_publish_other_event_is_not_delivered() {
        let bus: OverlayBus<u32> = OverlayBus::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        bus.subscribe("a", move |_| h.set(h.get() + 1));

        assert_eq!(bus.publish("b", &1), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus: OverlayBus<u32> = OverlayBus::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let id = bus.subscribe("evt", move |_| h.set(h.get() + 1));

        assert!(bus.unsubscribe("evt", id));
        assert!(!bus.unsubscribe("evt", id));
        bus.publish("evt", &1);
        assert_eq!(hits.get(), 0);
        assert_eq!(bus.subscriber_count("evt"), 0);
    }

    #[test]
    fn test_no_history_for_late_subscribers() {
        let bus: OverlayBus<u32> = OverlayBus::new();
        bus.publish("evt", &1);

        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        bus.subscribe("evt", move |_| h.set(h.get() + 1));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_handler_can_publish_reentrantly() {
        let bus: OverlayBus<u32> = OverlayBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let inner_bus = bus.clone();
        bus.subscribe("outer", move |v| {
            inner_bus.publish("inner", &(v + 1));
        });
        let s = seen.clone();
        bus.subscribe("inner", move |v| s.borrow_mut().push(*v));

        bus.publish("outer", &1);
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn test_handler_removed_mid_dispatch_is_skipped() {
        let bus: OverlayBus<u32> = OverlayBus::new();
        let second_hits = Rc::new(Cell::new(0));
        let second_id = Rc::new(Cell::new(None));

        let b = bus.clone();
        let target = second_id.clone();
        bus.subscribe("evt", move |_| {
            if let Some(id) = target.get() {
                b.unsubscribe("evt", id);
            }
        });
        let h = second_hits.clone();
        second_id.set(Some(bus.subscribe("evt", move |_| h.set(h.get() + 1))));

        assert_eq!(bus.publish("evt", &1), 1);
        assert_eq!(second_hits.get(), 0);
    }

    #[test]
    fn test_clones_share_registry() {
        let bus: OverlayBus<u32> = OverlayBus::new();
        let other = bus.clone();
        other.subscribe("evt", |_| {});
        assert_eq!(bus.subscriber_count("evt"), 1);
        assert_eq!(bus, other);
        assert_ne!(bus, OverlayBus::new());
    }
}
