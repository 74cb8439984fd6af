//! Publish/subscribe registry.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Subscriber callback. Identity is the `Arc` allocation.
pub type Callback = Arc<dyn Fn(&Value) + Send + Sync>;

/// Handle returned by [`EventBus::subscribe`], used for exact removal
#[derive(Clone)]
pub struct Subscription {
    event: String,
    callback: Callback,
}

impl Subscription {
    /// Event name this subscription listens to
    pub fn event(&self) -> &str {
        &self.event
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
struct BusState {
    /// Last published value per event
    values: HashMap<String, Value>,
    /// Subscribers per event, in subscription order
    subscribers: HashMap<String, Vec<Callback>>,
}

/// Publish/subscribe registry keyed by event name
///
/// Publishing stores the value and notifies subscribers only when it
/// differs from the stored one, unless forced. Nothing is buffered:
/// subscribers registered after a publish do not see it.
#[derive(Default)]
pub struct EventBus {
    state: Mutex<BusState>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a value; returns whether subscribers were notified
    pub fn publish(&self, event: impl AsRef<str>, value: Value) -> bool {
        self.publish_with(event.as_ref(), value, false)
    }

    /// Publish and notify even if the value is unchanged
    pub fn publish_forced(&self, event: impl AsRef<str>, value: Value) -> bool {
        self.publish_with(event.as_ref(), value, true)
    }

    fn publish_with(&self, event: &str, value: Value, force: bool) -> bool {
        let callbacks = {
            let mut state = self.lock();

            let unchanged = state.values.get(event) == Some(&value);
            if unchanged && !force {
                tracing::trace!(event = %event, "Value unchanged, skipping notification");
                return false;
            }

            state.values.insert(event.to_string(), value.clone());
            state.subscribers.get(event).cloned().unwrap_or_default()
        };

        tracing::debug!(
            event = %event,
            value = %value,
            subscribers = callbacks.len(),
            "Publishing event"
        );

        // Callbacks run without the lock held so they may publish or subscribe.
        for callback in &callbacks {
            callback(&value);
        }

        true
    }

    /// Register a callback for an event
    pub fn subscribe<F>(&self, event: impl AsRef<str>, callback: F) -> Subscription
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.subscribe_callback(event, Arc::new(callback))
    }

    /// Register an existing callback handle
    pub fn subscribe_callback(&self, event: impl AsRef<str>, callback: Callback) -> Subscription {
        let event = event.as_ref().to_string();

        self.lock()
            .subscribers
            .entry(event.clone())
            .or_default()
            .push(Arc::clone(&callback));

        tracing::debug!(event = %event, "Subscribed");
        Subscription { event, callback }
    }

    /// Remove a subscription; returns whether it was registered
    pub fn unsubscribe(&self, subscription: &Subscription) -> bool {
        let mut state = self.lock();
        let Some(subscribers) = state.subscribers.get_mut(&subscription.event) else {
            return false;
        };

        match subscribers
            .iter()
            .position(|cb| Arc::ptr_eq(cb, &subscription.callback))
        {
            Some(index) => {
                subscribers.remove(index);
                if subscribers.is_empty() {
                    state.subscribers.remove(&subscription.event);
                }
                tracing::debug!(event = %subscription.event, "Unsubscribed");
                true
            }
            None => false,
        }
    }

    /// Last value published for an event
    pub fn current(&self, event: impl AsRef<str>) -> Option<Value> {
        self.lock().values.get(event.as_ref()).cloned()
    }

    /// Number of callbacks registered for an event
    pub fn subscriber_count(&self, event: impl AsRef<str>) -> usize {
        self.lock()
            .subscribers
            .get(event.as_ref())
            .map(Vec::len)
            .unwrap_or(0)
    }

    fn lock(&self) -> MutexGuard<'_, BusState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::GlobalEvent;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter(bus: &EventBus, event: &str) -> (Arc<AtomicUsize>, Subscription) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let sub = bus.subscribe(event, move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (count, sub)
    }

    #[test]
    fn test_same_value_notifies_once() {
        let bus = EventBus::new();
        let (count, _sub) = counter(&bus, "theme");

        assert!(bus.publish("theme", json!("dark")));
        assert!(!bus.publish("theme", json!("dark")));
        assert_eq!(count.load(Ordering::SeqCst), 1);

        assert!(bus.publish("theme", json!("light")));
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(bus.current("theme"), Some(json!("light")));
    }

    #[test]
    fn test_forced_publish_always_notifies() {
        let bus = EventBus::new();
        let (count, _sub) = counter(&bus, GlobalEvent::AuthFailed.as_str());

        bus.publish_forced(GlobalEvent::AuthFailed, json!({"status": 401}));
        bus.publish_forced(GlobalEvent::AuthFailed, json!({"status": 401}));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let (count, sub) = counter(&bus, "tick");

        bus.publish("tick", json!(1));
        assert!(bus.unsubscribe(&sub));
        bus.publish("tick", json!(2));
        bus.publish_forced("tick", json!(2));

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count("tick"), 0);
        assert!(!bus.unsubscribe(&sub));
    }

    #[test]
    fn test_unsubscribe_removes_only_that_callback() {
        let bus = EventBus::new();
        let (first, first_sub) = counter(&bus, "tick");
        let (second, _second_sub) = counter(&bus, "tick");

        bus.unsubscribe(&first_sub);
        bus.publish("tick", json!(true));

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_same_callback_subscribed_twice_removed_once() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let callback: Callback = Arc::new(move |_: &Value| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        let sub = bus.subscribe_callback("tick", Arc::clone(&callback));
        bus.subscribe_callback("tick", callback);
        bus.unsubscribe(&sub);

        bus.publish("tick", json!(1));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscription_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for id in 0..3 {
            let order = Arc::clone(&order);
            bus.subscribe("ordered", move |_| order.lock().unwrap().push(id));
        }

        bus.publish("ordered", json!("go"));
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_no_replay_for_late_subscribers() {
        let bus = EventBus::new();
        bus.publish("late", json!(1));

        let (count, _sub) = counter(&bus, "late");
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_callback_may_publish() {
        let bus = Arc::new(EventBus::new());
        let (count, _sub) = counter(&bus, "second");

        let inner = Arc::clone(&bus);
        bus.subscribe("first", move |v| {
            inner.publish("second", v.clone());
        });

        bus.publish("first", json!("chain"));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_events_are_independent() {
        let bus = EventBus::new();
        let (a, _sa) = counter(&bus, "a");
        let (b, _sb) = counter(&bus, "b");

        bus.publish("a", json!(1));
        assert_eq!(a.load(Ordering::SeqCst), 1);
        assert_eq!(b.load(Ordering::SeqCst), 0);
    }
}
