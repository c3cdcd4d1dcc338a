//! Observer lists for widget notifications.
//!
//! [`Event<T>`] is the public event surface of every widget: callbacks are
//! invoked synchronously, on the calling thread, at the moment the state
//! change happens. Nothing is queued, so a subscriber connected after a
//! notification never sees it.
//!
//! # Invariants
//!
//! 1. Subscribers run in registration order.
//! 2. A subscriber disconnected during an emit is not called later in that emit.
//! 3. A subscriber connected during an emit is first called on the next emit.
//! 4. A subscriber is never re-entered by a nested emit of the same event.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Slot<T> {
    live: Rc<Cell<bool>>,
    callback: Callback<T>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self { live: Rc::clone(&self.live), callback: Rc::clone(&self.callback) }
    }
}

/// Handle returned by [`Event::connect`].
///
/// Dropping the handle does not disconnect; call
/// [`disconnect`](Self::disconnect) explicitly.
#[derive(Debug, Clone)]
pub struct Subscription {
    live: Rc<Cell<bool>>,
}

impl Subscription {
    #[inline]
    pub fn disconnect(&self) {
        self.live.set(false);
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.live.get()
    }
}

/// A list of callbacks taking `&T`.
///
/// Cloning an `Event` yields another handle to the same subscriber list.
pub struct Event<T> {
    slots: Rc<RefCell<Vec<Slot<T>>>>,
}

impl<T> Event<T> {
    pub fn new() -> Self {
        Self { slots: Rc::new(RefCell::new(Vec::new())) }
    }

    /// Registers `f`; it stays connected until the returned handle is
    /// disconnected.
    pub fn connect(&self, f: impl FnMut(&T) + 'static) -> Subscription {
        let live = Rc::new(Cell::new(true));
        let callback: Callback<T> = Rc::new(RefCell::new(f));
        self.slots.borrow_mut().push(Slot { live: Rc::clone(&live), callback });
        Subscription { live }
    }

    pub fn disconnect(&self, subscription: &Subscription) {
        subscription.disconnect();
        self.prune();
    }

    /// Invokes every connected subscriber with `value`.
    pub fn emit(&self, value: &T) {
        // Snapshot so subscribers may connect/disconnect while we iterate.
        let snapshot: Vec<Slot<T>> = self.slots.borrow().iter().filter(|s| s.live.get()).cloned().collect();

        for slot in snapshot {
            if !slot.live.get() {
                continue;
            }
            match slot.callback.try_borrow_mut() {
                Ok(mut f) => (&mut *f)(value),
                Err(_) => log::trace!("skipping subscriber already running higher up the stack"),
            }
        }

        self.prune();
    }

    /// Number of connected subscribers.
    pub fn len(&self) -> usize {
        self.slots.borrow().iter().filter(|s| s.live.get()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(&self) {
        if let Ok(mut slots) = self.slots.try_borrow_mut() {
            slots.retain(|s| s.live.get());
        }
    }
}

impl<T> Clone for Event<T> {
    fn clone(&self) -> Self {
        Self { slots: Rc::clone(&self.slots) }
    }
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event").field("subscribers", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(&T) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |v: &T| sink.borrow_mut().push(v.clone()))
    }

    #[test]
    fn emits_in_registration_order() {
        let event = Event::<u32>::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b", "c"] {
            let order = Rc::clone(&order);
            event.connect(move |v| order.borrow_mut().push(format!("{tag}{v}")));
        }
        event.emit(&1);
        assert_eq!(*order.borrow(), ["a1", "b1", "c1"]);
    }

    #[test]
    fn disconnected_subscriber_is_not_called() {
        let event = Event::<bool>::new();
        let (log, f) = recorder::<bool>();
        let sub = event.connect(f);
        event.emit(&true);
        event.disconnect(&sub);
        event.emit(&false);
        assert_eq!(*log.borrow(), [true]);
        assert!(event.is_empty());
    }

    #[test]
    fn disconnect_during_emit_skips_later_subscriber() {
        let event = Event::<i32>::new();
        let later: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let victim = Rc::clone(&later);
        event.connect(move |_| {
            if let Some(sub) = victim.borrow().as_ref() {
                sub.disconnect();
            }
        });
        let (log, f) = recorder::<i32>();
        *later.borrow_mut() = Some(event.connect(f));

        event.emit(&7);
        assert!(log.borrow().is_empty());
        assert_eq!(event.len(), 1);
    }

    #[test]
    fn subscriber_can_disconnect_itself() {
        let event = Event::<i32>::new();
        let own: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));

        let (own2, hits2) = (Rc::clone(&own), Rc::clone(&hits));
        *own.borrow_mut() = Some(event.connect(move |_| {
            hits2.set(hits2.get() + 1);
            if let Some(sub) = own2.borrow().as_ref() {
                sub.disconnect();
            }
        }));

        event.emit(&1);
        event.emit(&2);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn connect_during_emit_waits_for_next_emit() {
        let event = Event::<i32>::new();
        let (log, f) = recorder::<i32>();
        let pending = Rc::new(RefCell::new(Some(f)));

        let handle = event.clone();
        event.connect(move |_| {
            if let Some(f) = pending.borrow_mut().take() {
                handle.connect(f);
            }
        });

        event.emit(&1);
        assert!(log.borrow().is_empty());
        event.emit(&2);
        assert_eq!(*log.borrow(), [2]);
    }

    #[test]
    fn late_subscriber_misses_past_events() {
        let event = Event::<&'static str>::new();
        event.emit(&"early");
        let (log, f) = recorder::<&'static str>();
        event.connect(f);
        event.emit(&"late");
        assert_eq!(*log.borrow(), ["late"]);
    }

    #[test]
    fn nested_emit_does_not_reenter_subscriber() {
        let event = Event::<u32>::new();
        let hits = Rc::new(Cell::new(0));
        let (handle, hits2) = (event.clone(), Rc::clone(&hits));
        event.connect(move |v| {
            hits2.set(hits2.get() + 1);
            if *v == 0 {
                handle.emit(&1);
            }
        });
        event.emit(&0);
        assert_eq!(hits.get(), 1);
    }
}
