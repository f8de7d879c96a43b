//! Observable value cell.
//!
//! `Writable<T>` is the reactive primitive both stores are built from: it
//! holds one value, replaces it wholesale on every mutation, and notifies
//! subscribers synchronously in subscription order. The execution model is
//! single-threaded and event-driven, so handles are `Rc`-shared and nothing
//! here locks.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Subscriber<T> {
    id: u64,
    callback: Callback<T>,
}

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
    next_subscriber_id: Cell<u64>,
}

/// An observable container of one value.
///
/// Cloning the handle clones the reference, not the value: every clone reads
/// and writes the same cell.
pub struct Writable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Writable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Writable<T> {
    /// Creates a cell holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_subscriber_id: Cell::new(0),
            }),
        }
    }

    /// Reads the current value without cloning it.
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.inner.value.borrow())
    }
}

impl<T: Clone> Writable<T> {
    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replaces the value and notifies all subscribers.
    ///
    /// Notification is unconditional: replacing a value with an equal one
    /// still notifies, because subscribers react to replacement, not to
    /// change detection.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.notify();
    }

    /// Derives the next value from the current one and replaces it.
    ///
    /// The old value is handed to `replace` by value; the cell never exposes
    /// a mutable borrow of its contents.
    pub fn update(&self, replace: impl FnOnce(T) -> T) {
        let next = replace(self.get());
        self.set(next);
    }

    /// Registers `callback` and immediately invokes it with the current
    /// value, so late subscribers observe the latest state rather than
    /// nothing. Afterwards it runs synchronously on every replacement, in
    /// subscription order.
    ///
    /// Dropping the returned [`Subscription`] without calling
    /// [`Subscription::unsubscribe`] leaves the callback registered for the
    /// cell's lifetime.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription<T> {
        let id = self.inner.next_subscriber_id.get();
        self.inner.next_subscriber_id.set(id + 1);

        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        (callback.borrow_mut())(&self.get());
        self.inner.subscribers.borrow_mut().push(Subscriber {
            id,
            callback: Rc::clone(&callback),
        });

        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    fn notify(&self) {
        // Snapshot the list so callbacks may subscribe or unsubscribe
        // without invalidating this iteration; additions take effect on the
        // next notification.
        let snapshot: Vec<Callback<T>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|subscriber| Rc::clone(&subscriber.callback))
            .collect();
        let value = self.get();
        for callback in snapshot {
            (callback.borrow_mut())(&value);
        }
    }
}

/// Handle for removing a subscriber registered via [`Writable::subscribe`].
#[derive(Debug)]
pub struct Subscription<T> {
    inner: Weak<Inner<T>>,
    id: u64,
}

impl<T> Subscription<T> {
    /// Removes the callback; later replacements no longer reach it.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.inner.upgrade() {
            inner
                .subscribers
                .borrow_mut()
                .retain(|subscriber| subscriber.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_runs_immediately_with_current_value() {
        let cell = Writable::new(7_u32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        cell.subscribe(move |value| sink.borrow_mut().push(*value));

        assert_eq!(*seen.borrow(), [7]);
    }

    #[test]
    fn set_notifies_in_subscription_order() {
        let cell = Writable::new(0_u32);
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        cell.subscribe(move |value| first.borrow_mut().push(("first", *value)));
        let second = Rc::clone(&order);
        cell.subscribe(move |value| second.borrow_mut().push(("second", *value)));

        cell.set(1);

        assert_eq!(
            *order.borrow(),
            [("first", 0), ("second", 0), ("first", 1), ("second", 1)]
        );
    }

    #[test]
    fn set_notifies_even_when_value_is_equal() {
        let cell = Writable::new(5_u32);
        let count = Rc::new(Cell::new(0_u32));

        let counter = Rc::clone(&count);
        cell.subscribe(move |_| counter.set(counter.get() + 1));
        cell.set(5);
        cell.set(5);

        // One immediate call plus one per replacement.
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn late_subscriber_sees_only_latest_value() {
        let cell = Writable::new("a".to_string());
        cell.set("b".to_string());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        cell.subscribe(move |value: &String| sink.borrow_mut().push(value.clone()));

        assert_eq!(*seen.borrow(), ["b"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let cell = Writable::new(0_u32);
        let count = Rc::new(Cell::new(0_u32));

        let counter = Rc::clone(&count);
        let subscription = cell.subscribe(move |_| counter.set(counter.get() + 1));
        cell.set(1);
        subscription.unsubscribe();
        cell.set(2);

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn unsubscribe_leaves_other_subscribers_registered() {
        let cell = Writable::new(0_u32);
        let survivor_count = Rc::new(Cell::new(0_u32));

        let dropped = cell.subscribe(|_| {});
        let counter = Rc::clone(&survivor_count);
        cell.subscribe(move |_| counter.set(counter.get() + 1));
        dropped.unsubscribe();
        cell.set(1);

        assert_eq!(survivor_count.get(), 2);
    }

    #[test]
    fn update_replaces_through_the_old_value() {
        let cell = Writable::new(vec![1_u32, 2]);
        cell.update(|mut values| {
            values.push(3);
            values
        });

        assert_eq!(cell.get(), [1, 2, 3]);
    }

    #[test]
    fn subscribing_from_inside_a_callback_takes_effect_next_notification() {
        let cell = Writable::new(0_u32);
        let late_seen = Rc::new(RefCell::new(Vec::new()));

        let outer_cell = cell.clone();
        let sink = Rc::clone(&late_seen);
        let armed = Rc::new(Cell::new(false));
        let armed_flag = Rc::clone(&armed);
        cell.subscribe(move |value| {
            if *value == 1 && !armed_flag.get() {
                armed_flag.set(true);
                let inner_sink = Rc::clone(&sink);
                outer_cell.subscribe(move |value| inner_sink.borrow_mut().push(*value));
            }
        });

        cell.set(1);
        cell.set(2);

        // Immediate call at registration, then the next replacement.
        assert_eq!(*late_seen.borrow(), [1, 2]);
    }
}
