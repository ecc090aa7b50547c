//! Observable state container
//!
//! Holds a value and synchronously notifies registered observers whenever it is set.
//! Everything runs on the caller's stack; there is no queueing and no cross-thread signalling.

use std::fmt;

/// Handle returned by [`Observable::subscribe`], used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Observer<T> = Box<dyn FnMut(&T)>;

/// A value that notifies observers on every mutation
pub struct Observable<T> {
    value: T,
    next_id: usize,
    observers: Vec<(SubscriptionId, Observer<T>)>,
}

impl<T> Observable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            observers: Vec::new(),
        }
    }

    /// Current value
    #[inline]
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify every observer, even if the value did not change
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutate the value in place, then notify observers
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.notify();
    }

    /// Register an observer
    ///
    /// The observer is called once immediately with the current value, then after every
    /// subsequent mutation until it is unsubscribed.
    pub fn subscribe(&mut self, mut observer: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        observer(&self.value);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Drop every observer
    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Consume the container and return the value without notifying
    pub fn into_inner(self) -> T {
        self.value
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer(&self.value);
        }
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}
