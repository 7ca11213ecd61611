//! Latest-value broadcast channel.
//!
//! A [`Channel`] holds the most recently published value. Every new
//! subscriber receives that value immediately, then each later publish in
//! registration order. Handles are cheap clones sharing one
//! `Rc<RefCell<..>>`, so a channel lives on a single thread.
//!
//! Subscribers are stored as `Weak` callbacks and pruned lazily while
//! publishing. The returned [`Subscription`] owns the strong reference, so
//! dropping it is all it takes to unsubscribe.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct ChannelInner<T> {
    value: T,
    version: u64,
    subscribers: Vec<Weak<dyn Fn(&T)>>,
}

/// Shared handle to a replayable, single-latest-value channel.
///
/// Cloning a `Channel` creates a new handle to the **same** value.
/// Only the owning crate can publish; consumers read and subscribe.
pub struct Channel<T> {
    inner: Rc<RefCell<ChannelInner<T>>>,
}

/// RAII guard for a channel subscription. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    _callback: Box<dyn Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Channel")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + 'static> Channel<T> {
    /// Create a channel seeded with `initial`. The version starts at 0.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ChannelInner {
                value: initial,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the latest value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the latest value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of publishes since creation.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of subscriptions that are still alive.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    /// Whether two handles point at the same channel.
    pub fn same_channel(&self, other: &Channel<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Register `callback`. It runs right away with the latest value and
    /// again after every publish until the returned guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&callback));

        let current = self.get();
        callback(&current);

        Subscription {
            _callback: Box::new(callback),
        }
    }

    /// Replace the value and broadcast it. Equal values are still broadcast.
    pub(crate) fn publish(&self, value: T) {
        let callbacks: Vec<Callback<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.version += 1;
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner.subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        if callbacks.is_empty() {
            return;
        }

        // Callbacks may read the channel, so the borrow must be released first.
        let snapshot = self.get();
        for callback in callbacks {
            callback(&snapshot);
        }
    }
}
