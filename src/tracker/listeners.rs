// Single-threaded listener registry with scoped subscriptions

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Registry<E> {
    next_id: u64,
    entries: Vec<(u64, Callback<E>)>,
}

/// A set of callbacks notified with `&E` on every [`emit`](Listeners::emit).
///
/// Cloning a `Listeners` yields another handle to the same registry.
pub struct Listeners<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E> Clone for Listeners<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }
}

impl<E> std::fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("len", &self.len()).finish()
    }
}

impl<E: 'static> Listeners<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`; it stays registered until the returned guard drops.
    #[must_use = "dropping the subscription deregisters the listener immediately"]
    pub fn subscribe(&self, callback: impl FnMut(&E) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            let callback: Callback<E> = Rc::new(RefCell::new(callback));
            registry.entries.push((id, callback));
            id
        };

        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = weak.upgrade() {
                registry.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Notify every registered callback, returning how many ran.
    ///
    /// Callbacks may subscribe or drop subscriptions while being notified.
    /// A callback removed earlier in the same pass is skipped, and a callback
    /// that is already running (re-entrant emit) is not invoked again.
    pub fn emit(&self, event: &E) -> usize {
        let snapshot: Vec<(u64, Callback<E>)> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(id, cb)| (*id, Rc::clone(cb)))
            .collect();

        let mut notified = 0;
        for (id, callback) in snapshot {
            if !self.contains(id) {
                continue;
            }
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)(event);
                notified += 1;
            }
        }
        notified
    }

    fn contains(&self, id: u64) -> bool {
        self.registry
            .borrow()
            .entries
            .iter()
            .any(|(entry_id, _)| *entry_id == id)
    }
}

impl<E> Listeners<E> {
    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard for a registered listener. Dropping it deregisters the listener,
/// including when the owner is dropped during unwinding.
#[must_use = "dropping the subscription deregisters the listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Deregister now. Equivalent to dropping the guard.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_emit_reaches_all_subscribers() {
        let listeners: Listeners<u32> = Listeners::new();
        let total = Rc::new(Cell::new(0));

        let t1 = Rc::clone(&total);
        let _a = listeners.subscribe(move |v| t1.set(t1.get() + *v));
        let t2 = Rc::clone(&total);
        let _b = listeners.subscribe(move |v| t2.set(t2.get() + *v * 10));

        assert_eq!(listeners.emit(&2), 2);
        assert_eq!(total.get(), 22);
    }

    #[test]
    fn test_drop_deregisters() {
        let listeners: Listeners<()> = Listeners::new();
        let sub = listeners.subscribe(|_| {});
        assert_eq!(listeners.len(), 1);
        drop(sub);
        assert!(listeners.is_empty());
        assert_eq!(listeners.emit(&()), 0);
    }

    #[test]
    fn test_cancel_deregisters() {
        let listeners: Listeners<()> = Listeners::new();
        let sub = listeners.subscribe(|_| {});
        sub.cancel();
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_guard_released_during_unwind() {
        let listeners: Listeners<()> = Listeners::new();
        let handle = listeners.clone();

        let result = panic::catch_unwind(AssertUnwindSafe(move || {
            let _sub = handle.subscribe(|_| {});
            assert_eq!(handle.len(), 1);
            panic!("page torn down abnormally");
        }));

        assert!(result.is_err());
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_guard_outliving_registry_is_harmless() {
        let listeners: Listeners<()> = Listeners::new();
        let sub = listeners.subscribe(|_| {});
        drop(listeners);
        drop(sub);
    }

    #[test]
    fn test_listener_removed_mid_emit_is_skipped() {
        let listeners: Listeners<()> = Listeners::new();
        let second_ran = Rc::new(Cell::new(false));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let slot_for_first = Rc::clone(&slot);
        let _first = listeners.subscribe(move |_| {
            slot_for_first.borrow_mut().take();
        });
        let flag = Rc::clone(&second_ran);
        *slot.borrow_mut() = Some(listeners.subscribe(move |_| flag.set(true)));

        assert_eq!(listeners.emit(&()), 1);
        assert!(!second_ran.get());
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn test_reentrant_emit_does_not_recurse() {
        let listeners: Listeners<u32> = Listeners::new();
        let calls = Rc::new(Cell::new(0));

        let handle = listeners.clone();
        let counter = Rc::clone(&calls);
        let _sub = listeners.subscribe(move |depth| {
            counter.set(counter.get() + 1);
            if *depth == 0 {
                handle.emit(&1);
            }
        });

        listeners.emit(&0);
        assert_eq!(calls.get(), 1);
    }
}
