//! Subscription registry
//!
//! Handlers are grouped by an event kind and dispatched in registration
//! order. Every subscription may carry a disposer; it runs exactly once,
//! either on `unsubscribe` or when the registry is torn down.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle returned by [`Subscriptions::subscribe`]
    pub struct SubscriptionId;
}

/// Teardown hook attached to a subscription
pub type Disposer = Box<dyn FnOnce()>;

/// Handler invoked with the emitted payload
pub type Handler<P> = Box<dyn FnMut(&P)>;

struct Subscription<K, P> {
    kind: K,
    handler: Handler<P>,
    disposer: Option<Disposer>,
}

/// Callback registry keyed by event kind
pub struct Subscriptions<K, P> {
    entries: SlotMap<SubscriptionId, Subscription<K, P>>,
    by_kind: FxHashMap<K, SmallVec<[SubscriptionId; 2]>>,
}

impl<K, P> Subscriptions<K, P>
where
    K: Copy + Eq + Hash + std::fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            by_kind: FxHashMap::default(),
        }
    }

    /// Register a handler for `kind`
    pub fn subscribe<F>(&mut self, kind: K, handler: F) -> SubscriptionId
    where
        F: FnMut(&P) + 'static,
    {
        self.insert(kind, Box::new(handler), None)
    }

    /// Register a handler whose `disposer` runs when the subscription ends
    pub fn subscribe_with_disposer<F, D>(&mut self, kind: K, handler: F, disposer: D) -> SubscriptionId
    where
        F: FnMut(&P) + 'static,
        D: FnOnce() + 'static,
    {
        self.insert(kind, Box::new(handler), Some(Box::new(disposer)))
    }

    fn insert(&mut self, kind: K, handler: Handler<P>, disposer: Option<Disposer>) -> SubscriptionId {
        let id = self.entries.insert(Subscription {
            kind,
            handler,
            disposer,
        });
        self.by_kind.entry(kind).or_default().push(id);
        id
    }

    /// Remove a subscription, running its disposer. Returns false if `id`
    /// was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(entry) = self.entries.remove(id) else {
            return false;
        };
        if let Some(ids) = self.by_kind.get_mut(&entry.kind) {
            ids.retain(|other| *other != id);
        }
        if let Some(disposer) = entry.disposer {
            disposer();
        }
        true
    }

    /// Invoke every handler registered for `kind`. Returns how many ran.
    pub fn emit(&mut self, kind: &K, payload: &P) -> usize {
        let Some(ids) = self.by_kind.get(kind) else {
            return 0;
        };
        let ids = ids.clone();
        let mut count = 0;
        for id in ids {
            if let Some(entry) = self.entries.get_mut(id) {
                (entry.handler)(payload);
                count += 1;
            }
        }
        count
    }

    pub fn has_subscribers(&self, kind: &K) -> bool {
        self.by_kind.get(kind).is_some_and(|ids| !ids.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every subscription, running each disposer once
    pub fn dispose_all(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        tracing::debug!("Disposing {} subscriptions", self.entries.len());
        self.by_kind.clear();
        for (_, entry) in self.entries.drain() {
            if let Some(disposer) = entry.disposer {
                disposer();
            }
        }
    }
}

impl<K, P> Default for Subscriptions<K, P>
where
    K: Copy + Eq + Hash + std::fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> Drop for Subscriptions<K, P> {
    fn drop(&mut self) {
        for (_, entry) in self.entries.drain() {
            if let Some(disposer) = entry.disposer {
                disposer();
            }
        }
    }
}

impl<K: std::fmt::Debug, P> std::fmt::Debug for Subscriptions<K, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriptions")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Kind {
        Start,
        End,
    }

    #[test]
    fn test_emit_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subs: Subscriptions<Kind, u32> = Subscriptions::new();

        let first = log.clone();
        subs.subscribe(Kind::Start, move |v| first.borrow_mut().push(("first", *v)));
        let second = log.clone();
        subs.subscribe(Kind::Start, move |v| second.borrow_mut().push(("second", *v)));

        assert_eq!(subs.emit(&Kind::Start, &7), 2);
        assert_eq!(subs.emit(&Kind::End, &8), 0);
        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_disposer_runs_once_on_unsubscribe() {
        let disposed = Rc::new(RefCell::new(0));
        let mut subs: Subscriptions<Kind, ()> = Subscriptions::new();

        let counter = disposed.clone();
        let id = subs.subscribe_with_disposer(Kind::End, |_| {}, move || *counter.borrow_mut() += 1);

        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        subs.dispose_all();
        drop(subs);
        assert_eq!(*disposed.borrow(), 1);
    }

    #[test]
    fn test_dispose_all_and_drop_each_run_disposers_once() {
        let disposed = Rc::new(RefCell::new(0));
        let mut subs: Subscriptions<Kind, ()> = Subscriptions::new();
        for _ in 0..3 {
            let counter = disposed.clone();
            subs.subscribe_with_disposer(Kind::Start, |_| {}, move || *counter.borrow_mut() += 1);
        }

        subs.dispose_all();
        assert!(subs.is_empty());
        assert!(!subs.has_subscribers(&Kind::Start));
        drop(subs);
        assert_eq!(*disposed.borrow(), 3);
    }
}
