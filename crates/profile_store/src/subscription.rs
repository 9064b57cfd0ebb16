//! Change notification for store consumers.

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError, Weak,
    },
};

use entities::{Activity, Profile, ProfileId};
use tracing::error;

/// What a mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Added(ProfileId),
    Updated(ProfileId),
    Removed(ProfileId),
    Reset,
}

/// Immutable copy of store state at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// Profiles in display order.
    pub profiles: Vec<Profile>,
    /// Activity log, newest first.
    pub activities: Vec<Activity>,
}

/// Delivered to listeners after every successful mutation.
#[derive(Debug, Clone)]
pub struct StoreEvent {
    /// The mutation that produced this state.
    pub change: StoreChange,
    /// State right after the mutation.
    pub snapshot: Arc<StoreSnapshot>,
}

type Listener = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

/// Registered listeners, invoked in registration order.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener)>>,
}

impl ListenerRegistry {
    pub(crate) fn register(self: &Arc<Self>, listener: Listener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push((id, listener));
        Subscription {
            registry: Arc::downgrade(self),
            id,
        }
    }

    fn unregister(&self, id: u64) {
        self.lock().retain(|(listener_id, _)| *listener_id != id);
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    /// Calls every listener with `event`. A panicking listener is logged
    /// and skipped; the rest still run.
    pub(crate) fn notify(&self, event: &StoreEvent) {
        // Clone out so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<(u64, Listener)> = self.lock().clone();

        for (id, listener) in listeners {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| listener(event))) {
                let message = if let Some(s) = payload.downcast_ref::<&str>() {
                    (*s).to_string()
                } else if let Some(s) = payload.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "unknown panic".to_string()
                };
                error!(
                    listener_id = id,
                    change = ?event.change,
                    %message,
                    "Store listener panicked"
                );
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(u64, Listener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Handle for a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the listener"]
#[derive(Debug)]
pub struct Subscription {
    registry: Weak<ListenerRegistry>,
    id: u64,
}

impl Subscription {
    /// Removes the listener.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unregister(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    fn event() -> StoreEvent {
        StoreEvent {
            change: StoreChange::Reset,
            snapshot: Arc::new(StoreSnapshot::default()),
        }
    }

    #[test]
    fn test_delivery_order_and_unsubscribe() {
        let registry = Arc::new(ListenerRegistry::default());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let first = {
            let seen = Arc::clone(&seen);
            registry.register(Arc::new(move |_: &StoreEvent| seen.lock().unwrap().push("first")))
        };
        let _second = {
            let seen = Arc::clone(&seen);
            registry.register(Arc::new(move |_: &StoreEvent| seen.lock().unwrap().push("second")))
        };

        registry.notify(&event());
        first.unsubscribe();
        registry.notify(&event());

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "second"]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_panicking_listener_does_not_block_others() {
        let registry = Arc::new(ListenerRegistry::default());
        let calls = Arc::new(AtomicUsize::new(0));

        let _bad = registry.register(Arc::new(|_: &StoreEvent| {
            panic!("listener failure");
        }));
        let _good = {
            let calls = Arc::clone(&calls);
            registry.register(Arc::new(move |_: &StoreEvent| {
                calls.fetch_add(1, Ordering::SeqCst);
            }))
        };

        registry.notify(&event());

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
