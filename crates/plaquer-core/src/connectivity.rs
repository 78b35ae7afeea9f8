//! Connectivity tracking for the offline banner.
//!
//! The watcher mirrors the host environment's online/offline signal. Unlike
//! the viewport classifier, observers are notified only on actual
//! transitions, since the banner cares about changes rather than every
//! heartbeat.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::observers::Registry;

/// Whether the host currently has network connectivity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

impl Connectivity {
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

struct WatcherState {
    current: Connectivity,
    observers: Registry<Connectivity>,
}

/// Live connectivity state with transition-only observer notification.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct ConnectivityWatcher {
    state: Arc<Mutex<WatcherState>>,
}

impl ConnectivityWatcher {
    pub fn new(initial: Connectivity) -> Self {
        Self {
            state: Arc::new(Mutex::new(WatcherState {
                current: initial,
                observers: Registry::new(),
            })),
        }
    }

    pub fn current(&self) -> Connectivity {
        self.state.lock().current
    }

    /// Record an online/offline signal from the host.
    ///
    /// Observers are notified synchronously, and only when the state
    /// actually changes.
    pub fn set_online(&self, online: bool) {
        let next = if online {
            Connectivity::Online
        } else {
            Connectivity::Offline
        };

        let mut state = self.state.lock();
        if state.current == next {
            return;
        }
        state.current = next;
        tracing::info!(connectivity = ?next, "connectivity changed");
        state.observers.notify(next);
    }

    /// Register an observer. The returned guard removes it when dropped.
    pub fn subscribe(
        &self,
        callback: impl Fn(Connectivity) + 'static,
    ) -> ConnectivitySubscription {
        let id = self.state.lock().observers.add(Box::new(callback));
        ConnectivitySubscription {
            state: Arc::clone(&self.state),
            id,
        }
    }
}

/// Observer registration guard. Dropping it detaches the observer.
pub struct ConnectivitySubscription {
    state: Arc<Mutex<WatcherState>>,
    id: u64,
}

impl Drop for ConnectivitySubscription {
    fn drop(&mut self) {
        self.state.lock().observers.remove(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_only_on_transitions() {
        let watcher = ConnectivityWatcher::new(Connectivity::Online);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let _sub = watcher.subscribe(move |state| sink.borrow_mut().push(state));

        watcher.set_online(true); // no change
        watcher.set_online(false);
        watcher.set_online(false); // no change
        watcher.set_online(true);

        assert_eq!(
            *seen.borrow(),
            vec![Connectivity::Offline, Connectivity::Online]
        );
    }

    #[test]
    fn dropped_subscription_never_fires_again() {
        let watcher = ConnectivityWatcher::new(Connectivity::Online);
        let count = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&count);
        let sub = watcher.subscribe(move |_| *counter.borrow_mut() += 1);
        watcher.set_online(false);
        drop(sub);
        watcher.set_online(true);

        assert_eq!(*count.borrow(), 1);
    }
}
