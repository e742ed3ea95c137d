//! Change-notification listener registry.

/// Handle returned by [`ListenerSet::register`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut() + Send>;

/// Explicit observer registry: register, unregister, notify.
///
/// Notification carries no payload; listeners query the client for the new
/// state.
#[derive(Default)]
pub struct ListenerSet {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; returns a handle for unregistering it.
    pub fn register(&mut self, listener: impl FnMut() + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns `false` if the handle was unknown.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Invoke every registered listener once, in registration order.
    pub fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_register_notify_unregister() {
        let mut set = ListenerSet::new();
        let count = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&count);
        let id = set.register(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        set.notify();
        set.notify();
        assert_eq!(count.load(Ordering::SeqCst), 2);

        assert!(set.unregister(id));
        set.notify();
        assert_eq!(count.load(Ordering::SeqCst), 2);

        assert!(!set.unregister(id));
    }

    #[test]
    fn test_multiple_listeners_all_notified() {
        let mut set = ListenerSet::new();
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let c = Arc::clone(&count);
            set.register(move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
        }

        set.notify();
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(set.len(), 3);
    }
}
