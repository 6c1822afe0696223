//! In-process hub that turns identity transitions into an ordered event
//! stream. Sign-in, sign-out, and startup hydration all emit here; the
//! session provider owns the one long-lived subscription.
//!
//! Subscribing hands back a [`Subscription`] guard alongside the receiver.
//! Dropping the guard unregisters the listener, so the handle is released on
//! every exit path, including early unmount of the owning scope.

use crate::features::session::types::SessionEvent;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::sync::{Arc, Mutex, Weak};

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, UnboundedSender<SessionEvent>)>,
}

/// Broadcast hub for session events. Cheap to clone; clones share listeners.
#[derive(Clone, Default)]
pub struct SessionEvents {
    registry: Arc<Mutex<Registry>>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its release guard plus the stream of
    /// events. Events arrive in emission order.
    pub fn subscribe(&self) -> (Subscription, UnboundedReceiver<SessionEvent>) {
        let (sender, receiver) = unbounded();
        let id = {
            let mut registry = self.registry.lock().expect("session event registry");
            registry.next_id += 1;
            let id = registry.next_id;
            registry.listeners.push((id, sender));
            id
        };

        let subscription = Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        };
        (subscription, receiver)
    }

    /// Delivers an event to every live listener. Listeners whose receiving
    /// end has gone away are pruned here rather than erroring.
    pub fn emit(&self, event: SessionEvent) {
        let mut registry = self.registry.lock().expect("session event registry");
        registry
            .listeners
            .retain(|(_, sender)| sender.unbounded_send(event.clone()).is_ok());
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.registry
            .lock()
            .expect("session event registry")
            .listeners
            .len()
    }
}

/// Release guard for one hub listener. Unregisters on drop.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.lock() {
                registry.listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::session::types::IdentityClaims;

    fn claims(id: &str) -> IdentityClaims {
        IdentityClaims {
            id: id.to_string(),
            email: format!("{id}@neevcode.com"),
            display_name: None,
        }
    }

    #[test]
    fn events_arrive_in_emission_order() {
        let hub = SessionEvents::new();
        let (_guard, mut stream) = hub.subscribe();

        hub.emit(SessionEvent::SignedIn(claims("u1")));
        hub.emit(SessionEvent::SignedOut);
        hub.emit(SessionEvent::SignedIn(claims("u2")));

        assert_eq!(
            stream.try_next().expect("event").expect("open"),
            SessionEvent::SignedIn(claims("u1"))
        );
        assert_eq!(
            stream.try_next().expect("event").expect("open"),
            SessionEvent::SignedOut
        );
        assert_eq!(
            stream.try_next().expect("event").expect("open"),
            SessionEvent::SignedIn(claims("u2"))
        );
    }

    #[test]
    fn every_listener_sees_every_event() {
        let hub = SessionEvents::new();
        let (_guard_a, mut stream_a) = hub.subscribe();
        let (_guard_b, mut stream_b) = hub.subscribe();

        hub.emit(SessionEvent::SignedOut);

        assert_eq!(
            stream_a.try_next().expect("event").expect("open"),
            SessionEvent::SignedOut
        );
        assert_eq!(
            stream_b.try_next().expect("event").expect("open"),
            SessionEvent::SignedOut
        );
    }

    #[test]
    fn dropping_the_guard_unregisters_the_listener() {
        let hub = SessionEvents::new();
        let (guard, mut stream) = hub.subscribe();
        assert_eq!(hub.listener_count(), 1);

        drop(guard);
        assert_eq!(hub.listener_count(), 0);

        hub.emit(SessionEvent::SignedOut);
        // The channel is closed and empty: no event was delivered after release.
        assert!(stream.try_next().expect("closed channel yields None").is_none());
    }

    #[test]
    fn dead_receivers_are_pruned_on_emit() {
        let hub = SessionEvents::new();
        let (_guard, stream) = hub.subscribe();
        drop(stream);

        hub.emit(SessionEvent::SignedOut);
        assert_eq!(hub.listener_count(), 0);
    }
}
