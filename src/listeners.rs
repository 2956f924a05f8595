//! Scoped listener subscriptions for global input interests
//!
//! A component that needs to see input outside its own bounds (a press
//! anywhere on screen, Escape regardless of focus) acquires a [`Subscription`]
//! from the shared [`ListenerRegistry`]. The registration lives exactly as long
//! as the subscription value: dropping it unregisters.
//!
//! # Example
//!
//! ```
//! use mkui_calendar::listeners::{ListenerKind, ListenerRegistry};
//!
//! let registry = ListenerRegistry::new();
//! let sub = registry.subscribe(&[ListenerKind::OutsidePress, ListenerKind::Escape]);
//! assert!(registry.is_listening(ListenerKind::Escape));
//!
//! drop(sub);
//! assert_eq!(registry.active_count(), 0);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Global input interest a subscriber registers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer presses landing outside the subscriber's bounds
    OutsidePress,
    /// The Escape key
    Escape,
}

/// Identifier of a live subscription
pub type ListenerId = u64;

#[derive(Debug, Default)]
struct Registry {
    next_id: ListenerId,
    entries: Vec<(ListenerId, Vec<ListenerKind>)>,
}

/// Shared table of live subscriptions
///
/// Cloning shares the same table. Single-threaded by construction.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<Registry>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in the given kinds until the subscription is dropped
    pub fn subscribe(&self, kinds: &[ListenerKind]) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, kinds.to_vec()));
        tracing::trace!(id, ?kinds, "listener subscribed");

        Subscription {
            id,
            kinds: kinds.to_vec(),
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions
    pub fn active_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Whether any live subscription wants this kind of input
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.inner
            .borrow()
            .entries
            .iter()
            .any(|(_, kinds)| kinds.contains(&kind))
    }
}

/// A live registration; unregisters on drop
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    kinds: Vec<ListenerKind>,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether this subscription covers the given kind
    pub fn wants(&self, kind: ListenerKind) -> bool {
        self.kinds.contains(&kind)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Registry may already be gone if the host tore down first
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
            tracing::trace!(id = self.id, "listener released");
        }
    }
}
