//! Registration of pointer listeners with the host event source.
//!
//! A component that wants to hear about pointer-down events anywhere on the
//! screen subscribes to the [`PointerHub`] and keeps the returned
//! [`ListenerGuard`]. Dropping the guard deregisters it, so every exit path
//! (explicit unmount, drop of the component, early return) releases it.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Identifier of one registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Set of currently registered listener ids.
type Registry = Mutex<BTreeSet<ListenerId>>;

/// Host-side registry of pointer listeners.
#[derive(Debug, Default)]
pub struct PointerHub {
    /// Active listener ids.
    listeners: Arc<Registry>,
    /// Next id to hand out.
    next_id: AtomicU64,
}

impl PointerHub {
    /// What: Create an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Register a new pointer listener.
    ///
    /// Output:
    /// - Guard that keeps the registration alive until dropped or released.
    pub fn subscribe(&self) -> ListenerGuard {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id);
        tracing::trace!(listener = id.0, "pointer listener registered");
        ListenerGuard {
            id,
            registry: Arc::downgrade(&self.listeners),
            released: false,
        }
    }

    /// What: Check whether a listener is still registered.
    #[must_use]
    pub fn is_active(&self, id: ListenerId) -> bool {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&id)
    }

    /// What: Remove a registration from the host side.
    ///
    /// Output:
    /// - `true` when `id` was registered.
    ///
    /// Details:
    /// - The owning guard stops receiving events; releasing it later is a no-op.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let removed = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
        if removed {
            tracing::trace!(listener = id.0, "pointer listener removed by host");
        }
        removed
    }

    /// What: Deliver a pointer-down event to every registered listener.
    ///
    /// Inputs:
    /// - `column`, `row`: Cell of the pointer event
    ///
    /// Output:
    /// - Ids registered at the moment of dispatch, in registration order.
    ///   Callers forward the event only to owners whose id is listed.
    #[must_use]
    pub fn dispatch(&self, column: u16, row: u16) -> Vec<ListenerId> {
        let ids: Vec<ListenerId> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .copied()
            .collect();
        tracing::trace!(column, row, listeners = ids.len(), "pointer dispatch");
        ids
    }

    /// What: Count registered listeners.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Scoped registration returned by [`PointerHub::subscribe`].
#[derive(Debug)]
pub struct ListenerGuard {
    /// Registered id.
    id: ListenerId,
    /// Weak link so a guard may outlive its hub.
    registry: Weak<Registry>,
    /// Set once the registration has been removed.
    released: bool,
}

impl ListenerGuard {
    /// What: Id this guard keeps registered.
    #[must_use]
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// What: Whether the hub still holds this registration.
    ///
    /// Output:
    /// - `false` after release, after host-side removal, or once the hub is gone.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        !self.released
            && self.registry.upgrade().is_some_and(|registry| {
                registry
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .contains(&self.id)
            })
    }

    /// What: Deregister now instead of waiting for drop.
    ///
    /// Details:
    /// - Safe to call repeatedly and after the hub itself was dropped.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&self.id);
            tracing::trace!(listener = self.id.0, "pointer listener removed");
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}
