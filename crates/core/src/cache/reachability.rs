//! Shared reachability signal for a cache transport.
//!
//! One signal instance is created per transport and injected into
//! everything that talks to it - no globals. Transports mark it down
//! when the connection drops and up again when traffic flows; gateways
//! only read it, short-circuiting to durable-store-only behavior while
//! the cache is known unreachable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to a transport's reachability state.
///
/// Reads are racy by design: an operation may observe a stale value
/// and attempt a doomed call, which then fails normally. There is no
/// lock around read-then-act.
#[derive(Debug, Clone, Default)]
pub struct Reachability {
    down: Arc<AtomicBool>,
}

impl Reachability {
    /// Creates a signal in the reachable state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the transport is known unreachable.
    pub fn is_down(&self) -> bool {
        self.down.load(Ordering::Relaxed)
    }

    /// Marks the transport unreachable.
    ///
    /// Returns true only on the up-to-down transition so the caller
    /// logs a single event per outage, however many operations fail
    /// while it lasts.
    pub fn mark_down(&self) -> bool {
        !self.down.swap(true, Ordering::Relaxed)
    }

    /// Marks the transport reachable again.
    ///
    /// Returns true only on the down-to-up transition, mirroring
    /// [`mark_down`](Self::mark_down).
    pub fn mark_up(&self) -> bool {
        self.down.swap(false, Ordering::Relaxed)
    }
}
