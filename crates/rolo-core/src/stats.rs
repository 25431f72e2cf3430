//! Injectable lifecycle instrumentation for [`crate::Contact`].
//!
//! Counters live behind a shared handle passed in at construction rather than
//! in process-wide statics, so each test (or each embedding) observes only
//! the contacts it instrumented itself. Contacts built without a handle pay
//! nothing.

use std::sync::{
  Arc,
  atomic::{AtomicU64, Ordering},
};

#[derive(Debug, Default)]
struct Counters {
  constructed: AtomicU64,
  cloned:      AtomicU64,
  dropped:     AtomicU64,
}

/// A shared, cheaply clonable handle to one set of lifecycle counters.
#[derive(Debug, Clone, Default)]
pub struct StatsHandle {
  counters: Arc<Counters>,
}

impl StatsHandle {
  pub fn new() -> Self { Self::default() }

  pub(crate) fn record_constructed(&self) {
    self.counters.constructed.fetch_add(1, Ordering::Relaxed);
  }

  pub(crate) fn record_cloned(&self) {
    self.counters.cloned.fetch_add(1, Ordering::Relaxed);
  }

  pub(crate) fn record_dropped(&self) {
    self.counters.dropped.fetch_add(1, Ordering::Relaxed);
  }

  /// A point-in-time copy of the counters.
  pub fn snapshot(&self) -> ContactStats {
    ContactStats {
      constructed: self.counters.constructed.load(Ordering::Relaxed),
      cloned:      self.counters.cloned.load(Ordering::Relaxed),
      dropped:     self.counters.dropped.load(Ordering::Relaxed),
    }
  }
}

/// Counter values captured by [`StatsHandle::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactStats {
  pub constructed: u64,
  pub cloned:      u64,
  pub dropped:     u64,
}

// ─── Tests ───────────────────────────────────────────────────────────────────
