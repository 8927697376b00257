//! Operation counters
//!
//! Counters only, monotonic, reset on process start. Relaxed ordering is
//! enough: readers only ever want an approximate point-in-time view.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of per-operation counters
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// List requests served
    lists: AtomicU64,
    /// Successful single-record reads
    lookups: AtomicU64,
    /// Records created
    creates: AtomicU64,
    /// Records updated
    updates: AtomicU64,
    /// Records deleted
    deletes: AtomicU64,
    /// Requests answered with an error envelope
    rejected: AtomicU64,
    /// Payloads that failed field validation
    validation_failures: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_lists(&self) {
        self.lists.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_lookups(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_creates(&self) {
        self.creates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updates(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deletes(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_validation_failures(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            lists: self.lists.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            creates: self.creates.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub lists: u64,
    pub lookups: u64,
    pub creates: u64,
    pub updates: u64,
    pub deletes: u64,
    pub rejected: u64,
    pub validation_failures: u64,
}
