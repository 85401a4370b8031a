use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Per-session counters.
#[derive(Debug, Default)]
pub struct Metrics {
    generations: AtomicU64,
    touches: AtomicU64,
    evictions: AtomicU64,
    scans: AtomicU64,
    ignored_scans: AtomicU64,
    validation_failures: AtomicU64,
    storage_errors: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub generations: u64,
    pub touches: u64,
    pub evictions: u64,
    pub scans: u64,
    pub ignored_scans: u64,
    pub validation_failures: u64,
    pub storage_errors: u64,
}

impl Metrics {
    pub fn record_generation(&self, is_new: bool, evicted: usize) {
        if is_new {
            self.generations.fetch_add(1, Ordering::Relaxed);
        } else {
            self.touches.fetch_add(1, Ordering::Relaxed);
        }
        self.evictions.fetch_add(evicted as u64, Ordering::Relaxed);
    }

    pub fn record_scan(&self) {
        self.scans.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ignored_scan(&self) {
        self.ignored_scans.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_storage_error(&self) {
        self.storage_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            generations: self.generations.load(Ordering::Relaxed),
            touches: self.touches.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            scans: self.scans.load(Ordering::Relaxed),
            ignored_scans: self.ignored_scans.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            storage_errors: self.storage_errors.load(Ordering::Relaxed),
        }
    }
}
