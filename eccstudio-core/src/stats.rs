//! Per-scheme correction statistics
//!
//! A [`StatsTracker`] is an explicit value handed to whatever records or
//! reads results. Updates go through a mutex, so trials running on several
//! threads can share one tracker (by reference or `Arc`) without losing counts.

use crate::types::Scheme;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

#[cfg(feature = "logging")]
use tracing::trace;

/// Counters for one scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsEntry {
    /// Trials recorded
    pub tested: u64,

    /// Trials whose decoded output matched the input
    pub corrected: u64,
}

impl StatsEntry {
    /// Success rate as a percentage, 0 when nothing was tested
    pub fn success_rate(&self) -> f64 {
        if self.tested == 0 {
            0.0
        } else {
            (self.corrected as f64 / self.tested as f64) * 100.0
        }
    }

    /// Trials that were not corrected
    pub fn failed(&self) -> u64 {
        self.tested - self.corrected
    }
}

/// Point-in-time copy of every scheme's counters, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// One row per scheme
    pub entries: Vec<SchemeStats>,
}

/// One row of a [`StatsSnapshot`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeStats {
    /// Scheme the row describes
    pub scheme: Scheme,

    /// Raw counters
    #[serde(flatten)]
    pub entry: StatsEntry,

    /// Derived success rate in percent
    pub success_rate: f64,
}

impl StatsSnapshot {
    /// Counters summed over all schemes
    pub fn total(&self) -> StatsEntry {
        self.entries.iter().fold(StatsEntry::default(), |acc, row| StatsEntry {
            tested: acc.tested + row.entry.tested,
            corrected: acc.corrected + row.entry.corrected,
        })
    }
}

/// Thread-safe tested/corrected accounting
#[derive(Debug, Default)]
pub struct StatsTracker {
    entries: Mutex<HashMap<Scheme, StatsEntry>>,
}

impl StatsTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Scheme, StatsEntry>> {
        // Counters stay consistent even if a recording thread panicked
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record one trial; failures count as tested but not corrected
    pub fn record(&self, scheme: Scheme, corrected: bool) {
        let mut entries = self.lock();
        let entry = entries.entry(scheme).or_default();
        entry.tested += 1;
        if corrected {
            entry.corrected += 1;
        }

        #[cfg(feature = "logging")]
        trace!(
            "{}: {}/{} corrected",
            scheme,
            entry.corrected,
            entry.tested
        );
    }

    /// Counters for one scheme
    pub fn entry(&self, scheme: Scheme) -> StatsEntry {
        self.lock().get(&scheme).copied().unwrap_or_default()
    }

    /// Success rate for one scheme in percent, 0 when nothing was recorded
    pub fn success_rate(&self, scheme: Scheme) -> f64 {
        self.entry(scheme).success_rate()
    }

    /// Copy all counters, including schemes with no trials yet
    pub fn snapshot(&self) -> StatsSnapshot {
        let entries = self.lock();
        StatsSnapshot {
            entries: Scheme::ALL
                .iter()
                .map(|&scheme| {
                    let entry = entries.get(&scheme).copied().unwrap_or_default();
                    SchemeStats {
                        scheme,
                        entry,
                        success_rate: entry.success_rate(),
                    }
                })
                .collect(),
        }
    }

    /// Success rate across every scheme
    pub fn overall_rate(&self) -> f64 {
        self.snapshot().total().success_rate()
    }

    /// Clear all counters
    pub fn reset(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_rate_without_records_is_zero() {
        let stats = StatsTracker::new();
        assert_eq!(stats.success_rate(Scheme::Hamming), 0.0);
        assert_eq!(stats.entry(Scheme::Hamming), StatsEntry::default());
    }

    #[test]
    fn test_half_success() {
        let stats = StatsTracker::new();
        stats.record(Scheme::Hamming, true);
        stats.record(Scheme::Hamming, false);
        assert_eq!(stats.success_rate(Scheme::Hamming), 50.0);
        assert_eq!(stats.entry(Scheme::Hamming).failed(), 1);
        // Other schemes untouched
        assert_eq!(stats.entry(Scheme::ReedSolomon).tested, 0);
    }

    #[test]
    fn test_snapshot_and_reset() {
        let stats = StatsTracker::new();
        stats.record(Scheme::Convolutional, true);
        stats.record(Scheme::ReedSolomon, true);
        stats.record(Scheme::ReedSolomon, false);

        let snap = stats.snapshot();
        assert_eq!(snap.entries.len(), 3);
        assert_eq!(snap.entries[0].scheme, Scheme::Hamming);
        assert_eq!(snap.entries[2].entry.tested, 2);
        assert_eq!(snap.total(), StatsEntry { tested: 3, corrected: 2 });

        stats.reset();
        assert_eq!(stats.snapshot().total().tested, 0);
        assert_eq!(stats.overall_rate(), 0.0);
    }

    #[test]
    fn test_concurrent_records_are_not_lost() {
        let stats = Arc::new(StatsTracker::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for i in 0..500 {
                        stats.record(Scheme::Convolutional, (i + t) % 2 == 0);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let entry = stats.entry(Scheme::Convolutional);
        assert_eq!(entry.tested, 4000);
        assert_eq!(entry.corrected, 2000);
    }
}
