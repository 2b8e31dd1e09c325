//! Vocabulary registration metrics.
//!
//! `Fuzzer::register_vocabulary` returns nothing; the `_with_metrics` variant
//! reports what the new cache holds. Useful for checking how much of a
//! vocabulary an accent actually moves, and how many distinct readings
//! collapse onto one realized form.

use std::time::Duration;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistrationMetrics {
    /// Number of pronunciations handed to the registration (duplicates included).
    pub vocabulary: usize,
    /// Distinct entries in the forward map.
    pub entries: usize,
    /// Distinct canonical keys in the reverse map.
    pub targets: usize,
    /// Vocabulary entries whose fuzzed form differs from the source.
    pub shifted: usize,
    /// Time spent building the cache (publishing excluded).
    pub duration: Duration,
}

impl RegistrationMetrics {
    /// Number of distinct sources that share a realized form with another one.
    pub fn merged(&self) -> usize {
        self.entries.saturating_sub(self.targets)
    }
}
