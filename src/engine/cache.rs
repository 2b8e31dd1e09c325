//! Vocabulary cache for fuzzy rules.
//!
//! A [`Fuzzer`] wraps any [`FuzzyRule`] (a single shift or a whole
//! [`Accent`](super::Accent)) and adds two lookups over a registered
//! vocabulary:
//!
//! - **forward**: source pronunciation -> fuzzed pronunciation.
//! - **reverse**: canonical key of a fuzzed pronunciation -> every source that
//!   fuzzes to it, in registration order, duplicates kept.
//!
//! The cache is only ever filled by [`Fuzzer::register_vocabulary`]. A lookup
//! that misses computes the result but does not store it, so memory stays
//! bounded by the registered vocabulary.
//!
//! ## Invariants
//!
//! - Forward entries are keyed by the full pronunciation, `sp_nasal`
//!   included. Reverse entries are keyed by `canonical_key()`, which leaves
//!   `sp_nasal` out: sources differing only in nasalization share a reverse
//!   bucket. `reverse_lookup_exact` separates them again.
//! - A registration builds a complete `FuzzyCache` first and then swaps it in
//!   under a short write lock. Readers hold an `Arc` to whichever cache was
//!   current when they looked, never a half-built one.

use super::metrics::RegistrationMetrics;
use crate::{FuzzyRule, Pronunciation};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

/// Forward and reverse maps over one registered vocabulary.
#[derive(Debug, Default, Clone)]
pub struct FuzzyCache {
    forward: HashMap<Pronunciation, Pronunciation>,
    reverse: HashMap<String, Vec<Pronunciation>>,
}

impl FuzzyCache {
    /// Fuzz every entry of `vocabulary` with `rule`.
    pub fn build<R: FuzzyRule + ?Sized>(rule: &R, vocabulary: &[Pronunciation]) -> Self {
        let mut cache = FuzzyCache {
            forward: HashMap::with_capacity(vocabulary.len()),
            reverse: HashMap::with_capacity(vocabulary.len()),
        };

        for source in vocabulary {
            let fuzzed = rule.apply_raw(source);
            cache.reverse.entry(fuzzed.canonical_key()).or_default().push(source.clone());
            cache.forward.insert(source.clone(), fuzzed);
        }

        cache
    }

    /// Cached fuzzed form of `source`.
    pub fn get(&self, source: &Pronunciation) -> Option<&Pronunciation> {
        self.forward.get(source)
    }

    /// Sources whose fuzzed canonical key is `key`.
    pub fn sources(&self, key: &str) -> &[Pronunciation] {
        self.reverse.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of forward entries.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Number of distinct fuzzed canonical keys.
    pub fn targets(&self) -> usize {
        self.reverse.len()
    }
}

/// Cached front of a [`FuzzyRule`].
#[derive(Debug)]
pub struct Fuzzer<R> {
    rule: R,
    cache: RwLock<Arc<FuzzyCache>>,
}

impl<R: FuzzyRule> Fuzzer<R> {
    /// Wrap `rule` with an empty cache.
    pub fn new(rule: R) -> Self {
        Fuzzer { rule, cache: RwLock::new(Arc::new(FuzzyCache::default())) }
    }

    /// The wrapped rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Fuzzed form of `origin`, from the cache when registered.
    ///
    /// A miss computes the result through `apply_raw` without caching it.
    pub fn apply(&self, origin: &Pronunciation) -> Pronunciation {
        match self.snapshot().get(origin) {
            Some(hit) => hit.clone(),
            None => self.rule.apply_raw(origin),
        }
    }

    /// Replace the cache with one built from `vocabulary`.
    pub fn register_vocabulary(&self, vocabulary: &[Pronunciation]) {
        self.register_vocabulary_with_metrics(vocabulary);
    }

    /// Same as [`Fuzzer::register_vocabulary`], reporting what the new cache holds.
    pub fn register_vocabulary_with_metrics(&self, vocabulary: &[Pronunciation]) -> RegistrationMetrics {
        let start = Instant::now();
        let cache = FuzzyCache::build(&self.rule, vocabulary);
        let shifted = vocabulary.iter().filter(|source| cache.get(source).is_some_and(|fuzzed| fuzzed != *source)).count();

        let metrics = RegistrationMetrics {
            vocabulary: vocabulary.len(),
            entries: cache.len(),
            targets: cache.targets(),
            shifted,
            duration: start.elapsed(),
        };

        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(cache);

        tracing::debug!(
            rule = self.rule.name(),
            vocabulary = metrics.vocabulary,
            entries = metrics.entries,
            targets = metrics.targets,
            shifted = metrics.shifted,
            elapsed = ?metrics.duration,
            "registered vocabulary"
        );

        metrics
    }

    /// Registered sources whose fuzzed canonical key equals `key`.
    pub fn reverse_lookup(&self, key: &str) -> Vec<Pronunciation> {
        self.snapshot().sources(key).to_vec()
    }

    /// Registered sources that fuzz to exactly `fuzzed`, nasalization included.
    pub fn reverse_lookup_exact(&self, fuzzed: &Pronunciation) -> Vec<Pronunciation> {
        let cache = self.snapshot();
        cache
            .sources(&fuzzed.canonical_key())
            .iter()
            .filter(|source| cache.get(source) == Some(fuzzed))
            .cloned()
            .collect()
    }

    /// Returns true when `origin` is part of the registered vocabulary.
    pub fn is_cached(&self, origin: &Pronunciation) -> bool {
        self.snapshot().get(origin).is_some()
    }

    /// Number of distinct registered pronunciations.
    pub fn vocabulary_len(&self) -> usize {
        self.snapshot().len()
    }

    /// The cache currently published.
    pub fn snapshot(&self) -> Arc<FuzzyCache> {
        Arc::clone(&self.cache.read().unwrap_or_else(PoisonError::into_inner))
    }
}
