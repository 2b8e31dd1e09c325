//! Rule composition, resolution and caching.
//!
//! The catalog in `src/rules/**` only knows how to rewrite one syllable. This
//! module turns those shifts into something a caller can configure and query:
//!
//! ```text
//! AccentRecord { id, area, subarea, rules: ["FR_..", ..] }
//!        │
//!        │  resolve_rule (registry.rs)      FR_X  ──▶  FuzzyRule_X  ──▶  SoundShift
//!        v
//!     Accent (accent.rs)                    fuzz = fold of rule.fuzz, in order
//!        │
//!        │  Fuzzer::new (cache.rs)
//!        v
//!     Fuzzer ── register_vocabulary ──▶ FuzzyCache { forward, reverse }
//!        │                                   (swapped in atomically)
//!        ├─ apply(p)            cache hit, or apply_raw on a miss
//!        └─ reverse_lookup(k)   sources whose fuzzed key is k
//! ```
//!
//! ## Responsibilities by module
//!
//! - `registry.rs`: closed map from rule identifier to catalog entry.
//! - `accent.rs`: `Accent` and its external descriptor `AccentRecord`.
//! - `cache.rs`: `FuzzyCache` (forward and reverse maps) and `Fuzzer`, the
//!   cached front of any `FuzzyRule`.
//! - `metrics.rs`: what a vocabulary registration did and how long it took.
//!
//! ## Debugging
//!
//! Registration and resolution emit `tracing` events at `debug` level. The CLI
//! turns them on when `PENGIM_DEBUG_RULES` is set.

#[path = "engine/accent.rs"]
mod accent;
#[path = "engine/cache.rs"]
mod cache;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/registry.rs"]
mod registry;

pub use accent::{Accent, AccentRecord};
pub use cache::{FuzzyCache, Fuzzer};
pub use metrics::RegistrationMetrics;
pub use registry::{resolve_rule, resolve_shift, rule_names};
