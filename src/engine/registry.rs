//! Rule identifier resolution.
//!
//! Rule identifiers arrive from the data layer as names of an external
//! enumeration (`FR_V_As_U`). Each maps to the catalog variant of the same
//! stem, spelled with the `FuzzyRule_` prefix (`FuzzyRule_V_As_U`).
//!
//! The map is closed: it is built once from `rules::get()` and never grows.
//! An identifier that does not derive to a known variant is a configuration
//! error and surfaces as [`FuzzyError::UnknownRule`].

use crate::rules::{self, SoundShift};
use crate::{FuzzyError, FuzzyRule, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Prefix of identifiers in the external enumeration.
pub const IDENTIFIER_PREFIX: &str = "FR_";
/// Prefix of catalog variant names.
pub const VARIANT_PREFIX: &str = "FuzzyRule_";

static CATALOG: Lazy<Vec<SoundShift>> = Lazy::new(rules::get);

/// Variant name -> index into `CATALOG`.
static REGISTRY: Lazy<HashMap<String, usize>> = Lazy::new(|| {
    CATALOG
        .iter()
        .enumerate()
        .filter_map(|(idx, shift)| variant_name(shift.name).map(|name| (name, idx)))
        .collect()
});

/// `FR_X` -> `FuzzyRule_X`. Variant names are accepted as they are.
fn variant_name(identifier: &str) -> Option<String> {
    if let Some(stem) = identifier.strip_prefix(IDENTIFIER_PREFIX) {
        Some(format!("{VARIANT_PREFIX}{stem}"))
    } else if identifier.starts_with(VARIANT_PREFIX) {
        Some(identifier.to_string())
    } else {
        None
    }
}

/// Resolve `identifier` to a fresh copy of its catalog entry.
pub fn resolve_shift(identifier: &str) -> Result<SoundShift> {
    let idx = variant_name(identifier).and_then(|name| REGISTRY.get(&name).copied());

    match idx {
        Some(idx) => Ok(CATALOG[idx]),
        None => {
            tracing::warn!(identifier, "unknown fuzzy rule identifier");
            Err(FuzzyError::UnknownRule(identifier.to_string()))
        }
    }
}

/// Resolve `identifier` to a shareable rule instance.
pub fn resolve_rule(identifier: &str) -> Result<Arc<dyn FuzzyRule>> {
    resolve_shift(identifier).map(|shift| Arc::new(shift) as Arc<dyn FuzzyRule>)
}

/// Identifiers of the whole catalog, in declaration order.
pub fn rule_names() -> Vec<&'static str> {
    CATALOG.iter().map(|shift| shift.name).collect()
}
