//! Accents: ordered compositions of fuzzy rules.
//!
//! An accent is itself a [`FuzzyRule`]. Applying it threads one owned
//! pronunciation through every rule's `fuzz`, left to right, so later rules
//! see what earlier rules produced:
//!
//! ```text
//! P ──R1.fuzz──▶ P1 ──R2.fuzz──▶ P2 ── … ──Rn.fuzz──▶ Pn
//! ```
//!
//! Order matters. `[FR_N_As_NG, FR_ENG_As_EN]` maps `en` to `en` (through
//! `eng`) while the reverse order maps it to `eng`.

use super::registry::resolve_rule;
use crate::{FuzzyRule, Pronunciation, Result, Touches};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Id of the identity accent.
pub const DUMMY_ACCENT_ID: &str = "Dummy";

static DUMMY_ACCENT: Lazy<Accent> = Lazy::new(|| Accent::new(DUMMY_ACCENT_ID, "", ""));

/// External descriptor of an accent, as supplied by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentRecord {
    pub id: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub subarea: String,
    /// Rule identifiers, e.g. `"FR_R_As_O"`, in application order.
    #[serde(default)]
    pub rules: Vec<String>,
}

/// A named, located accent.
#[derive(Debug, Clone)]
pub struct Accent {
    pub id: String,
    pub area: String,
    pub subarea: String,
    pub rules: Vec<Arc<dyn FuzzyRule>>,
}

impl Accent {
    /// An accent with no rules yet.
    pub fn new(id: impl Into<String>, area: impl Into<String>, subarea: impl Into<String>) -> Self {
        Accent { id: id.into(), area: area.into(), subarea: subarea.into(), rules: Vec::new() }
    }

    /// Append `rule` to the end of the sequence.
    pub fn with_rule(mut self, rule: impl FuzzyRule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// The identity accent: no rules, empty area.
    pub fn dummy() -> &'static Accent {
        &DUMMY_ACCENT
    }

    /// Build an accent from its descriptor, resolving every rule identifier.
    ///
    /// Fails on the first identifier that names no rule.
    pub fn from_record(record: &AccentRecord) -> Result<Self> {
        let rules = record.rules.iter().map(|id| resolve_rule(id)).collect::<Result<Vec<_>>>()?;

        tracing::debug!(accent = %record.id, area = %record.area, subarea = %record.subarea, rules = rules.len(), "resolved accent");

        Ok(Accent { id: record.id.clone(), area: record.area.clone(), subarea: record.subarea.clone(), rules })
    }

    /// Descriptor of this accent. Rules are listed by [`FuzzyRule::name`].
    pub fn to_record(&self) -> AccentRecord {
        AccentRecord {
            id: self.id.clone(),
            area: self.area.clone(),
            subarea: self.subarea.clone(),
            rules: self.rules.iter().map(|rule| rule.name().to_string()).collect(),
        }
    }

    /// Returns true when applying this accent can never change anything.
    pub fn is_identity(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FuzzyRule for Accent {
    fn name(&self) -> &str {
        &self.id
    }

    fn touches(&self) -> Touches {
        self.rules.iter().fold(Touches::empty(), |acc, rule| acc | rule.touches())
    }

    fn fuzz(&self, pronunciation: &mut Pronunciation) {
        for rule in &self.rules {
            rule.fuzz(pronunciation);
        }
    }
}
