extern crate self as pengim_fuzzy;

use serde::{Deserialize, Serialize};
use std::fmt;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;
mod syllable;

pub use api::{find_accent, fuzz, load_accents, load_vocabulary};
pub use engine::{Accent, AccentRecord, FuzzyCache, Fuzzer, RegistrationMetrics, resolve_rule, resolve_shift, rule_names};
pub use error::{FuzzyError, Result};
pub use rules::SoundShift;
pub use syllable::parse_syllable;

// --- Pronunciation ----------------------------------------------------------

/// Special nasalization marker of a syllable.
///
/// This marks nasal vowel quality that is not spelled by a nasal coda (the
/// `nn` finals already carry their own nasality). On the external boundary the
/// marker travels by name, never as a raw integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum SpecialNasalization {
    #[default]
    #[serde(rename = "ESN_NONE")]
    None = 0,
    #[serde(rename = "ESN_NASALIZED")]
    Nasalized = 1,
}

impl SpecialNasalization {
    /// External enumeration name, e.g. `"ESN_NONE"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SpecialNasalization::None => "ESN_NONE",
            SpecialNasalization::Nasalized => "ESN_NASALIZED",
        }
    }

    /// Look up a marker by its external enumeration name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "ESN_NONE" => Ok(SpecialNasalization::None),
            "ESN_NASALIZED" => Ok(SpecialNasalization::Nasalized),
            _ => Err(FuzzyError::UnknownNasalization(name.to_string())),
        }
    }
}

impl TryFrom<i32> for SpecialNasalization {
    type Error = FuzzyError;

    fn try_from(raw: i32) -> Result<Self> {
        match raw {
            0 => Ok(SpecialNasalization::None),
            1 => Ok(SpecialNasalization::Nasalized),
            _ => Err(FuzzyError::UnknownNasalization(raw.to_string())),
        }
    }
}

impl fmt::Display for SpecialNasalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One syllable decomposed into onset, rhyme, tone and nasalization marker.
///
/// `initial` is `"0"` for a syllable without onset. The rhyme is called
/// `final` in romanization tables and on the serialized boundary; `final` is
/// a reserved word in Rust, hence the field name.
///
/// Rules never mutate a published value: they operate on a clone
/// (see [`FuzzyRule::apply_raw`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pronunciation {
    pub initial: String,
    #[serde(rename = "final")]
    pub rhyme: String,
    pub tone: u8,
    #[serde(default)]
    pub sp_nasal: SpecialNasalization,
}

impl Pronunciation {
    /// Build a pronunciation without special nasalization.
    pub fn new(initial: impl Into<String>, rhyme: impl Into<String>, tone: u8) -> Self {
        Pronunciation { initial: initial.into(), rhyme: rhyme.into(), tone, sp_nasal: SpecialNasalization::None }
    }

    /// Same pronunciation with the given nasalization marker.
    pub fn with_sp_nasal(mut self, sp_nasal: SpecialNasalization) -> Self {
        self.sp_nasal = sp_nasal;
        self
    }

    /// Cache/map key: `initial + final + tone`.
    ///
    /// `sp_nasal` is not part of the key, so `p oi 1` with and without
    /// nasalization share the key `poi1`.
    pub fn canonical_key(&self) -> String {
        format!("{}{}{}", self.initial, self.rhyme, self.tone)
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{} {}", self.initial, self.rhyme, self.tone, self.sp_nasal)
    }
}

// --- Fuzzy rules ------------------------------------------------------------

bitflags::bitflags! {
    /// Fields of a [`Pronunciation`] that a rule may rewrite.
    ///
    /// Tone and nasalization are never rewritten, so they have no bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Touches: u8 {
        const INITIAL = 1 << 0;
        const FINAL   = 1 << 1;
    }
}

/// A deterministic sound shift over a single syllable.
///
/// Implementors override only [`FuzzyRule::fuzz`], which receives an owned
/// copy. Callers go through [`FuzzyRule::apply_raw`] (or a [`Fuzzer`] for
/// cached lookups), so the input is never modified.
///
/// `fuzz` must be total: input that does not match the rule's conditions is
/// left as is.
pub trait FuzzyRule: fmt::Debug + Send + Sync {
    /// Identifier of the rule, e.g. `"FR_V_As_U"`, or the accent id.
    fn name(&self) -> &str;

    /// Human-readable description. Documentation only.
    fn description(&self) -> &str {
        ""
    }

    /// Characters whose reading shows the shift. Documentation only.
    fn example_chars(&self) -> &[&'static str] {
        &[]
    }

    /// Fields this rule may rewrite.
    fn touches(&self) -> Touches;

    /// Rewrite `pronunciation` in place.
    fn fuzz(&self, pronunciation: &mut Pronunciation);

    /// Return the rewritten copy of `origin`.
    fn apply_raw(&self, origin: &Pronunciation) -> Pronunciation {
        let mut result = origin.clone();
        self.fuzz(&mut result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_ignores_sp_nasal() {
        let plain = Pronunciation::new("p", "oi", 1);
        let nasal = plain.clone().with_sp_nasal(SpecialNasalization::Nasalized);

        assert_eq!(plain.canonical_key(), "poi1");
        assert_eq!(plain.canonical_key(), nasal.canonical_key());
        assert_ne!(plain, nasal);
    }

    #[test]
    fn display_matches_debug_form() {
        let p = Pronunciation::new("0", "ng", 5).with_sp_nasal(SpecialNasalization::Nasalized);
        assert_eq!(p.to_string(), "0ng5 ESN_NASALIZED");
    }

    #[test]
    fn serializes_sp_nasal_by_name() {
        let p = Pronunciation::new("ts", "ang", 1);
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json, serde_json::json!({"initial": "ts", "final": "ang", "tone": 1, "sp_nasal": "ESN_NONE"}));

        let back: Pronunciation = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn sp_nasal_defaults_when_missing() {
        let p: Pronunciation = serde_json::from_str(r#"{"initial":"h","final":"o","tone":2}"#).unwrap();
        assert_eq!(p.sp_nasal, SpecialNasalization::None);
    }

    #[test]
    fn rejects_unknown_sp_nasal_name() {
        let res: std::result::Result<Pronunciation, _> =
            serde_json::from_str(r#"{"initial":"h","final":"o","tone":2,"sp_nasal":"ESN_BOGUS"}"#);
        assert!(res.is_err());
        assert!(matches!(SpecialNasalization::from_name("ESN_BOGUS"), Err(FuzzyError::UnknownNasalization(_))));
    }

    #[test]
    fn sp_nasal_from_raw_integer() {
        assert_eq!(SpecialNasalization::try_from(1).unwrap(), SpecialNasalization::Nasalized);
        assert_eq!(SpecialNasalization::try_from(0).unwrap().as_str(), "ESN_NONE");
        assert!(SpecialNasalization::try_from(7).is_err());
    }
}
