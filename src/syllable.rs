//! Compact syllable notation.
//!
//! Pronunciations are usually handed over field by field, but for the CLI and
//! for tests a single string is handier: `tsang5`, `hng5`, `0ng5`, `ho2*`.
//!
//! ```text
//!  0?   initial?   final    tone   *?
//!  │    │          │        │      └─ special nasalization
//!  │    │          │        └──────── one digit, 1-8
//!  │    │          └───────────────── everything between onset and tone
//!  │    └──────────────────────────── longest known onset, if any is left over
//!  └───────────────────────────────── explicit null onset
//! ```
//!
//! A body that is entirely an onset (`ng5`, `m7`) is a syllabic nasal with a
//! null onset.

use crate::{FuzzyError, Pronunciation, Result, SpecialNasalization};

/// Known onsets, longest first.
///
/// `f`, `pf`, `phf`, `mv` and `bv` only arise from labiodentalized labials.
const ONSETS: &[&str] = &[
    "tsh", "phf", "ts", "ph", "pf", "th", "kh", "ng", "mv", "bv", "p", "t", "k", "m", "b", "n", "l", "s", "j", "g", "h",
    "f",
];

const NULL_INITIAL: &str = "0";

/// Parse `tsang5`-style notation into a [`Pronunciation`].
pub fn parse_syllable(input: &str) -> Result<Pronunciation> {
    let trimmed = input.trim();
    let caps = regex!(r"^(?P<zero>0)?(?P<body>[a-z']+)(?P<tone>[1-8])(?P<nasal>\*)?$")
        .captures(trimmed)
        .ok_or_else(|| FuzzyError::InvalidSyllable(input.to_string()))?;

    let body = &caps["body"];
    let tone = caps["tone"].parse::<u8>().map_err(|_| FuzzyError::InvalidSyllable(input.to_string()))?;
    let sp_nasal =
        if caps.name("nasal").is_some() { SpecialNasalization::Nasalized } else { SpecialNasalization::None };

    let (initial, rhyme) = if caps.name("zero").is_some() { (NULL_INITIAL, body) } else { split_onset(body) };

    Ok(Pronunciation::new(initial, rhyme, tone).with_sp_nasal(sp_nasal))
}

/// Split `body` at its longest onset. A body that is nothing but an onset is
/// a syllabic final.
fn split_onset(body: &str) -> (&str, &str) {
    match ONSETS.iter().find_map(|onset| body.strip_prefix(onset).map(|rest| (*onset, rest))) {
        Some((onset, rest)) if !rest.is_empty() => (onset, rest),
        _ => (NULL_INITIAL, body),
    }
}

impl Pronunciation {
    /// Render in the notation read by [`parse_syllable`].
    ///
    /// The null onset is written only when leaving it out would read back
    /// differently (`0ng` stays `ng`, but `0ngu` needs the `0`).
    pub fn to_syllable(&self) -> String {
        let nasal = if self.sp_nasal == SpecialNasalization::Nasalized { "*" } else { "" };
        let initial = if self.initial == NULL_INITIAL && split_onset(&self.rhyme).0 == NULL_INITIAL {
            ""
        } else {
            self.initial.as_str()
        };

        format!("{}{}{}{}", initial, self.rhyme, self.tone, nasal)
    }
}
