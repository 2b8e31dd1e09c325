//! The sound-shift catalog.
//!
//! Every shift is a [`SoundShift`]: a name, documentation metadata, the
//! fields it may rewrite and a plain function doing the rewrite. Shifts are
//! grouped by what they act on:
//!
//! - `finals`: vowel mergers and rhyme substitutions.
//! - `codas`: nasal and stop coda shifts, syllabic `ng`.
//! - `initials`: onset lenition/assimilation, labiodentalization and
//!   apostrophe stripping.
//!
//! The catalog is closed. Identifiers use the `FR_` prefix of the external
//! enumeration; resolution from identifier to shift lives in
//! `engine/registry.rs`.

use crate::{FuzzyRule, Pronunciation, Touches};
use std::fmt;

pub mod codas;
pub mod finals;
pub mod initials;
pub mod predicates;

#[cfg(test)]
mod properties;

/// One entry of the catalog.
#[derive(Clone, Copy)]
pub struct SoundShift {
    pub name: &'static str,
    pub description: &'static str,
    pub example_chars: &'static [&'static str],
    pub touches: Touches,
    pub fuzz: fn(&mut Pronunciation),
}

impl fmt::Debug for SoundShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoundShift")
            .field("name", &self.name)
            .field("touches", &self.touches)
            .field("fuzz", &"<function>")
            .finish()
    }
}

impl FuzzyRule for SoundShift {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn example_chars(&self) -> &[&'static str] {
        self.example_chars
    }

    fn touches(&self) -> Touches {
        self.touches
    }

    fn fuzz(&self, pronunciation: &mut Pronunciation) {
        (self.fuzz)(pronunciation)
    }
}

/// The whole catalog in declaration order.
pub fn get() -> Vec<SoundShift> {
    let mut all = finals::rules::get();
    all.extend(initials::rules::get());
    all.extend(codas::rules::get());
    all
}
