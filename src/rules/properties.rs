//! Property tests over the whole catalog.
//!
//! - Shifts never touch tone or nasalization, nor fields outside `touches`.
//! - Syllables no shift can match pass through unchanged.
//! - Every single shift is idempotent. Compositions need not be (see the
//!   accent tests).
//! - An accent is the left-to-right fold of its rules.

#[cfg(test)]
mod tests {
    use crate::engine::Accent;
    use crate::rules::{self, SoundShift};
    use crate::{FuzzyRule, Pronunciation, SpecialNasalization, Touches};
    use proptest::prelude::*;

    const INITIALS: &[&str] =
        &["0", "p", "ph", "m", "b", "t", "th", "n", "l", "ts", "tsh", "s", "j", "k", "kh", "ng", "g", "h", "'k"];

    const FINALS: &[&str] = &[
        "a", "e", "i", "o", "u", "v", "r", "rh", "rm", "m", "ng", "ai", "au", "eu", "iu", "oi", "ou", "ue", "ua", "ia",
        "io", "ie", "iau", "iou", "uai", "ann", "ainn", "oinn", "uoinn", "ounn", "uenn", "ionn", "iaunn", "am", "iam",
        "an", "ian", "uan", "in", "un", "vn", "ang", "iang", "uang", "eng", "ieng", "ueng", "ong", "iong", "ung",
        "ap", "iap", "at", "iat", "uat", "it", "ut", "vt", "ak", "ek", "uek", "ok", "iok", "ah", "oh", "eh", "ueh",
        "ioh", "iauh", "a'h",
    ];

    /// Letters no shift looks for.
    const INERT_FINAL: &str = "[xyzq]{1,4}";

    fn catalog() -> Vec<SoundShift> {
        rules::get()
    }

    fn arb_initial() -> impl Strategy<Value = String> {
        prop_oneof![prop::sample::select(INITIALS).prop_map(str::to_string), "[a-z']{0,3}"]
    }

    fn arb_final() -> impl Strategy<Value = String> {
        prop_oneof![3 => prop::sample::select(FINALS).prop_map(str::to_string), 1 => "[a-z']{0,5}"]
    }

    fn arb_sp_nasal() -> impl Strategy<Value = SpecialNasalization> {
        prop_oneof![Just(SpecialNasalization::None), Just(SpecialNasalization::Nasalized)]
    }

    fn arb_pronunciation() -> impl Strategy<Value = Pronunciation> {
        (arb_initial(), arb_final(), 0u8..=9, arb_sp_nasal()).prop_map(|(initial, rhyme, tone, sp_nasal)| {
            Pronunciation::new(initial, rhyme, tone).with_sp_nasal(sp_nasal)
        })
    }

    proptest! {
        #[test]
        fn prop_shifts_respect_touches(p in arb_pronunciation()) {
            for shift in catalog() {
                let out = shift.apply_raw(&p);

                prop_assert_eq!(out.tone, p.tone, "{} changed the tone", shift.name);
                prop_assert_eq!(out.sp_nasal, p.sp_nasal, "{} changed sp_nasal", shift.name);
                if !shift.touches.contains(Touches::INITIAL) {
                    prop_assert_eq!(&out.initial, &p.initial, "{} changed the initial", shift.name);
                }
                if !shift.touches.contains(Touches::FINAL) {
                    prop_assert_eq!(&out.rhyme, &p.rhyme, "{} changed the final", shift.name);
                }
            }
        }

        #[test]
        fn prop_unmatched_syllables_pass_through(initial in arb_initial(), rhyme in INERT_FINAL, tone in 0u8..=9) {
            let p = Pronunciation::new(initial.replace('\'', ""), rhyme, tone);
            for shift in catalog() {
                prop_assert_eq!(shift.apply_raw(&p), p.clone(), "{} matched an inert syllable", shift.name);
            }
        }

        #[test]
        fn prop_single_shifts_are_idempotent(p in arb_pronunciation()) {
            for shift in catalog() {
                let once = shift.apply_raw(&p);
                prop_assert_eq!(shift.apply_raw(&once), once.clone(), "{} is not idempotent on {}", shift.name, p);
            }
        }

        #[test]
        fn prop_accent_is_a_fold(p in arb_pronunciation(), picks in prop::collection::vec(0usize..36, 0..8)) {
            let all = catalog();
            let chosen: Vec<SoundShift> = picks.iter().map(|&i| all[i % all.len()]).collect();

            let accent = chosen.iter().fold(Accent::new("prop", "", ""), |acc, shift| acc.with_rule(*shift));
            let folded = chosen.iter().fold(p.clone(), |acc, shift| shift.apply_raw(&acc));

            prop_assert_eq!(accent.apply_raw(&p), folded);
        }

        #[test]
        fn prop_dummy_is_identity(p in arb_pronunciation()) {
            prop_assert_eq!(Accent::dummy().apply_raw(&p), p);
        }
    }
}
