use super::rules::*;
use crate::rules::SoundShift;
use crate::{FuzzyRule, Pronunciation};

fn check(cases: &[(fn() -> SoundShift, &str, &str, &str)]) {
    for &(make, initial, rhyme, expected) in cases {
        let shift = make();
        let out = shift.apply_raw(&Pronunciation::new(initial, rhyme, 2));

        assert_eq!(
            out.initial, expected,
            "{} on {}{}: expected initial '{}', got '{}'",
            shift.name, initial, rhyme, expected, out.initial
        );
    }
}

#[test]
fn n_l_confusion() {
    check(&[
        (n_as_l_for_m_ending, "n", "iam", "l"),
        (n_as_l_for_m_ending, "n", "ian", "n"),
        (n_as_l_for_n_or_ng_ending, "n", "ian", "l"),
        (n_as_l_for_n_or_ng_ending, "n", "ang", "l"),
        (n_as_l_for_n_or_ng_ending, "n", "ann", "n"),
        (n_as_l_for_n_or_ng_ending, "n", "am", "n"),
        (l_as_n_for_m_ending, "l", "am", "n"),
        (l_as_n_for_m_ending, "l", "ang", "l"),
        (l_as_n_for_m_ending, "t", "am", "t"),
    ]);
}

#[test]
fn m_b_alternation() {
    check(&[
        (mu_as_bu_for_nasal_ending, "m", "uan", "b"),
        (mu_as_bu_for_nasal_ending, "m", "ung", "b"),
        (mu_as_bu_for_nasal_ending, "m", "uann", "m"),
        (mu_as_bu_for_nasal_ending, "m", "ang", "m"),
        (bu_as_mu_for_nasal_ending, "b", "un", "m"),
        (bu_as_mu_for_nasal_ending, "b", "uang", "m"),
        (bu_as_mu_for_nasal_ending, "b", "ue", "b"),
    ]);
}

#[test]
fn labiodentalization() {
    check(&[
        (labiodentalized, "h", "ua", "f"),
        (labiodentalized, "p", "ue", "pf"),
        (labiodentalized, "ph", "ue", "phf"),
        (labiodentalized, "m", "ung", "mv"),
        (labiodentalized, "b", "uan", "bv"),
        (labiodentalized, "k", "ua", "k"),
        (labiodentalized, "h", "a", "h"),
    ]);
}

#[test]
fn ngu_loses_onset() {
    check(&[(ngu_as_u, "ng", "u", "0"), (ngu_as_u, "ng", "ua", "ng"), (ngu_as_u, "g", "u", "g")]);
}

#[test]
fn apostrophe_is_stripped_from_both_fields() {
    let out = remove_apostrophe().apply_raw(&Pronunciation::new("'k", "a'h", 4));
    assert_eq!(out.initial, "k");
    assert_eq!(out.rhyme, "ah");
    assert_eq!(out.tone, 4);

    let plain = Pronunciation::new("k", "ah", 4);
    assert_eq!(remove_apostrophe().apply_raw(&plain), plain);
}

#[test]
fn initial_shifts_keep_the_final() {
    for shift in get().into_iter().filter(|s| s.name != "FR_RemoveApostrophe") {
        let origin = Pronunciation::new("n", "uang", 5);
        assert_eq!(shift.apply_raw(&origin).rhyme, origin.rhyme, "{} rewrote the final", shift.name);
    }
}
