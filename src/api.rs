use crate::engine::{Accent, AccentRecord};
use crate::{FuzzyError, FuzzyRule, Pronunciation, Result};

/// Fuzz `origin` with `rule`, without any cache.
///
/// # Example
/// ```
/// use pengim_fuzzy::{Pronunciation, fuzz, resolve_rule};
///
/// let rule = resolve_rule("FR_R_As_O").unwrap();
/// let out = fuzz(&Pronunciation::new("ts", "r", 6), rule.as_ref());
/// assert_eq!(out.rhyme, "o");
/// ```
pub fn fuzz(origin: &Pronunciation, rule: &dyn FuzzyRule) -> Pronunciation {
    rule.apply_raw(origin)
}

/// Parse a JSON array of accent descriptors and resolve them.
///
/// Any unknown rule identifier fails the whole load.
pub fn load_accents(json: &str) -> Result<Vec<Accent>> {
    let records: Vec<AccentRecord> = serde_json::from_str(json)?;
    let accents = records.iter().map(Accent::from_record).collect::<Result<Vec<_>>>()?;

    tracing::debug!(accents = accents.len(), "loaded accents");
    Ok(accents)
}

/// The accent called `id` among `accents`.
pub fn find_accent<'a>(accents: &'a [Accent], id: &str) -> Result<&'a Accent> {
    accents.iter().find(|accent| accent.id == id).ok_or_else(|| FuzzyError::UnknownAccent(id.to_string()))
}

/// Parse a JSON array of pronunciations.
pub fn load_vocabulary(json: &str) -> Result<Vec<Pronunciation>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Fuzzer, SpecialNasalization};

    const ACCENTS: &str = r#"[
        {"id": "Dummy", "area": "", "subarea": "", "rules": []},
        {"id": "Chaoyang", "area": "潮汕", "subarea": "潮阳", "rules": ["FR_V_As_U", "FR_R_As_O", "FR_N_As_NG"]},
        {"id": "Lufeng", "area": "海陆丰", "subarea": "陆丰", "rules": ["FR_V_As_U", "FR_R_As_E"]}
    ]"#;

    const VOCABULARY: &str = r#"[
        {"initial": "ts", "final": "v", "tone": 1, "sp_nasal": "ESN_NONE"},
        {"initial": "ts", "final": "u", "tone": 1, "sp_nasal": "ESN_NONE"},
        {"initial": "ts", "final": "r", "tone": 6},
        {"initial": "h", "final": "o", "tone": 2, "sp_nasal": "ESN_NASALIZED"}
    ]"#;

    #[test]
    fn loads_and_applies_accents() {
        let accents = load_accents(ACCENTS).unwrap();
        assert_eq!(accents.len(), 3);
        assert!(accents[0].is_identity());

        let tsr = Pronunciation::new("ts", "r", 6);
        assert_eq!(fuzz(&tsr, &accents[1]).rhyme, "o");
        assert_eq!(fuzz(&tsr, &accents[2]).rhyme, "e");
    }

    #[test]
    fn unknown_rule_fails_the_load() {
        let json = r#"[{"id": "Broken", "rules": ["FR_V_As_U", "FR_Not_A_Rule"]}]"#;
        assert!(matches!(load_accents(json), Err(FuzzyError::UnknownRule(id)) if id == "FR_Not_A_Rule"));
    }

    #[test]
    fn finds_accents_by_id() {
        let accents = load_accents(ACCENTS).unwrap();

        assert_eq!(find_accent(&accents, "Lufeng").unwrap().subarea, "陆丰");
        assert!(matches!(find_accent(&accents, "Chaoyng"), Err(FuzzyError::UnknownAccent(id)) if id == "Chaoyng"));
        assert!(matches!(find_accent(&[], "Dummy"), Err(FuzzyError::UnknownAccent(_))));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(load_accents("{"), Err(FuzzyError::Json(_))));
        assert!(matches!(load_vocabulary(r#"[{"initial": "h"}]"#), Err(FuzzyError::Json(_))));
    }

    #[test]
    fn vocabulary_feeds_a_fuzzer() {
        let vocab = load_vocabulary(VOCABULARY).unwrap();
        assert_eq!(vocab[3].sp_nasal, SpecialNasalization::Nasalized);
        assert_eq!(vocab[2].sp_nasal, SpecialNasalization::None);

        let chaoyang = load_accents(ACCENTS).unwrap().swap_remove(1);
        let fuzzer = Fuzzer::new(chaoyang);
        fuzzer.register_vocabulary(&vocab);

        assert_eq!(fuzzer.reverse_lookup("tsu1"), vec![vocab[0].clone(), vocab[1].clone()]);
        assert_eq!(fuzzer.apply(&vocab[2]).canonical_key(), "tso6");

        let out = serde_json::to_value(fuzzer.apply(&vocab[3])).unwrap();
        assert_eq!(out["sp_nasal"], "ESN_NASALIZED");
        assert_eq!(out["final"], "o");
    }
}
