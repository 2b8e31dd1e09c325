/// Labial onsets.
pub const LABIALS: &[&str] = &["p", "ph", "m", "b"];

/// Null onset marker.
pub const NULL_INITIAL: &str = "0";

/// Returns true for `p`, `ph`, `m` and `b`.
pub fn is_labial(initial: &str) -> bool {
    LABIALS.contains(&initial)
}

/// Returns true when the rhyme closes on `-n`. The nasal-vowel finals
/// (`-nn`) do not count.
pub fn has_n_coda(rhyme: &str) -> bool {
    rhyme.ends_with('n') && !rhyme.ends_with("nn")
}

/// Returns true when the rhyme closes on `-n` or `-ng`.
pub fn has_n_or_ng_coda(rhyme: &str) -> bool {
    has_n_coda(rhyme) || rhyme.ends_with("ng")
}

/// Replace every occurrence of `from` in `field`.
pub fn substitute(field: &mut String, from: &str, to: &str) {
    *field = field.replace(from, to);
}

/// Overwrite `field` with `value`.
pub fn set(field: &mut String, value: &str) {
    value.clone_into(field);
}
