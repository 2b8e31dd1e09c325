//! Error types.
//!
//! Sound shifts themselves never fail: a syllable that does not match a rule
//! passes through unchanged. Errors only come from the boundary, when an
//! identifier, a marker name or a serialized record cannot be understood.

/// Result type defaulting to [`FuzzyError`].
pub type Result<T, E = FuzzyError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum FuzzyError {
    /// A rule identifier that names no rule in the catalog.
    #[error("unknown fuzzy rule identifier '{0}'")]
    UnknownRule(String),

    /// A special nasalization marker that is neither a known name nor a known raw value.
    #[error("unknown special nasalization '{0}'")]
    UnknownNasalization(String),

    /// A syllable string that cannot be split into initial, final and tone.
    #[error("invalid syllable '{0}' (expected e.g. 'tsang5', '0ng5' or 'ho2*')")]
    InvalidSyllable(String),

    /// An accent id that none of the loaded accents carries.
    #[error("unknown accent '{0}'")]
    UnknownAccent(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
