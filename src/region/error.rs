use thiserror::Error;

/// Errors raised while resolving region and country selections
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    /// The region group id is not in the dictionary
    #[error("Unknown region '{0}'")]
    UnknownRegion(String),

    /// A country label matched no code. This indicates a mapping/display
    /// mismatch and must never be silently dropped.
    #[error("No country matches label '{0}'")]
    UnknownLabel(String),

    /// A country label matched more than one code; the dictionary renders
    /// two codes to the same display text
    #[error("Label '{label}' is ambiguous, candidate codes: {codes:?}")]
    AmbiguousLabel { label: String, codes: Vec<String> },

    /// Two countries in the dictionary share a code
    #[error("Duplicate country code '{0}' in dictionary")]
    DuplicateCode(String),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, RegionError>;
