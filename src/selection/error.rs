use thiserror::Error;

use crate::catalog::CategoryId;

/// Errors raised while mutating or validating a selection
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// A referenced code does not exist in its category's mapping.
    /// This is a caller or configuration bug, not a runtime condition.
    #[error("Unknown code '{code}' for category '{category}'")]
    InvalidCode { category: CategoryId, code: String },
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, SelectionError>;
