use thiserror::Error;

use super::CategoryId;

/// Errors raised while building or loading a filter catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error in a catalog file
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A required category is absent
    #[error("Category '{0}' is missing from the catalog")]
    MissingCategory(CategoryId),

    /// The same category is declared twice
    #[error("Category '{0}' is declared more than once")]
    DuplicateCategory(CategoryId),

    /// A category declares no options
    #[error("Category '{0}' has no options")]
    EmptyCategory(CategoryId),

    /// Two options in one category share a code
    #[error("Duplicate code '{code}' in category '{category}'")]
    DuplicateCode { category: CategoryId, code: String },

    /// Two options in one category share a display label
    #[error("Duplicate label '{label}' in category '{category}'")]
    DuplicateLabel { category: CategoryId, label: String },
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, CatalogError>;
