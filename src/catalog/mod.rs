//! Filter option dictionaries
//!
//! This module defines the fixed code↔label mappings the server browser
//! filters on: one [`Category`] per filter axis, bundled into a [`Catalog`].
//! A catalog is immutable configuration: it is built once at startup
//! (either the built-in Battlelog dictionary or a custom TOML file) and
//! passed by reference into the selection and query layers.
//!
//! Invariants enforced at construction time:
//! - every [`CategoryId`] appears exactly once
//! - codes within a category are unique
//! - labels within a category are unique (case-insensitively)

mod defaults;
mod error;

pub use error::{CatalogError, Result};

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One axis of server filtering, in canonical query order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    /// Map rotation filter
    Maps,
    /// Game mode filter
    Modes,
    /// Maximum player count filter
    GameSize,
    /// Free slot bracket filter
    Slots,
    /// Ruleset preset filter
    Presets,
    /// Base game / expansion ownership filter
    Expansions,
}

impl CategoryId {
    /// All categories in the order they are emitted into a query
    pub const ALL: [Self; 6] = [
        Self::Maps,
        Self::Modes,
        Self::GameSize,
        Self::Slots,
        Self::Presets,
        Self::Expansions,
    ];

    /// Query parameter name the remote API expects for this category
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::Maps => "maps",
            Self::Modes => "gamemodes",
            Self::GameSize => "gameSize",
            Self::Slots => "slots",
            Self::Presets => "gamepresets",
            Self::Expansions => "gameexpansions",
        }
    }

    /// Human-readable title for listings and prompts
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Maps => "Maps",
            Self::Modes => "Mode",
            Self::GameSize => "Game Size",
            Self::Slots => "Free Slots",
            Self::Presets => "Preset",
            Self::Expansions => "Game",
        }
    }

    /// Position of this category in [`CategoryId::ALL`]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Maps => 0,
            Self::Modes => 1,
            Self::GameSize => 2,
            Self::Slots => 3,
            Self::Presets => 4,
            Self::Expansions => 5,
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Maps => "maps",
            Self::Modes => "modes",
            Self::GameSize => "gamesize",
            Self::Slots => "slots",
            Self::Presets => "presets",
            Self::Expansions => "expansions",
        };
        write!(f, "{name}")
    }
}

/// One selectable filter option: a stable code and its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Stable key used in the remote query
    pub code: String,
    /// Human-readable text shown in the UI
    pub label: String,
}

impl FilterOption {
    /// Create a new option
    #[must_use]
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Ordered, immutable code↔label mapping for one filter axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    options: Vec<FilterOption>,
}

impl Category {
    /// Build a category, validating code and label uniqueness
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the category has no options, or if two
    /// options share a code or a (case-insensitive) label.
    pub fn new(id: CategoryId, options: Vec<FilterOption>) -> Result<Self> {
        if options.is_empty() {
            return Err(CatalogError::EmptyCategory(id));
        }

        for (i, option) in options.iter().enumerate() {
            for earlier in &options[..i] {
                if earlier.code == option.code {
                    return Err(CatalogError::DuplicateCode {
                        category: id,
                        code: option.code.clone(),
                    });
                }
                if earlier.label.eq_ignore_ascii_case(&option.label) {
                    return Err(CatalogError::DuplicateLabel {
                        category: id,
                        label: option.label.clone(),
                    });
                }
            }
        }

        Ok(Self { id, options })
    }

    /// Construct without validation; callers guarantee the invariants
    pub(crate) fn from_parts(id: CategoryId, options: Vec<FilterOption>) -> Self {
        Self { id, options }
    }

    /// The axis this category represents
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Options in declaration order
    #[must_use]
    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    /// Whether `code` is a member of this category's mapping
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.options.iter().any(|o| o.code == code)
    }

    /// Display label for `code`, if the code exists
    #[must_use]
    pub fn label_for_code(&self, code: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.code == code)
            .map(|o| o.label.as_str())
    }

    /// Code for a display label, matched case-insensitively
    #[must_use]
    pub fn code_for_label(&self, label: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.label.eq_ignore_ascii_case(label))
            .map(|o| o.code.as_str())
    }

    /// Resolve user input to a code, accepting either a label or a code
    ///
    /// Labels take precedence; both are matched case-insensitively. This is
    /// the single point where UI-facing text becomes an internal code, so
    /// downstream layers only ever see codes.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<&str> {
        self.code_for_label(input).or_else(|| {
            self.options
                .iter()
                .find(|o| o.code.eq_ignore_ascii_case(input))
                .map(|o| o.code.as_str())
        })
    }
}

/// The six filter categories in canonical order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

/// On-disk catalog layout (TOML)
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(rename = "category")]
    categories: Vec<CategoryFile>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CategoryFile {
    id: CategoryId,
    #[serde(rename = "option")]
    options: Vec<FilterOption>,
}

impl Catalog {
    /// The built-in Battlelog (Battlefield 3) dictionary
    #[must_use]
    pub fn battlelog() -> Self {
        Self {
            categories: defaults::categories(),
        }
    }

    /// Build a catalog from categories, validating completeness
    ///
    /// Categories may arrive in any order; they are stored in canonical
    /// order regardless.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a category is missing, duplicated, or
    /// fails its own validation.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut slots: [Option<Category>; 6] = [const { None }; 6];

        for category in categories {
            let slot = &mut slots[category.id().index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateCategory(category.id()));
            }
            *slot = Some(category);
        }

        let mut ordered = Vec::with_capacity(CategoryId::ALL.len());
        for (id, slot) in CategoryId::ALL.into_iter().zip(slots) {
            ordered.push(slot.ok_or(CatalogError::MissingCategory(id))?);
        }

        Ok(Self {
            categories: ordered,
        })
    }

    /// Load a custom catalog from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed, or if
    /// the parsed catalog violates the catalog invariants.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a catalog from TOML text
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on parse failure or invariant violation.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let categories = file
            .categories
            .into_iter()
            .map(|c| Category::new(c.id, c.options))
            .collect::<Result<Vec<_>>>()?;
        Self::new(categories)
    }

    /// All categories in canonical order
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The category for one axis
    #[must_use]
    pub fn category(&self, id: CategoryId) -> &Category {
        &self.categories[id.index()]
    }
}
