//! Active filter state
//!
//! A [`SelectionSet`] records which filter codes are currently active per
//! category, plus the optional free-text server-name filter. It is the
//! single source of truth a query is built from: the UI layer resolves
//! widget identity (flags, prompt picks) to codes once, and everything
//! downstream operates on codes only.
//!
//! A selection holds no reference to the catalog it was built against;
//! mutation validates codes against the catalog passed in, and the query
//! builder re-validates on its own, so an externally constructed selection
//! cannot smuggle unknown codes into a query.

mod error;

pub use error::{Result, SelectionError};

use std::collections::{HashMap, HashSet};

use crate::catalog::{Catalog, CategoryId};

/// Per-category set of active filter codes plus the name filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    active: HashMap<CategoryId, HashSet<String>>,
    name_filter: Option<String>,
}

impl SelectionSet {
    /// Create an empty selection: no codes active, no name filter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection pre-populated with the Battlelog defaults
    #[must_use]
    pub fn with_defaults(catalog: &Catalog) -> Self {
        let mut selection = Self::new();
        selection.set_default(catalog);
        selection
    }

    /// Reset to the default state, regardless of prior contents
    ///
    /// Defaults mirror the remote service's landing state: every expansion
    /// is owned, the first preset is active, every other category is
    /// unconstrained, and the name filter is cleared.
    pub fn set_default(&mut self, catalog: &Catalog) {
        self.clear_all();
        self.name_filter = None;

        let expansions = catalog.category(CategoryId::Expansions);
        let codes = self.active.entry(CategoryId::Expansions).or_default();
        for option in expansions.options() {
            codes.insert(option.code.clone());
        }

        let presets = catalog.category(CategoryId::Presets);
        if let Some(first) = presets.options().first() {
            self.active
                .entry(CategoryId::Presets)
                .or_default()
                .insert(first.code.clone());
        }
    }

    /// Deactivate every code in every category
    ///
    /// The name filter is untouched; only [`SelectionSet::set_default`]
    /// clears it.
    pub fn clear_all(&mut self) {
        self.active.clear();
    }

    /// Flip membership of `code` in `category`'s active set
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InvalidCode` if `code` is not a member of
    /// that category's mapping; the selection is left unchanged.
    pub fn toggle(&mut self, catalog: &Catalog, category: CategoryId, code: &str) -> Result<()> {
        if !catalog.category(category).contains_code(code) {
            return Err(SelectionError::InvalidCode {
                category,
                code: code.to_string(),
            });
        }

        let codes = self.active.entry(category).or_default();
        let removed = codes.remove(code);
        if !removed {
            codes.insert(code.to_string());
        }
        // Drop empty entries so toggling on and off restores equality
        if removed && self.active.get(&category).is_some_and(HashSet::is_empty) {
            self.active.remove(&category);
        }
        Ok(())
    }

    /// Whether `code` is currently active in `category`
    #[must_use]
    pub fn is_active(&self, category: CategoryId, code: &str) -> bool {
        self.active
            .get(&category)
            .is_some_and(|codes| codes.contains(code))
    }

    /// Number of active codes in `category`
    #[must_use]
    pub fn active_count(&self, category: CategoryId) -> usize {
        self.active.get(&category).map_or(0, HashSet::len)
    }

    /// Whether no code is active anywhere and no name filter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name_filter.is_none() && self.active.values().all(HashSet::is_empty)
    }

    /// Set the free-text server-name filter
    ///
    /// The text is trimmed; empty after trimming means "no filter".
    pub fn set_name_filter(&mut self, text: &str) {
        let trimmed = text.trim();
        self.name_filter = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// The trimmed name filter, if one is set
    #[must_use]
    pub fn name_filter(&self) -> Option<&str> {
        self.name_filter.as_deref()
    }

    /// Check every active code against the catalog
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InvalidCode` for the first code that is
    /// absent from its category's mapping.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        for (&category, codes) in &self.active {
            let mapping = catalog.category(category);
            for code in codes {
                if !mapping.contains_code(code) {
                    return Err(SelectionError::InvalidCode {
                        category,
                        code: code.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::battlelog()
    }

    #[test]
    fn test_new_selection_is_empty() {
        let selection = SelectionSet::new();
        assert!(selection.is_empty());
        assert_eq!(selection.name_filter(), None);
    }

    #[test]
    fn test_set_default_activates_documented_defaults() {
        let catalog = catalog();
        let mut selection = SelectionSet::new();

        // Dirty the state first; defaults must win regardless
        selection
            .toggle(&catalog, CategoryId::Maps, "MP_Subway")
            .unwrap();
        selection.set_name_filter("metro only");
        selection.set_default(&catalog);

        for option in catalog.category(CategoryId::Expansions).options() {
            assert!(selection.is_active(CategoryId::Expansions, &option.code));
        }
        assert!(selection.is_active(CategoryId::Presets, "1"));
        assert_eq!(selection.active_count(CategoryId::Presets), 1);
        for id in [
            CategoryId::Maps,
            CategoryId::Modes,
            CategoryId::GameSize,
            CategoryId::Slots,
        ] {
            assert_eq!(selection.active_count(id), 0);
        }
        assert_eq!(selection.name_filter(), None);
    }

    #[test]
    fn test_set_default_is_idempotent() {
        let catalog = catalog();
        let mut once = SelectionSet::new();
        once.set_default(&catalog);
        let mut twice = once.clone();
        twice.set_default(&catalog);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clear_all_empties_every_category() {
        let catalog = catalog();
        let mut selection = SelectionSet::with_defaults(&catalog);
        selection
            .toggle(&catalog, CategoryId::Modes, "1")
            .unwrap();

        selection.clear_all();
        for id in CategoryId::ALL {
            assert_eq!(selection.active_count(id), 0);
        }
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let catalog = catalog();
        let mut selection = SelectionSet::new();
        let original = selection.clone();

        selection
            .toggle(&catalog, CategoryId::Maps, "MP_007")
            .unwrap();
        assert!(selection.is_active(CategoryId::Maps, "MP_007"));

        selection
            .toggle(&catalog, CategoryId::Maps, "MP_007")
            .unwrap();
        assert!(!selection.is_active(CategoryId::Maps, "MP_007"));
        assert_eq!(selection, original);
    }

    #[test]
    fn test_toggle_unknown_code_fails_and_leaves_state_unchanged() {
        let catalog = catalog();
        let mut selection = SelectionSet::with_defaults(&catalog);
        let before = selection.clone();

        let result = selection.toggle(&catalog, CategoryId::Maps, "MP_999");
        assert_eq!(
            result,
            Err(SelectionError::InvalidCode {
                category: CategoryId::Maps,
                code: "MP_999".to_string(),
            })
        );
        assert_eq!(selection, before);
    }

    #[test]
    fn test_name_filter_is_trimmed() {
        let mut selection = SelectionSet::new();
        selection.set_name_filter("  metro 24/7  ");
        assert_eq!(selection.name_filter(), Some("metro 24/7"));

        selection.set_name_filter("   ");
        assert_eq!(selection.name_filter(), None);
    }

    #[test]
    fn test_validate_catches_foreign_codes() {
        let catalog = catalog();
        let mut selection = SelectionSet::new();
        // Simulate an externally constructed selection drifting from the
        // catalog: toggle against one catalog, validate against another.
        selection
            .toggle(&catalog, CategoryId::Modes, "131072")
            .unwrap();
        assert!(selection.validate(&catalog).is_ok());

        let trimmed = Catalog::from_toml(
            r#"
            [[category]]
            id = "maps"
            [[category.option]]
            code = "MP_001"
            label = "Grand Bazaar"

            [[category]]
            id = "modes"
            [[category.option]]
            code = "1"
            label = "Conquest"

            [[category]]
            id = "gamesize"
            [[category.option]]
            code = "64"
            label = "64 players"

            [[category]]
            id = "slots"
            [[category.option]]
            code = "2"
            label = "1-5 open"

            [[category]]
            id = "presets"
            [[category.option]]
            code = "1"
            label = "Normal"

            [[category]]
            id = "expansions"
            [[category.option]]
            code = "1"
            label = "Battlefield 3"
        "#,
        )
        .unwrap();

        assert_eq!(
            selection.validate(&trimmed),
            Err(SelectionError::InvalidCode {
                category: CategoryId::Modes,
                code: "131072".to_string(),
            })
        );
    }
}
