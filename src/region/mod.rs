//! Region and country resolution
//!
//! The remote API filters by location using lower-case ISO country codes;
//! the UI works with title-cased country display names grouped into
//! geographic regions. This module owns the dictionary between the two and
//! the resolver that crosses it in both directions: enumerating the labels
//! of a region group for display, and resolving selected labels back to
//! the codes a query needs.
//!
//! Resolution is case-insensitive on the code side and exact on the
//! rendered title-cased display name. A label that matches no code is a
//! hard error, as is a label two codes render to: the dictionary owner
//! must fix the collision rather than have the resolver pick one.

mod defaults;
mod error;

pub use error::{RegionError, Result};

use heck::ToTitleCase;

/// One country: an ISO code and its canonical (upper-case) name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    code: String,
    name: String,
}

impl Country {
    /// Create a new country entry
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// The ISO code as stored
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The title-cased display label
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.to_title_case()
    }
}

/// A geographic region group: an id, a display label, and its countries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionGroup {
    id: String,
    label: String,
    countries: Vec<Country>,
}

impl RegionGroup {
    /// Create a new region group
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, countries: Vec<Country>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            countries,
        }
    }

    /// Stable id used to address the group (e.g. "NAm")
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label (e.g. "North America")
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Countries in dictionary order
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }
}

/// Fixed country-code→name dictionary, grouped by geographic region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDictionary {
    regions: Vec<RegionGroup>,
}

impl CountryDictionary {
    /// The built-in Battlelog grouping
    #[must_use]
    pub fn battlelog() -> Self {
        defaults::dictionary()
    }

    /// Build a dictionary, validating code uniqueness across all groups
    ///
    /// # Errors
    ///
    /// Returns `RegionError::DuplicateCode` if two countries share a code
    /// (case-insensitively), in any group.
    pub fn new(regions: Vec<RegionGroup>) -> Result<Self> {
        let mut seen: Vec<String> = Vec::new();
        for region in &regions {
            for country in region.countries() {
                let lowered = country.code().to_lowercase();
                if seen.contains(&lowered) {
                    return Err(RegionError::DuplicateCode(country.code().to_string()));
                }
                seen.push(lowered);
            }
        }
        Ok(Self { regions })
    }

    /// Construct without validation; callers guarantee code uniqueness
    pub(crate) fn from_parts(regions: Vec<RegionGroup>) -> Self {
        Self { regions }
    }

    /// Region groups in display order
    #[must_use]
    pub fn regions(&self) -> &[RegionGroup] {
        &self.regions
    }

    /// Look up a region group by id, case-insensitively
    #[must_use]
    pub fn region(&self, id: &str) -> Option<&RegionGroup> {
        self.regions.iter().find(|r| r.id.eq_ignore_ascii_case(id))
    }

    fn countries(&self) -> impl Iterator<Item = &Country> {
        self.regions.iter().flat_map(|r| r.countries.iter())
    }
}

/// Resolves country display labels against a dictionary
#[derive(Debug, Clone, Copy)]
pub struct RegionResolver<'a> {
    dict: &'a CountryDictionary,
}

impl<'a> RegionResolver<'a> {
    /// Create a resolver over `dict`
    #[must_use]
    pub const fn new(dict: &'a CountryDictionary) -> Self {
        Self { dict }
    }

    /// Title-cased display labels of every country in a region group
    ///
    /// The returned iterator is lazy and finite; calling this method again
    /// restarts the enumeration. Never mutates state.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::UnknownRegion` if `region_id` names no group.
    pub fn labels_for_region(
        &self,
        region_id: &str,
    ) -> Result<impl Iterator<Item = String> + 'a> {
        let region = self
            .dict
            .region(region_id)
            .ok_or_else(|| RegionError::UnknownRegion(region_id.to_string()))?;
        Ok(region.countries().iter().map(Country::display_name))
    }

    /// Resolve display labels to lower-cased country codes, in input order
    ///
    /// Each label must match exactly one country's rendered display name
    /// (case-insensitively).
    ///
    /// # Errors
    ///
    /// Returns `RegionError::UnknownLabel` for a label no code renders to,
    /// or `RegionError::AmbiguousLabel` when more than one code does.
    pub fn codes_for_labels<I, S>(&self, labels: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut codes = Vec::new();
        for label in labels {
            let label = label.as_ref();
            let matches: Vec<&Country> = self
                .dict
                .countries()
                .filter(|c| c.display_name().eq_ignore_ascii_case(label))
                .collect();
            match matches.as_slice() {
                [] => return Err(RegionError::UnknownLabel(label.to_string())),
                [country] => codes.push(country.code().to_lowercase()),
                many => {
                    return Err(RegionError::AmbiguousLabel {
                        label: label.to_string(),
                        codes: many.iter().map(|c| c.code().to_lowercase()).collect(),
                    });
                }
            }
        }
        Ok(codes)
    }
}

/// Ordered list of selected country display labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSelection {
    labels: Vec<String>,
}

impl RegionSelection {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection from labels, preserving order
    #[must_use]
    pub fn from_labels(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Append a label, keeping insertion order and skipping duplicates
    pub fn push(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.labels.iter().any(|l| l.eq_ignore_ascii_case(&label)) {
            self.labels.push(label);
        }
    }

    /// Selected labels in insertion order
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether no country is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Resolve the selection to lower-cased codes, in selection order
    ///
    /// # Errors
    ///
    /// Propagates [`RegionResolver::codes_for_labels`] errors.
    pub fn resolve(&self, resolver: &RegionResolver<'_>) -> Result<Vec<String>> {
        resolver.codes_for_labels(&self.labels)
    }

    /// Human-readable summary for the display collaborator
    ///
    /// `"Region: None"` when empty, otherwise
    /// `"Regions: <comma-joined labels>"`.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.labels.is_empty() {
            "Region: None".to_string()
        } else {
            format!("Regions: {}", self.labels.join(", "))
        }
    }
}
