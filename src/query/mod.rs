//! Query parameter construction
//!
//! Translates a [`SelectionSet`] (plus the catalog it is read against, and
//! any resolved country codes) into the ordered parameter map the Battlelog
//! server list endpoint expects. The translation is pure and deterministic:
//! parameters appear in a fixed order, and per-category values follow the
//! catalog's declaration order rather than selection insertion order, so an
//! unchanged selection always renders byte-identical parameters.

use indexmap::IndexMap;
use url::Url;

use crate::catalog::Catalog;
use crate::selection::{Result, SelectionSet};

/// Marker parameter the endpoint requires on every filtered request
pub const PARAM_FILTERED: &str = "filtered";
/// Single-valued server-name substring parameter
pub const PARAM_NAME: &str = "q";
/// Flag enabling location-based filtering
pub const PARAM_USE_LOCATION: &str = "useLocation";
/// Pipe-joined, lower-cased country code list
pub const PARAM_COUNTRY: &str = "country";

/// Value of one query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A single value, emitted as one `name=value` pair
    Single(String),
    /// Multiple values, emitted as repeated `name=value` pairs
    Many(Vec<String>),
}

/// Ordered mapping of query parameter name to value(s)
///
/// Derived from a selection, used once to build a request URL, then
/// discarded. Two queries built from identical inputs compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    params: IndexMap<String, ParamValue>,
}

impl Query {
    fn push_single(&mut self, name: &str, value: impl Into<String>) {
        self.params
            .insert(name.to_string(), ParamValue::Single(value.into()));
    }

    fn push_many(&mut self, name: &str, values: Vec<String>) {
        self.params.insert(name.to_string(), ParamValue::Many(values));
    }

    /// Value for `name`, if the parameter is present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    /// Whether the parameter is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the query holds no parameters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameters in emission order
    pub fn params(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Flattened `(name, value)` pairs in emission order
    ///
    /// Multi-valued parameters yield one pair per value.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().flat_map(|(name, value)| {
            let values: &[String] = match value {
                ParamValue::Single(v) => std::slice::from_ref(v),
                ParamValue::Many(vs) => vs.as_slice(),
            };
            values.iter().map(move |v| (name.as_str(), v.as_str()))
        })
    }

    /// Serialize the parameters onto a base URL
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if `base` is not a valid absolute URL.
    pub fn to_url(&self, base: &str) -> std::result::Result<Url, url::ParseError> {
        let mut url = Url::parse(base)?;
        {
            let mut query_pairs = url.query_pairs_mut();
            for (name, value) in self.pairs() {
                query_pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}

/// Build the query parameters for a selection
///
/// Emission order is fixed: `filtered=1`, then one multi-valued parameter
/// per non-empty category in catalog order, then the name filter, then the
/// location parameters when `country_codes` is non-empty. Categories with
/// no active code are omitted entirely; absence means "no constraint",
/// not "match nothing".
///
/// # Errors
///
/// Returns `SelectionError::InvalidCode` if the selection references a
/// code absent from its category's mapping. Unreachable for selections
/// mutated through [`SelectionSet::toggle`], but an externally constructed
/// selection is re-validated here.
pub fn build_query(
    catalog: &Catalog,
    selection: &SelectionSet,
    country_codes: &[String],
) -> Result<Query> {
    selection.validate(catalog)?;

    let mut query = Query::default();
    query.push_single(PARAM_FILTERED, "1");

    for category in catalog.categories() {
        let codes: Vec<String> = category
            .options()
            .iter()
            .filter(|option| selection.is_active(category.id(), &option.code))
            .map(|option| option.code.clone())
            .collect();
        if !codes.is_empty() {
            query.push_many(category.id().param(), codes);
        }
    }

    if let Some(name) = selection.name_filter() {
        query.push_single(PARAM_NAME, name);
    }

    if !country_codes.is_empty() {
        query.push_single(PARAM_USE_LOCATION, "1");
        query.push_single(PARAM_COUNTRY, country_codes.join("|"));
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CategoryId};
    use crate::selection::{SelectionError, SelectionSet};

    fn catalog() -> Catalog {
        Catalog::battlelog()
    }

    #[test]
    fn test_empty_selection_emits_only_filtered() {
        let catalog = catalog();
        let selection = SelectionSet::new();
        let query = build_query(&catalog, &selection, &[]).unwrap();

        assert_eq!(query.len(), 1);
        assert_eq!(
            query.get(PARAM_FILTERED),
            Some(&ParamValue::Single("1".to_string()))
        );
    }

    #[test]
    fn test_cleared_selection_omits_every_category_parameter() {
        let catalog = catalog();
        let mut selection = SelectionSet::with_defaults(&catalog);
        selection.clear_all();
        let query = build_query(&catalog, &selection, &[]).unwrap();

        for id in CategoryId::ALL {
            assert!(!query.contains(id.param()));
        }
    }

    #[test]
    fn test_metro_conquest_example() {
        let catalog = catalog();
        let mut selection = SelectionSet::new();
        let metro = catalog
            .category(CategoryId::Maps)
            .code_for_label("Operation Metro")
            .unwrap()
            .to_string();
        let conquest = catalog
            .category(CategoryId::Modes)
            .code_for_label("Conquest")
            .unwrap()
            .to_string();
        selection
            .toggle(&catalog, CategoryId::Maps, &metro)
            .unwrap();
        selection
            .toggle(&catalog, CategoryId::Modes, &conquest)
            .unwrap();

        let query = build_query(&catalog, &selection, &[]).unwrap();
        assert_eq!(query.get("maps"), Some(&ParamValue::Many(vec![metro])));
        assert_eq!(
            query.get("gamemodes"),
            Some(&ParamValue::Many(vec![conquest]))
        );
        for param in ["gameSize", "slots", "gamepresets", "gameexpansions"] {
            assert!(!query.contains(param));
        }
    }

    #[test]
    fn test_values_follow_catalog_declaration_order() {
        let catalog = catalog();
        let mut selection = SelectionSet::new();
        // Toggle in reverse declaration order; the query must not care
        for code in ["MP_017", "MP_007", "MP_001"] {
            selection
                .toggle(&catalog, CategoryId::Maps, code)
                .unwrap();
        }

        let query = build_query(&catalog, &selection, &[]).unwrap();
        assert_eq!(
            query.get("maps"),
            Some(&ParamValue::Many(vec![
                "MP_001".to_string(),
                "MP_007".to_string(),
                "MP_017".to_string(),
            ]))
        );
    }

    #[test]
    fn test_building_twice_is_deterministic() {
        let catalog = catalog();
        let mut selection = SelectionSet::with_defaults(&catalog);
        selection.set_name_filter("metro");
        let countries = vec!["us".to_string(), "ca".to_string()];

        let first = build_query(&catalog, &selection, &countries).unwrap();
        let second = build_query(&catalog, &selection, &countries).unwrap();
        assert_eq!(first, second);

        let first_pairs: Vec<_> = first.pairs().collect();
        let second_pairs: Vec<_> = second.pairs().collect();
        assert_eq!(first_pairs, second_pairs);
    }

    #[test]
    fn test_region_parameters_only_with_countries() {
        let catalog = catalog();
        let selection = SelectionSet::new();

        let without = build_query(&catalog, &selection, &[]).unwrap();
        assert!(!without.contains(PARAM_USE_LOCATION));
        assert!(!without.contains(PARAM_COUNTRY));

        let countries = vec!["us".to_string(), "ca".to_string()];
        let with = build_query(&catalog, &selection, &countries).unwrap();
        assert_eq!(
            with.get(PARAM_USE_LOCATION),
            Some(&ParamValue::Single("1".to_string()))
        );
        assert_eq!(
            with.get(PARAM_COUNTRY),
            Some(&ParamValue::Single("us|ca".to_string()))
        );
    }

    #[test]
    fn test_name_filter_is_single_valued() {
        let catalog = catalog();
        let mut selection = SelectionSet::new();
        selection.set_name_filter("  24/7 metro  ");

        let query = build_query(&catalog, &selection, &[]).unwrap();
        assert_eq!(
            query.get(PARAM_NAME),
            Some(&ParamValue::Single("24/7 metro".to_string()))
        );
    }

    #[test]
    fn test_parameter_emission_order_is_fixed() {
        let catalog = catalog();
        let mut selection = SelectionSet::with_defaults(&catalog);
        selection.set_name_filter("metro");
        let countries = vec!["de".to_string()];

        let query = build_query(&catalog, &selection, &countries).unwrap();
        let names: Vec<&str> = query.params().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                PARAM_FILTERED,
                "gamepresets",
                "gameexpansions",
                PARAM_NAME,
                PARAM_USE_LOCATION,
                PARAM_COUNTRY,
            ]
        );
    }

    #[test]
    fn test_foreign_selection_is_revalidated() {
        let catalog = catalog();
        let big = {
            let mut selection = SelectionSet::new();
            selection
                .toggle(&catalog, CategoryId::Maps, "XP5_004")
                .unwrap();
            selection
        };

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

        let result = build_query(&trimmed, &big, &[]);
        assert_eq!(
            result,
            Err(SelectionError::InvalidCode {
                category: CategoryId::Maps,
                code: "XP5_004".to_string(),
            })
        );
    }

    #[test]
    fn test_to_url_emits_repeated_pairs_and_escapes() {
        let catalog = catalog();
        let mut selection = SelectionSet::new();
        selection
            .toggle(&catalog, CategoryId::Maps, "MP_001")
            .unwrap();
        selection
            .toggle(&catalog, CategoryId::Maps, "MP_007")
            .unwrap();
        selection.set_name_filter("24/7 metro");

        let query = build_query(&catalog, &selection, &[]).unwrap();
        let url = query
            .to_url("http://battlelog.battlefield.com/bf3/servers/")
            .unwrap();
        let rendered = url.as_str();

        assert!(rendered.contains("filtered=1"));
        assert!(rendered.contains("maps=MP_001"));
        assert!(rendered.contains("maps=MP_007"));
        // Space and slash in the name filter must be escaped
        assert!(rendered.contains("q=24%2F7+metro") || rendered.contains("q=24%2F7%20metro"));
    }
}
