//! Browse command - build the server-list URL and hand it to the browser
//!
//! Two entry styles: flag-driven (each flag toggles one option, starting
//! from the Battlelog defaults) and interactive (checkbox-style prompts per
//! category and per region group). Both converge on the same pure core:
//! SelectionSet + RegionSelection → query parameters → URL.

use dialoguer::{Input, MultiSelect, theme::ColorfulTheme};
use url::Url;

use crate::{
    BrowseError,
    catalog::Catalog,
    cli::SelectOpts,
    config::AppConfig,
    output,
    query::build_query,
    region::{CountryDictionary, RegionResolver, RegionSelection},
    selection::SelectionSet,
};

type Result<T> = std::result::Result<T, BrowseError>;

/// Execute the browse command
pub fn execute(
    catalog: &Catalog,
    dict: &CountryDictionary,
    config: &AppConfig,
    select: &SelectOpts,
    interactive: bool,
    no_open: bool,
    quiet: bool,
) -> Result<()> {
    let (selection, regions) = if interactive {
        prompt_selections(catalog, dict)?
    } else {
        selections_from_flags(catalog, dict, select)?
    };

    let resolver = RegionResolver::new(dict);
    let country_codes = regions.resolve(&resolver)?;
    let query = build_query(catalog, &selection, &country_codes)?;
    let url = query.to_url(&config.base_url)?;

    if !quiet {
        println!("{}", regions.summary());
    }
    println!("{}", output::url_line(url.as_str(), quiet));

    if config.open_browser && !no_open {
        open::that(url.as_str())?;
    }
    Ok(())
}

/// Resolve selection flags and build the final URL
///
/// Shared with the `url` command, which prints instead of launching.
///
/// # Errors
///
/// Returns `BrowseError` if a flag value matches no option, a country
/// cannot be resolved, or the base URL is invalid.
pub fn build_url(
    catalog: &Catalog,
    dict: &CountryDictionary,
    base_url: &str,
    select: &SelectOpts,
) -> Result<Url> {
    let (selection, regions) = selections_from_flags(catalog, dict, select)?;
    let resolver = RegionResolver::new(dict);
    let country_codes = regions.resolve(&resolver)?;
    let query = build_query(catalog, &selection, &country_codes)?;
    Ok(query.to_url(base_url)?)
}

/// Turn selection flags into a SelectionSet and RegionSelection
///
/// Flags carry labels or codes; each is resolved to its code here, once,
/// and toggled starting from the default (or cleared) state.
fn selections_from_flags(
    catalog: &Catalog,
    dict: &CountryDictionary,
    select: &SelectOpts,
) -> Result<(SelectionSet, RegionSelection)> {
    let mut selection = if select.clear {
        SelectionSet::new()
    } else {
        SelectionSet::with_defaults(catalog)
    };

    for (id, input) in select.entries() {
        let category = catalog.category(id);
        let code = category
            .resolve(input)
            .ok_or_else(|| {
                BrowseError::InvalidInput(format!(
                    "No {} option matches '{input}'. See 'blbrowse options'",
                    category.id()
                ))
            })?
            .to_string();
        selection.toggle(catalog, id, &code)?;
    }

    if let Some(name) = &select.name {
        selection.set_name_filter(name);
    }

    let mut regions = RegionSelection::new();
    for input in &select.countries {
        regions.push(country_label(dict, input)?);
    }

    Ok((selection, regions))
}

/// Resolve one `--country` value (display name or ISO code) to its label
fn country_label(dict: &CountryDictionary, input: &str) -> Result<String> {
    for region in dict.regions() {
        for country in region.countries() {
            if country.code().eq_ignore_ascii_case(input)
                || country.display_name().eq_ignore_ascii_case(input)
            {
                return Ok(country.display_name());
            }
        }
    }
    Err(BrowseError::InvalidInput(format!(
        "No country matches '{input}'. See 'blbrowse regions'"
    )))
}

/// Interactive selection: one checkbox prompt per category, then the name
/// filter, then one prompt per region group
fn prompt_selections(
    catalog: &Catalog,
    dict: &CountryDictionary,
) -> Result<(SelectionSet, RegionSelection)> {
    let mut selection = SelectionSet::with_defaults(catalog);

    for category in catalog.categories() {
        let labels: Vec<&str> = category.options().iter().map(|o| o.label.as_str()).collect();
        let checked: Vec<bool> = category
            .options()
            .iter()
            .map(|o| selection.is_active(category.id(), &o.code))
            .collect();
        let picks = multi_select(category.id().title(), &labels, &checked)?;

        // Reconcile picks with current state through toggle
        for (index, option) in category.options().iter().enumerate() {
            let wanted = picks.contains(&index);
            if wanted != selection.is_active(category.id(), &option.code) {
                selection.toggle(catalog, category.id(), &option.code)?;
            }
        }
    }

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Server name filter")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| BrowseError::PromptError(format!("Failed to read input: {e}")))?;
    selection.set_name_filter(&name);

    let resolver = RegionResolver::new(dict);
    let mut regions = RegionSelection::new();
    for group in dict.regions() {
        let labels: Vec<String> = resolver.labels_for_region(group.id())?.collect();
        let items: Vec<&str> = labels.iter().map(String::as_str).collect();
        let checked = vec![false; items.len()];
        for index in multi_select(group.label(), &items, &checked)? {
            regions.push(labels[index].clone());
        }
    }

    Ok((selection, regions))
}

/// Shared checkbox-style prompt used by both the filter and region pickers
fn multi_select(title: &str, items: &[&str], checked: &[bool]) -> Result<Vec<usize>> {
    MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(title)
        .items(items)
        .defaults(checked)
        .interact()
        .map_err(|e| BrowseError::PromptError(format!("Failed to read selection: {e}")))
}
