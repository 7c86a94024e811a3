//! Url command - print the server-list URL for scripting

use super::browse;
use crate::{
    BrowseError, catalog::Catalog, cli::SelectOpts, region::CountryDictionary,
};

type Result<T> = std::result::Result<T, BrowseError>;

/// Execute the url command
///
/// Same flag handling as `browse`, but only ever prints the raw URL.
pub fn execute(
    catalog: &Catalog,
    dict: &CountryDictionary,
    base_url: &str,
    select: &SelectOpts,
) -> Result<()> {
    let url = browse::build_url(catalog, dict, base_url, select)?;
    println!("{url}");
    Ok(())
}
