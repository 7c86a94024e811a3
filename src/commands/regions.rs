//! Regions command - list region groups and their countries

use crate::{
    BrowseError,
    output,
    region::{CountryDictionary, RegionGroup, RegionResolver},
};

type Result<T> = std::result::Result<T, BrowseError>;

/// Execute the regions command
///
/// With no argument, lists every region group; with one, only that group
/// (matched case-insensitively by id).
pub fn execute(dict: &CountryDictionary, region: Option<&str>, quiet: bool) -> Result<()> {
    let resolver = RegionResolver::new(dict);

    match region {
        Some(id) => {
            let group = dict
                .region(id)
                .ok_or_else(|| crate::region::RegionError::UnknownRegion(id.to_string()))?;
            print_group(&resolver, group, quiet)?;
        }
        None => {
            for group in dict.regions() {
                print_group(&resolver, group, quiet)?;
            }
        }
    }
    Ok(())
}

fn print_group(resolver: &RegionResolver<'_>, group: &RegionGroup, quiet: bool) -> Result<()> {
    let header = format!("{} ({})", group.label(), group.id());
    println!("{}", output::section_header(&header, quiet));
    for label in resolver.labels_for_region(group.id())? {
        println!("{}", output::country_line(&label, quiet));
    }
    if !quiet {
        println!();
    }
    Ok(())
}
