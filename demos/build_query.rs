//! Demo showing the selection-to-URL pipeline
//!
//! This example walks the whole core without touching the network: it
//! builds a selection from the default state, toggles a few filters,
//! resolves a pair of countries, and prints the resulting query URL.

use blbrowse::catalog::{Catalog, CategoryId};
use blbrowse::query::build_query;
use blbrowse::region::{CountryDictionary, RegionResolver, RegionSelection};
use blbrowse::selection::SelectionSet;

fn main() {
    println!("=== Blbrowse Query Demo ===\n");

    let catalog = Catalog::battlelog();
    let dictionary = CountryDictionary::battlelog();

    let mut selection = SelectionSet::with_defaults(&catalog);
    selection
        .toggle(&catalog, CategoryId::Maps, "MP_Subway")
        .expect("built-in code");
    selection
        .toggle(&catalog, CategoryId::Modes, "1")
        .expect("built-in code");
    selection.set_name_filter("24/7");

    println!("Active filters:");
    for category in catalog.categories() {
        for option in category.options() {
            if selection.is_active(category.id(), &option.code) {
                println!("  {} / {}", category.id().title(), option.label);
            }
        }
    }

    let mut regions = RegionSelection::new();
    regions.push("United States");
    regions.push("Canada");
    println!("\n{}", regions.summary());

    let resolver = RegionResolver::new(&dictionary);
    let codes = regions.resolve(&resolver).expect("built-in labels");

    let query = build_query(&catalog, &selection, &codes).expect("validated selection");
    let url = query
        .to_url("http://battlelog.battlefield.com/bf3/servers/")
        .expect("valid base URL");

    println!("\nQuery parameters:");
    for (name, value) in query.pairs() {
        println!("  {name} = {value}");
    }
    println!("\nURL:\n{url}");
}
