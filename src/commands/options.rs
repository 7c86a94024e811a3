//! Options command - list every filter category and its options

use crate::{catalog::Catalog, output, selection::SelectionSet};

/// Execute the options command
///
/// Lists each category in query order with its options; options active in
/// the default state are marked.
pub fn execute(catalog: &Catalog, quiet: bool) {
    let defaults = SelectionSet::with_defaults(catalog);

    for category in catalog.categories() {
        println!("{}", output::section_header(category.id().title(), quiet));
        for option in category.options() {
            let active = defaults.is_active(category.id(), &option.code);
            println!(
                "{}",
                output::option_line(&option.label, &option.code, active, quiet)
            );
        }
        if !quiet {
            println!();
        }
    }
}
