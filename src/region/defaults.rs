//! Built-in country dictionary, grouped the way Battlelog groups them
//!
//! Country names are stored in their canonical upper-case form and
//! title-cased at display time.

use super::{Country, CountryDictionary, RegionGroup};

const NORTH_AMERICA: &[(&str, &str)] = &[
    ("US", "UNITED STATES"),
    ("CA", "CANADA"),
    ("MX", "MEXICO"),
];

const SOUTH_AMERICA: &[(&str, &str)] = &[
    ("AR", "ARGENTINA"),
    ("BR", "BRAZIL"),
    ("CL", "CHILE"),
    ("CO", "COLOMBIA"),
    ("PE", "PERU"),
    ("VE", "VENEZUELA"),
];

const EUROPE: &[(&str, &str)] = &[
    ("AT", "AUSTRIA"),
    ("BE", "BELGIUM"),
    ("CH", "SWITZERLAND"),
    ("CZ", "CZECH REPUBLIC"),
    ("DE", "GERMANY"),
    ("DK", "DENMARK"),
    ("ES", "SPAIN"),
    ("FI", "FINLAND"),
    ("FR", "FRANCE"),
    ("GB", "UNITED KINGDOM"),
    ("IE", "IRELAND"),
    ("IT", "ITALY"),
    ("NL", "NETHERLANDS"),
    ("NO", "NORWAY"),
    ("PL", "POLAND"),
    ("PT", "PORTUGAL"),
    ("RU", "RUSSIAN FEDERATION"),
    ("SE", "SWEDEN"),
    ("TR", "TURKEY"),
    ("UA", "UKRAINE"),
];

const ASIA: &[(&str, &str)] = &[
    ("AE", "UNITED ARAB EMIRATES"),
    ("CN", "CHINA"),
    ("HK", "HONG KONG"),
    ("ID", "INDONESIA"),
    ("IL", "ISRAEL"),
    ("IN", "INDIA"),
    ("JP", "JAPAN"),
    ("KR", "SOUTH KOREA"),
    ("MY", "MALAYSIA"),
    ("PH", "PHILIPPINES"),
    ("SA", "SAUDI ARABIA"),
    ("SG", "SINGAPORE"),
    ("TH", "THAILAND"),
    ("TW", "TAIWAN"),
];

const OCEANIA: &[(&str, &str)] = &[
    ("AU", "AUSTRALIA"),
    ("NZ", "NEW ZEALAND"),
];

const AFRICA: &[(&str, &str)] = &[
    ("EG", "EGYPT"),
    ("MA", "MOROCCO"),
    ("NG", "NIGERIA"),
    ("ZA", "SOUTH AFRICA"),
];

fn group(id: &str, label: &str, entries: &[(&str, &str)]) -> RegionGroup {
    let countries = entries
        .iter()
        .map(|&(code, name)| Country::new(code, name))
        .collect();
    RegionGroup::new(id, label, countries)
}

/// The built-in region groups in display order
pub(super) fn regions() -> Vec<RegionGroup> {
    vec![
        group("NAm", "North America", NORTH_AMERICA),
        group("SAm", "South America", SOUTH_AMERICA),
        group("EU", "Europe", EUROPE),
        group("Asia", "Asia", ASIA),
        group("OC", "Oceania", OCEANIA),
        group("Afr", "Africa", AFRICA),
    ]
}

/// The built-in dictionary
pub(super) fn dictionary() -> CountryDictionary {
    CountryDictionary::from_parts(regions())
}
