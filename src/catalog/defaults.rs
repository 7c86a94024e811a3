//! Built-in Battlelog filter dictionaries
//!
//! Codes are the stable keys the Battlelog server list endpoint expects;
//! labels are what the UI shows. Declaration order is the order the remote
//! API documents and the order every query is emitted in.

use super::{Category, CategoryId, FilterOption};

const MAPS: &[(&str, &str)] = &[
    ("MP_001", "Grand Bazaar"),
    ("MP_003", "Teheran Highway"),
    ("MP_007", "Caspian Border"),
    ("MP_011", "Seine Crossing"),
    ("MP_012", "Operation Firestorm"),
    ("MP_013", "Damavand Peak"),
    ("MP_017", "Noshahr Canals"),
    ("MP_018", "Kharg Island"),
    ("MP_Subway", "Operation Metro"),
    ("XP1_001", "Strike at Karkand"),
    ("XP1_002", "Gulf of Oman"),
    ("XP1_003", "Sharqi Peninsula"),
    ("XP1_004", "Wake Island"),
    ("XP2_Factory", "Scrapmetal"),
    ("XP2_Office", "Operation 925"),
    ("XP2_Palace", "Donya Fortress"),
    ("XP2_Skybar", "Ziba Tower"),
    ("XP3_Alborz", "Alborz Mountains"),
    ("XP3_Desert", "Bandar Desert"),
    ("XP3_Shield", "Armored Shield"),
    ("XP3_Valley", "Death Valley"),
    ("XP4_Quake", "Epicenter"),
    ("XP4_FD", "Markaz Monolith"),
    ("XP4_Parl", "Azadi Palace"),
    ("XP4_Rubble", "Talah Market"),
    ("XP5_001", "Operation Riverside"),
    ("XP5_002", "Nebandan Flats"),
    ("XP5_003", "Kiasar Railroad"),
    ("XP5_004", "Sabalan Pipeline"),
];

const MODES: &[(&str, &str)] = &[
    ("1", "Conquest"),
    ("2", "Rush"),
    ("4", "Squad Rush"),
    ("8", "Squad Deathmatch"),
    ("32", "Team Deathmatch"),
    ("64", "Conquest Large"),
    ("128", "Conquest Assault Large"),
    ("256", "Conquest Assault"),
    ("512", "Gun Master"),
    ("1024", "Conquest Domination"),
    ("2048", "TDM Close Quarters"),
    ("4096", "Tank Superiority"),
    ("8192", "Capture the Flag"),
    ("16384", "Air Superiority"),
    ("131072", "Scavenger"),
];

const GAME_SIZE: &[(&str, &str)] = &[
    ("2", "2 players"),
    ("4", "4 players"),
    ("8", "8 players"),
    ("16", "16 players"),
    ("32", "32 players"),
    ("64", "64 players"),
];

const SLOTS: &[(&str, &str)] = &[
    ("1", "Not empty"),
    ("2", "1-5 open"),
    ("4", "6-10 open"),
    ("8", "10+ open"),
    ("16", "Empty"),
];

// First entry is the Battlelog default preset.
const PRESETS: &[(&str, &str)] = &[
    ("1", "Normal"),
    ("2", "Hardcore"),
    ("4", "Infantry Only"),
];

const EXPANSIONS: &[(&str, &str)] = &[
    ("1", "Battlefield 3"),
    ("512", "Back to Karkand"),
    ("1024", "Close Quarters"),
    ("2048", "Armored Kill"),
    ("4096", "Aftermath"),
    ("8192", "End Game"),
];

fn category(id: CategoryId, entries: &[(&str, &str)]) -> Category {
    let options = entries
        .iter()
        .map(|&(code, label)| FilterOption::new(code, label))
        .collect();
    Category::from_parts(id, options)
}

/// The six built-in Battlelog categories in canonical order
pub(super) fn categories() -> Vec<Category> {
    vec![
        category(CategoryId::Maps, MAPS),
        category(CategoryId::Modes, MODES),
        category(CategoryId::GameSize, GAME_SIZE),
        category(CategoryId::Slots, SLOTS),
        category(CategoryId::Presets, PRESETS),
        category(CategoryId::Expansions, EXPANSIONS),
    ]
}
