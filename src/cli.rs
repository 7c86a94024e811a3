//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for blbrowse using the
//! `clap` crate. Filter selections arrive as repeatable flags taking either
//! a display label or a raw code; the resolution to codes happens once, in
//! the command layer, so the core only ever sees codes.
//!
//! # Commands
//!
//! - **browse**: build the server-list URL and open it in the browser (default)
//! - **url**: build the URL and print it, for scripting
//! - **options**: list every filter category and its options
//! - **regions**: list region groups and their countries
//! - **config**: manage persisted settings

use clap::{Parser, Subcommand};

use crate::catalog::CategoryId;

/// Filter selection flags shared by `browse` and `url`
///
/// Each flag toggles the named option starting from the Battlelog default
/// state (all expansions owned, first preset active), or from an empty
/// selection with `--clear`.
#[derive(Parser, Debug, Clone, Default)]
pub struct SelectOpts {
    /// Maps to toggle (label or code, can specify multiple: -m Metro -m "Caspian Border")
    #[arg(short = 'm', long = "map", value_name = "MAP", num_args = 0..)]
    pub maps: Vec<String>,

    /// Game modes to toggle (label or code)
    #[arg(short = 'g', long = "mode", value_name = "MODE", num_args = 0..)]
    pub modes: Vec<String>,

    /// Game sizes to toggle (label or code)
    #[arg(long = "size", value_name = "SIZE", num_args = 0..)]
    pub sizes: Vec<String>,

    /// Free-slot brackets to toggle (label or code)
    #[arg(short = 's', long = "slots", value_name = "SLOTS", num_args = 0..)]
    pub slots: Vec<String>,

    /// Ruleset presets to toggle (label or code)
    #[arg(short = 'p', long = "preset", value_name = "PRESET", num_args = 0..)]
    pub presets: Vec<String>,

    /// Base game / expansions to toggle (label or code)
    #[arg(short = 'x', long = "expansion", value_name = "EXPANSION", num_args = 0..)]
    pub expansions: Vec<String>,

    /// Server name filter (substring)
    #[arg(short = 'n', long = "name", value_name = "TEXT")]
    pub name: Option<String>,

    /// Countries to filter by (display name, e.g. "Germany")
    #[arg(short = 'c', long = "country", value_name = "COUNTRY", num_args = 0..)]
    pub countries: Vec<String>,

    /// Start from an empty selection instead of the Battlelog defaults
    #[arg(long = "clear")]
    pub clear: bool,
}

impl SelectOpts {
    /// Flag inputs paired with the category they address, in category order
    pub fn entries(&self) -> impl Iterator<Item = (CategoryId, &str)> {
        let per_category = [
            (CategoryId::Maps, &self.maps),
            (CategoryId::Modes, &self.modes),
            (CategoryId::GameSize, &self.sizes),
            (CategoryId::Slots, &self.slots),
            (CategoryId::Presets, &self.presets),
            (CategoryId::Expansions, &self.expansions),
        ];
        per_category
            .into_iter()
            .flat_map(|(id, inputs)| inputs.iter().map(move |input| (id, input.as_str())))
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g. open-browser=false)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g. base-url)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "blbrowse")]
#[command(about = "A Battlelog server browser", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the server-list URL and open it in the browser (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        select: SelectOpts,

        /// Pick filters through interactive prompts instead of flags
        #[arg(short = 'i', long = "interactive")]
        interactive: bool,

        /// Print the URL without launching a browser
        #[arg(long = "no-open")]
        no_open: bool,
    },

    /// Build the server-list URL and print it (never opens a browser)
    #[command(visible_alias = "u")]
    Url {
        #[command(flatten)]
        select: SelectOpts,
    },

    /// List every filter category and its options
    #[command(visible_alias = "o")]
    Options,

    /// List region groups and their countries
    #[command(visible_alias = "r")]
    Regions {
        /// Only show one region group (by id, e.g. EU)
        #[arg(value_name = "REGION")]
        region: Option<String>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command; an interactive browse when none is given
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            select: SelectOpts::default(),
            interactive: true,
            no_open: false,
        })
    }
}
