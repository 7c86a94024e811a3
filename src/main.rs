//! Blbrowse CLI application entry point
//!
//! This is the main executable for the blbrowse server browser. It turns
//! filter selections into a Battlelog server-list URL and hands the URL to
//! the system browser.
//!
//! # Usage
//!
//! ```bash
//! # Interactive browse with checkbox prompts (default command)
//! blbrowse
//! blbrowse browse -i
//!
//! # Toggle filters from the default state and open the result
//! blbrowse browse -m "Operation Metro" -g Conquest
//!
//! # Start from an empty selection, filter by name and country
//! blbrowse browse --clear -n "24/7" -c Germany -c France
//!
//! # Print the URL for scripting, never open a browser
//! blbrowse url -m MP_007
//!
//! # Inspect the dictionaries
//! blbrowse options
//! blbrowse regions EU
//!
//! # Persist settings
//! blbrowse config set open-browser=false
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/blbrowse/config.toml` on Linux) and created with defaults
//! on first run. A custom filter catalog can be pointed at with
//! `blbrowse config set catalog=/path/to/catalog.toml`.

use blbrowse::{
    BrowseError,
    catalog::Catalog,
    cli::{Cli, Commands, ConfigCommands},
    commands,
    config::AppConfig,
    region::CountryDictionary,
};

type Result<T> = std::result::Result<T, BrowseError>;

/// Handle the config command - manage application settings
///
/// # Errors
///
/// Returns `BrowseError` if the configuration key is invalid, value
/// parsing fails, or configuration save fails.
fn handle_config_command(
    mut config: AppConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                BrowseError::InvalidInput(
                    "Invalid format. Use: blbrowse config set key=value".into(),
                )
            })?;
            let key = key.trim();
            let value = value.trim();

            config.set_value(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get_value(key)?);
        }
    }
    Ok(())
}

/// Main entry point for the blbrowse application
///
/// Loads configuration, parses command-line arguments, resolves the filter
/// catalog, and dispatches to the appropriate command handler.
///
/// # Errors
///
/// Returns `BrowseError` if configuration or catalog loading fails, or any
/// command handler returns an error.
fn main() -> Result<()> {
    let config = AppConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return handle_config_command(config, command, quiet);
    }

    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::battlelog(),
    };
    let dictionary = CountryDictionary::battlelog();

    match &command {
        Commands::Browse {
            select,
            interactive,
            no_open,
        } => {
            commands::browse(
                &catalog,
                &dictionary,
                &config,
                select,
                *interactive,
                *no_open,
                quiet,
            )?;
        }
        Commands::Url { select } => {
            commands::url(&catalog, &dictionary, &config.base_url, select)?;
        }
        Commands::Options => {
            commands::options(&catalog, quiet);
        }
        Commands::Regions { region } => {
            commands::regions(&dictionary, region.as_deref(), quiet)?;
        }
        // Handled before catalog resolution
        Commands::Config { .. } => {}
    }

    Ok(())
}
