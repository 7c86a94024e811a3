//! Blbrowse - a filter-driven Battlelog server browser
//!
//! This library translates filter selections (maps, game modes, game size,
//! free slots, presets, expansions, server name, regions) into the query
//! URL the Battlelog server list endpoint expects. The translation core is
//! pure and I/O-free; the CLI layer around it resolves user input, loads
//! configuration, and hands the finished URL to the system browser.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod query;
pub mod region;
pub mod selection;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Selection error
    #[error("Selection error: {0}")]
    SelectionError(#[from] selection::SelectionError),
    /// Region resolution error
    #[error("Region error: {0}")]
    RegionError(#[from] region::RegionError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Base URL could not be parsed
    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
    /// Interactive prompt failure
    #[error("Prompt error: {0}")]
    PromptError(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
