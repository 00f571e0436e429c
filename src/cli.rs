//! Command-line interface parsing for Stargaze
//!
//! This module handles parsing of CLI arguments using clap, including the
//! startup section, rover photo query parameters, and an API key override.

use clap::Parser;
use thiserror::Error;

use crate::app::Section;
use crate::data::Rover;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified section name is not recognized
    #[error("Invalid section: '{0}'. Valid sections: picture, rovers, asteroids, favorites")]
    InvalidSection(String),
    /// The specified rover name is not recognized
    #[error("Invalid rover: '{0}'. Valid rovers: curiosity, opportunity, spirit")]
    InvalidRover(String),
}

/// Stargaze - Browse NASA's picture of the day, Mars rover photos, and asteroids
#[derive(Parser, Debug)]
#[command(name = "stargaze")]
#[command(about = "NASA picture of the day, Mars rover photos, and near-Earth asteroids")]
#[command(version)]
pub struct Cli {
    /// Section to open at startup
    ///
    /// Examples:
    ///   stargaze                        # Open on the picture of the day
    ///   stargaze --section asteroids    # Open on the asteroid feed
    ///   stargaze --rover spirit         # Open on the rover gallery
    ///
    /// Valid sections: picture, rovers, asteroids, favorites
    #[arg(long, value_name = "SECTION")]
    pub section: Option<String>,

    /// Rover whose photos the rover section queries
    ///
    /// Implies --section rovers unless a section is given explicitly.
    /// Valid rovers: curiosity, opportunity, spirit
    #[arg(long, value_name = "ROVER")]
    pub rover: Option<String>,

    /// Sol (Martian day) the rover photo query starts from
    ///
    /// Implies --section rovers unless a section is given explicitly.
    /// Values past the rover's mission cap surface as an in-app message.
    #[arg(long, value_name = "SOL")]
    pub sol: Option<u32>,

    /// NASA API key, overriding the NASA_API_KEY environment variable
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Section to show first
    pub section: Section,
    /// Rover the photo query starts on
    pub rover: Rover,
    /// Sol to pre-fill the query with (if specified)
    pub sol: Option<u32>,
    /// API key override (if specified)
    pub api_key: Option<String>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            section: Section::Apod,
            rover: Rover::Curiosity,
            sol: None,
            api_key: None,
        }
    }
}

/// Parses a section string argument into a Section enum.
///
/// # Arguments
/// * `s` - The section string from CLI
///
/// # Returns
/// * `Ok(Section)` if the string matches a valid section
/// * `Err(CliError::InvalidSection)` if the string doesn't match
pub fn parse_section_arg(s: &str) -> Result<Section, CliError> {
    Section::from_name(s).ok_or_else(|| CliError::InvalidSection(s.to_string()))
}

/// Parses a rover string argument into a Rover enum.
///
/// # Arguments
/// * `s` - The rover string from CLI
///
/// # Returns
/// * `Ok(Rover)` if the string matches a valid rover
/// * `Err(CliError::InvalidRover)` if the string doesn't match
pub fn parse_rover_arg(s: &str) -> Result<Rover, CliError> {
    Rover::from_name(s).ok_or_else(|| CliError::InvalidRover(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if an invalid section or rover was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let mut config = StartupConfig::default();

        if let Some(section_str) = &cli.section {
            config.section = parse_section_arg(section_str)?;
        } else if cli.rover.is_some() || cli.sol.is_some() {
            // Rover query flags without a section open the rover gallery
            config.section = Section::Rovers;
        }

        if let Some(rover_str) = &cli.rover {
            config.rover = parse_rover_arg(rover_str)?;
        }

        config.sol = cli.sol;
        config.api_key = cli.api_key.clone();
        Ok(config)
    }
}
