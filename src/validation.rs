//! Sol input validation for Mars rover photo queries
//!
//! This module checks the user's sol (Martian day) input against each
//! rover's mission length before any request is built, so an out-of-range
//! query never reaches the network.

use thiserror::Error;

/// Highest sol with photos for the Curiosity rover.
const CURIOSITY_MAX_SOL: u32 = 4100;

/// Highest sol with photos for the Opportunity rover.
const OPPORTUNITY_MAX_SOL: u32 = 5111;

/// Highest sol with photos for the Spirit rover.
const SPIRIT_MAX_SOL: u32 = 2208;

/// Cap applied when the rover name is not recognized.
const DEFAULT_MAX_SOL: u32 = 9999;

/// Errors produced when a sol input is rejected.
///
/// The `Display` strings are shown verbatim in the rover section, so they
/// are phrased for end users rather than for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolValidationError {
    #[error("Enter a valid number")]
    NotANumber,

    #[error("Enter a whole positive number")]
    NotWholePositive,

    #[error("Max sol for {rover} is {max}")]
    OutOfRange { rover: String, max: u32 },
}

/// Returns the highest queryable sol for the given rover name.
///
/// Unknown rover names get a generous default cap rather than an error so
/// new rovers keep working before their mission length is added here.
pub fn max_sol(rover: &str) -> u32 {
    match rover {
        "curiosity" => CURIOSITY_MAX_SOL,
        "opportunity" => OPPORTUNITY_MAX_SOL,
        "spirit" => SPIRIT_MAX_SOL,
        _ => DEFAULT_MAX_SOL,
    }
}

/// Validates a raw sol input string for the given rover.
///
/// The input is trimmed and coerced the way a loosely typed numeric field
/// behaves: an empty string counts as 0, and exponent notation like "1e3"
/// is accepted. Checks run in order, so a fractional out-of-range value
/// reports the fractional problem, not the range.
///
/// # Arguments
///
/// * `rover` - Lowercase rover name used to look up the sol cap
/// * `raw` - The unparsed text from the sol input field
///
/// # Returns
///
/// The validated sol on success, or the first failed rule.
///
/// # Example
///
/// ```
/// use stargaze::validation::validate_sol;
///
/// assert_eq!(validate_sol("curiosity", "1000"), Ok(1000));
/// assert!(validate_sol("spirit", "90000").is_err());
/// ```
pub fn validate_sol(rover: &str, raw: &str) -> Result<u32, SolValidationError> {
    let trimmed = raw.trim();

    // Empty input coerces to zero, matching lenient numeric fields
    let value: f64 = if trimmed.is_empty() {
        0.0
    } else {
        trimmed
            .parse()
            .map_err(|_| SolValidationError::NotANumber)?
    };

    if !value.is_finite() {
        return Err(SolValidationError::NotANumber);
    }

    if value < 0.0 || value.fract() != 0.0 {
        return Err(SolValidationError::NotWholePositive);
    }

    let max = max_sol(rover);
    if value > f64::from(max) {
        return Err(SolValidationError::OutOfRange {
            rover: rover.to_string(),
            max,
        });
    }

    Ok(value as u32)
}
