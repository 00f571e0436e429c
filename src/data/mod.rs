//! Core data models for the NASA viewer
//!
//! This module contains the data types used throughout the application for
//! representing the astronomy picture of the day, Mars rover photos, and
//! near-Earth object feeds, mirroring the field names of NASA's JSON
//! responses so they deserialize directly.

pub mod nasa;

pub use nasa::{NasaApiError, NasaClient};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::validation;

/// The Mars rovers with queryable photo archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rover {
    Curiosity,
    Opportunity,
    Spirit,
}

impl Rover {
    /// All rovers in selector order.
    pub fn all() -> [Rover; 3] {
        [Rover::Curiosity, Rover::Opportunity, Rover::Spirit]
    }

    /// Lowercase name as used in API paths and cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rover::Curiosity => "curiosity",
            Rover::Opportunity => "opportunity",
            Rover::Spirit => "spirit",
        }
    }

    /// Capitalized name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Rover::Curiosity => "Curiosity",
            Rover::Opportunity => "Opportunity",
            Rover::Spirit => "Spirit",
        }
    }

    /// The next rover in selector order, wrapping around.
    pub fn next(&self) -> Rover {
        match self {
            Rover::Curiosity => Rover::Opportunity,
            Rover::Opportunity => Rover::Spirit,
            Rover::Spirit => Rover::Curiosity,
        }
    }

    /// Highest sol with photos for this rover.
    pub fn max_sol(&self) -> u32 {
        validation::max_sol(self.as_str())
    }

    /// Looks up a rover by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Rover> {
        match name.to_lowercase().as_str() {
            "curiosity" => Some(Rover::Curiosity),
            "opportunity" => Some(Rover::Opportunity),
            "spirit" => Some(Rover::Spirit),
            _ => None,
        }
    }
}

/// One astronomy picture of the day entry.
///
/// `media_type` is "image" or "video"; video entries have no `hdurl` and
/// their `url` points at an embeddable player rather than an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apod {
    /// Date the entry was published (YYYY-MM-DD)
    pub date: String,
    /// Title of the picture
    pub title: String,
    /// Explanatory text written by an astronomer
    pub explanation: String,
    /// Either "image" or "video"
    pub media_type: String,
    /// URL of the media
    pub url: String,
    /// URL of the high-resolution image, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    /// Copyright holder, absent for public-domain entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl Apod {
    /// The best available media URL, preferring the high-resolution one.
    pub fn best_url(&self) -> &str {
        self.hdurl.as_deref().unwrap_or(&self.url)
    }
}

/// A single Mars rover photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarsPhoto {
    /// Unique photo identifier
    pub id: u64,
    /// Martian day the photo was taken
    pub sol: u32,
    /// Camera that took the photo
    pub camera: Camera,
    /// URL of the photo
    pub img_src: String,
    /// Earth date the photo was taken (YYYY-MM-DD)
    pub earth_date: String,
    /// Rover that took the photo
    pub rover: RoverInfo,
}

/// Camera metadata attached to a Mars photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Short camera code (e.g. "NAVCAM")
    pub name: String,
    /// Human-readable camera name
    pub full_name: String,
}

/// Rover metadata attached to a Mars photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoverInfo {
    /// Rover name as reported by the API
    pub name: String,
}

/// A near-Earth object feed, grouped by approach date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoFeed {
    /// Total number of objects across all dates
    pub element_count: u32,
    /// Objects keyed by approach date (YYYY-MM-DD)
    pub near_earth_objects: BTreeMap<String, Vec<NeoObject>>,
}

impl NeoFeed {
    /// The first date in the feed with its objects, if any.
    ///
    /// The viewer requests single-day feeds, so this is normally the only
    /// date present.
    pub fn first_date(&self) -> Option<(&str, &[NeoObject])> {
        self.near_earth_objects
            .iter()
            .next()
            .map(|(date, objects)| (date.as_str(), objects.as_slice()))
    }
}

/// One near-Earth object from the feed.
///
/// The distance and velocity figures arrive as strings on the wire and are
/// parsed only for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoObject {
    /// Unique object identifier
    pub id: String,
    /// Object designation (e.g. "(2024 AB)")
    pub name: String,
    /// Estimated size range
    pub estimated_diameter: EstimatedDiameter,
    /// Whether NASA classifies the object as potentially hazardous
    pub is_potentially_hazardous_asteroid: bool,
    /// Close approach events, usually one per feed entry
    pub close_approach_data: Vec<CloseApproach>,
}

impl NeoObject {
    /// Midpoint of the estimated diameter range, in meters.
    pub fn average_diameter_m(&self) -> f64 {
        let meters = &self.estimated_diameter.meters;
        (meters.estimated_diameter_min + meters.estimated_diameter_max) / 2.0
    }

    /// Miss distance of the first close approach, in kilometers.
    pub fn miss_distance_km(&self) -> Option<f64> {
        self.close_approach_data
            .first()?
            .miss_distance
            .kilometers
            .parse()
            .ok()
    }

    /// Relative velocity of the first close approach, in km/h.
    pub fn velocity_kmh(&self) -> Option<f64> {
        self.close_approach_data
            .first()?
            .relative_velocity
            .kilometers_per_hour
            .parse()
            .ok()
    }
}

/// Estimated diameter range of a near-Earth object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    /// Range expressed in meters
    pub meters: DiameterRange,
}

/// Lower and upper bounds of a diameter estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

/// One close approach event for a near-Earth object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    /// How far the object passes from Earth
    pub miss_distance: MissDistance,
    /// How fast the object is moving relative to Earth
    pub relative_velocity: RelativeVelocity,
}

/// Miss distance in the units the feed provides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissDistance {
    /// Distance in kilometers, as a decimal string
    pub kilometers: String,
}

/// Relative velocity in the units the feed provides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeVelocity {
    /// Speed in km/h, as a decimal string
    pub kilometers_per_hour: String,
}
