//! NASA open API client
//!
//! This module provides a single client for the three NASA endpoints the
//! viewer consumes: the astronomy picture of the day, Mars rover photos,
//! and the NeoWs near-Earth-object feed. Every request carries the
//! `api_key` query parameter and is attempted exactly once; retry policy
//! belongs to the caller.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{Apod, MarsPhoto, NeoFeed};

/// Base URL for NASA's public API
const NASA_BASE_URL: &str = "https://api.nasa.gov";

/// Errors that can occur when fetching NASA data
#[derive(Debug, Error)]
pub enum NasaApiError {
    /// HTTP transport failed or the server returned an error status
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Client for NASA's public API
///
/// Cheap to clone; the underlying HTTP client is shared, so fetch tasks
/// spawned off the UI thread each take their own clone.
#[derive(Debug, Clone)]
pub struct NasaClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NasaClient {
    /// Create a new NasaClient with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: NASA_BASE_URL.to_string(),
        }
    }

    /// Create a NasaClient pointed at a different base URL
    ///
    /// Used when the environment overrides the API host, and by tests that
    /// need requests to fail fast against an unroutable address.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the astronomy picture of the day
    ///
    /// # Arguments
    /// * `date` - The entry date, or `None` for the server's current day
    ///
    /// # Returns
    /// * `Ok(Apod)` - The entry for the requested date
    /// * `Err(NasaApiError)` - If the request or parsing fails
    pub async fn fetch_apod(&self, date: Option<NaiveDate>) -> Result<Apod, NasaApiError> {
        let url = format!("{}/planetary/apod", self.base_url);

        let mut params: Vec<(&str, String)> = vec![("api_key", self.api_key.clone())];
        if let Some(date) = date {
            params.push(("date", date.format("%Y-%m-%d").to_string()));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;

        parse_apod(&text)
    }

    /// Fetch photos taken by a rover on the given sol
    ///
    /// # Arguments
    /// * `rover` - Lowercase rover name used in the endpoint path
    /// * `sol` - Martian day to query
    ///
    /// # Returns
    /// * `Ok(Vec<MarsPhoto>)` - The photos, empty when none were taken
    /// * `Err(NasaApiError)` - If the request or parsing fails
    pub async fn fetch_mars_photos(
        &self,
        rover: &str,
        sol: u32,
    ) -> Result<Vec<MarsPhoto>, NasaApiError> {
        let url = format!("{}/mars-photos/api/v1/rovers/{}/photos", self.base_url, rover);
        let sol_param = sol.to_string();
        let params = [
            ("api_key", self.api_key.as_str()),
            ("sol", sol_param.as_str()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;

        parse_mars_photos(&text)
    }

    /// Fetch the near-Earth-object feed for a date range
    ///
    /// The viewer queries single days (`start == end`); the range form is
    /// what the endpoint natively speaks.
    pub async fn fetch_neo_feed(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<NeoFeed, NasaApiError> {
        let url = format!("{}/neo/rest/v1/feed", self.base_url);
        let params = [
            ("api_key", self.api_key.clone()),
            ("start_date", start.format("%Y-%m-%d").to_string()),
            ("end_date", end.format("%Y-%m-%d").to_string()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;

        parse_neo_feed(&text)
    }
}

/// Envelope around the Mars photos array
///
/// A sol with no photos can come back without the field at all, which
/// `default` maps to an empty list.
#[derive(Debug, Deserialize)]
struct MarsPhotosResponse {
    #[serde(default)]
    photos: Vec<MarsPhoto>,
}

/// Parse an APOD response body
fn parse_apod(text: &str) -> Result<Apod, NasaApiError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a Mars photos response body into the bare photo list
fn parse_mars_photos(text: &str) -> Result<Vec<MarsPhoto>, NasaApiError> {
    let response: MarsPhotosResponse = serde_json::from_str(text)?;
    Ok(response.photos)
}

/// Parse a NeoWs feed response body
fn parse_neo_feed(text: &str) -> Result<NeoFeed, NasaApiError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample valid APOD response
    const VALID_APOD: &str = r#"{
        "copyright": "Jane Astronomer",
        "date": "2024-07-15",
        "explanation": "A dusty stellar nursery glows in infrared light.",
        "hdurl": "https://apod.nasa.gov/apod/image/2407/nursery_hd.jpg",
        "media_type": "image",
        "service_version": "v1",
        "title": "Stellar Nursery",
        "url": "https://apod.nasa.gov/apod/image/2407/nursery.jpg"
    }"#;

    /// APOD video entry, which carries no hdurl or copyright
    const VIDEO_APOD: &str = r#"{
        "date": "2024-07-16",
        "explanation": "A timelapse of the aurora australis seen from orbit.",
        "media_type": "video",
        "service_version": "v1",
        "title": "Aurora from the Station",
        "url": "https://www.youtube.com/embed/aurora"
    }"#;

    /// Sample Mars photos response with extra fields the viewer ignores
    const VALID_MARS_PHOTOS: &str = r#"{
        "photos": [
            {
                "id": 102693,
                "sol": 1000,
                "camera": {
                    "id": 20,
                    "name": "FHAZ",
                    "rover_id": 5,
                    "full_name": "Front Hazard Avoidance Camera"
                },
                "img_src": "https://mars.jpl.nasa.gov/msl-raw-images/fhaz/102693.jpg",
                "earth_date": "2015-05-30",
                "rover": {
                    "id": 5,
                    "name": "Curiosity",
                    "landing_date": "2012-08-06",
                    "launch_date": "2011-11-26",
                    "status": "active"
                }
            },
            {
                "id": 102694,
                "sol": 1000,
                "camera": {
                    "id": 21,
                    "name": "RHAZ",
                    "rover_id": 5,
                    "full_name": "Rear Hazard Avoidance Camera"
                },
                "img_src": "https://mars.jpl.nasa.gov/msl-raw-images/rhaz/102694.jpg",
                "earth_date": "2015-05-30",
                "rover": {
                    "id": 5,
                    "name": "Curiosity",
                    "landing_date": "2012-08-06",
                    "launch_date": "2011-11-26",
                    "status": "active"
                }
            }
        ]
    }"#;

    /// Sample NeoWs feed for a single day
    const VALID_NEO_FEED: &str = r#"{
        "element_count": 2,
        "near_earth_objects": {
            "2024-07-15": [
                {
                    "id": "3542519",
                    "name": "(2010 PK9)",
                    "estimated_diameter": {
                        "kilometers": {
                            "estimated_diameter_min": 0.1,
                            "estimated_diameter_max": 0.3
                        },
                        "meters": {
                            "estimated_diameter_min": 110.8038233506,
                            "estimated_diameter_max": 247.7650126055
                        }
                    },
                    "is_potentially_hazardous_asteroid": true,
                    "close_approach_data": [
                        {
                            "close_approach_date": "2024-07-15",
                            "relative_velocity": {
                                "kilometers_per_second": "14.5",
                                "kilometers_per_hour": "52280.5812558172"
                            },
                            "miss_distance": {
                                "astronomical": "0.05",
                                "kilometers": "7480202.306581365"
                            }
                        }
                    ]
                },
                {
                    "id": "54339874",
                    "name": "(2023 GC2)",
                    "estimated_diameter": {
                        "meters": {
                            "estimated_diameter_min": 12.1,
                            "estimated_diameter_max": 27.1
                        }
                    },
                    "is_potentially_hazardous_asteroid": false,
                    "close_approach_data": [
                        {
                            "relative_velocity": {
                                "kilometers_per_hour": "32541.0"
                            },
                            "miss_distance": {
                                "kilometers": "1234567.89"
                            }
                        }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_valid_apod() {
        let apod = parse_apod(VALID_APOD).expect("Failed to parse valid APOD");

        assert_eq!(apod.date, "2024-07-15");
        assert_eq!(apod.title, "Stellar Nursery");
        assert_eq!(apod.media_type, "image");
        assert_eq!(apod.copyright.as_deref(), Some("Jane Astronomer"));
        assert_eq!(
            apod.best_url(),
            "https://apod.nasa.gov/apod/image/2407/nursery_hd.jpg"
        );
    }

    #[test]
    fn test_parse_video_apod_without_hdurl() {
        let apod = parse_apod(VIDEO_APOD).expect("Failed to parse video APOD");

        assert_eq!(apod.media_type, "video");
        assert!(apod.hdurl.is_none());
        assert!(apod.copyright.is_none());
        assert_eq!(apod.best_url(), "https://www.youtube.com/embed/aurora");
    }

    #[test]
    fn test_parse_mars_photos_extracts_list() {
        let photos =
            parse_mars_photos(VALID_MARS_PHOTOS).expect("Failed to parse Mars photos");

        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].id, 102693);
        assert_eq!(photos[0].sol, 1000);
        assert_eq!(photos[0].camera.name, "FHAZ");
        assert_eq!(photos[0].camera.full_name, "Front Hazard Avoidance Camera");
        assert_eq!(photos[0].earth_date, "2015-05-30");
        assert_eq!(photos[0].rover.name, "Curiosity");
        assert_eq!(photos[1].camera.name, "RHAZ");
    }

    #[test]
    fn test_parse_mars_photos_empty_array() {
        let photos = parse_mars_photos(r#"{"photos": []}"#).expect("Failed to parse");
        assert!(photos.is_empty());
    }

    #[test]
    fn test_parse_mars_photos_missing_field_reads_as_empty() {
        let photos = parse_mars_photos("{}").expect("Failed to parse");
        assert!(photos.is_empty(), "Missing photos field should mean no photos");
    }

    #[test]
    fn test_parse_valid_neo_feed() {
        let feed = parse_neo_feed(VALID_NEO_FEED).expect("Failed to parse NEO feed");

        assert_eq!(feed.element_count, 2);
        let (date, objects) = feed.first_date().expect("Feed should have a date");
        assert_eq!(date, "2024-07-15");
        assert_eq!(objects.len(), 2);

        let hazardous = &objects[0];
        assert_eq!(hazardous.id, "3542519");
        assert_eq!(hazardous.name, "(2010 PK9)");
        assert!(hazardous.is_potentially_hazardous_asteroid);
        assert!((hazardous.average_diameter_m() - 179.28441797805).abs() < 0.001);
        assert!((hazardous.miss_distance_km().unwrap() - 7480202.306581365).abs() < 0.001);
        assert!((hazardous.velocity_kmh().unwrap() - 52280.5812558172).abs() < 0.001);

        let small = &objects[1];
        assert!(!small.is_potentially_hazardous_asteroid);
        assert!((small.average_diameter_m() - 19.6).abs() < 0.001);
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(parse_apod("{ invalid json }").is_err());
        assert!(parse_mars_photos("{ invalid json }").is_err());
        assert!(parse_neo_feed("{ invalid json }").is_err());
    }

    #[test]
    fn test_parse_apod_missing_required_field() {
        // No url field
        let missing_url = r#"{
            "date": "2024-07-15",
            "explanation": "x",
            "media_type": "image",
            "title": "x"
        }"#;
        let result = parse_apod(missing_url);
        assert!(matches!(result, Err(NasaApiError::ParseError(_))));
    }

    #[test]
    fn test_client_uses_default_base_url() {
        let client = NasaClient::new("DEMO_KEY");
        assert_eq!(client.base_url, NASA_BASE_URL);
        assert_eq!(client.api_key, "DEMO_KEY");
    }

    #[test]
    fn test_client_with_base_url_override() {
        let client = NasaClient::new("key").with_base_url("http://127.0.0.1:9");
        assert_eq!(client.base_url, "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn test_fetch_against_unroutable_host_fails() {
        // Port 9 (discard) refuses connections immediately
        let client = NasaClient::new("key").with_base_url("http://127.0.0.1:9");

        let result = client.fetch_apod(None).await;
        assert!(matches!(result, Err(NasaApiError::RequestFailed(_))));
    }
}
