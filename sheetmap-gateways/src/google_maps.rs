use anyhow::{bail, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use sheetmap_core::gateways::geocode::GeoCodingGateway;
use sheetmap_entities::{geo::MapPoint, place::GeocodedPlace};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Forward geocoding with the Google Maps Geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleMaps {
    client: Client,
    api_key: String,
    api_url: String,
}

impl GoogleMaps {
    pub fn try_new(api_key: String, api_url: String) -> Result<Self> {
        if api_key.is_empty() {
            log::warn!("No Google Maps API key configured");
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            api_url,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    place_id: String,
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl GeocodeResponse {
    fn into_places(self) -> Result<Vec<GeocodedPlace>> {
        let Self {
            status,
            results,
            error_message,
        } = self;
        match status.as_str() {
            STATUS_OK => results.into_iter().map(GeocodedPlace::try_from).collect(),
            STATUS_ZERO_RESULTS => Ok(vec![]),
            _ => match error_message {
                Some(msg) => bail!("Geocoding request failed with status {status}: {msg}"),
                None => bail!("Geocoding request failed with status {status}"),
            },
        }
    }
}

impl TryFrom<GeocodeResult> for GeocodedPlace {
    type Error = anyhow::Error;

    fn try_from(from: GeocodeResult) -> Result<Self> {
        let GeocodeResult {
            place_id,
            formatted_address,
            geometry: Geometry {
                location: LatLng { lat, lng },
            },
        } = from;
        let Some(pos) = MapPoint::try_from_lat_lng_deg(lat, lng) else {
            bail!("Invalid location of place {place_id}: {lat},{lng}");
        };
        Ok(GeocodedPlace {
            place_id: place_id.into(),
            pos,
            formatted_address,
        })
    }
}

impl GeoCodingGateway for GoogleMaps {
    fn resolve_address(&self, address: &str) -> Result<Vec<GeocodedPlace>> {
        let response: GeocodeResponse = self
            .client
            .get(&self.api_url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()?
            .error_for_status()?
            .json()?;
        let places = response.into_places()?;
        log::debug!("Found {} candidates for '{address}'", places.len());
        Ok(places)
    }
}
