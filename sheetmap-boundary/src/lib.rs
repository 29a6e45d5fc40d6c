use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
pub struct MapBbox {
    pub sw: Coordinate,
    pub ne: Coordinate,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
pub struct Place {
    pub place_id          : String,
    pub lat               : f64,
    pub lng               : f64,
    pub formatted_address : String,
    pub names             : Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct PlaceList {
    pub places: Vec<Place>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<MapBbox>,
}

/// Flat row of a CSV export; the names are joined.
#[derive(Serialize, Deserialize)]
pub struct PlaceRecord {
    pub place_id: String,
    pub lat: f64,
    pub lng: f64,
    pub formatted_address: String,
    pub names: String,
}

pub const NAME_SEPARATOR: &str = "; ";

impl From<Place> for PlaceRecord {
    fn from(from: Place) -> Self {
        let Place {
            place_id,
            lat,
            lng,
            formatted_address,
            names,
        } = from;
        Self {
            place_id,
            lat,
            lng,
            formatted_address,
            names: names.join(NAME_SEPARATOR),
        }
    }
}
