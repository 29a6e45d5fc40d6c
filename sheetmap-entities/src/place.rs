use crate::geo::MapPoint;
use std::{borrow::Borrow, fmt};

/// Stable identifier of a physical place as issued by a geocoding service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlaceId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for PlaceId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<PlaceId> for String {
    fn from(from: PlaceId) -> Self {
        from.0
    }
}

impl AsRef<str> for PlaceId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for PlaceId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single candidate returned by a geocoding service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodedPlace {
    pub place_id: PlaceId,
    pub pos: MapPoint,
    pub formatted_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlace {
    pub place_id: PlaceId,
    pub pos: MapPoint,
    pub formatted_address: String,
    pub names: Vec<String>,
}

impl ResolvedPlace {
    pub fn new(place: GeocodedPlace, names: Vec<String>) -> Self {
        let GeocodedPlace {
            place_id,
            pos,
            formatted_address,
        } = place;
        Self {
            place_id,
            pos,
            formatted_address,
            names,
        }
    }
}
