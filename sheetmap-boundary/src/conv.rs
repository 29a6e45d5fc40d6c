use super::*;
use sheetmap_entities as e;

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<e::geo::MapBbox> for MapBbox {
    fn from(bbox: e::geo::MapBbox) -> Self {
        Self {
            sw: bbox.south_west().into(),
            ne: bbox.north_east().into(),
        }
    }
}

impl From<e::place::ResolvedPlace> for Place {
    fn from(from: e::place::ResolvedPlace) -> Self {
        let e::place::ResolvedPlace {
            place_id,
            pos,
            formatted_address,
            names,
        } = from;
        let Coordinate { lat, lng } = pos.into();
        Self {
            place_id: place_id.into(),
            lat,
            lng,
            formatted_address,
            names,
        }
    }
}

impl From<Vec<e::place::ResolvedPlace>> for PlaceList {
    fn from(from: Vec<e::place::ResolvedPlace>) -> Self {
        let bbox = e::geo::MapBbox::enclosing(from.iter().map(|p| p.pos)).map(Into::into);
        let places = from.into_iter().map(Into::into).collect();
        Self { places, bbox }
    }
}
