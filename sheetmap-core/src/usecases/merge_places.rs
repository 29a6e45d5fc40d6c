use super::prelude::*;
use std::collections::HashMap;

/// Merge places with the same id.
///
/// The names are concatenated in encounter order and the places keep
/// the order of their first occurrence. Position and formatted address
/// are taken from the last occurrence.
pub fn merge_places<I>(places: I) -> Vec<ResolvedPlace>
where
    I: IntoIterator<Item = ResolvedPlace>,
{
    let mut merged: Vec<ResolvedPlace> = Vec::new();
    let mut place_index: HashMap<PlaceId, usize> = HashMap::new();
    for place in places {
        if let Some(&index) = place_index.get(&place.place_id) {
            let ResolvedPlace {
                pos,
                formatted_address,
                names,
                ..
            } = place;
            let existing = &mut merged[index];
            existing.pos = pos;
            existing.formatted_address = formatted_address;
            existing.names.extend(names);
        } else {
            place_index.insert(place.place_id.clone(), merged.len());
            merged.push(place);
        }
    }
    merged
}
