use serde_json::{Map, Value};
use sheetmap_core::gateways::rows::RawRow;

// Column layout of a sheet: name, street, city.
const NAME_COLUMN: usize = 0;
const STREET_COLUMN: usize = 1;
const CITY_COLUMN: usize = 2;

/// Turn the cells of a sheet into raw rows, skipping the header row.
///
/// The address is made of the lowercased street and city. Fields
/// whose cells are missing are left out so that decoding fails
/// later on instead of silently producing incomplete addresses.
pub fn raw_rows_from_cells<R, C>(rows: R) -> Vec<RawRow>
where
    R: IntoIterator<Item = Vec<C>>,
    C: AsRef<str>,
{
    rows.into_iter()
        .skip(1)
        .map(|cells| {
            let mut row = Map::new();
            if let Some(name) = cells.get(NAME_COLUMN) {
                row.insert("name".into(), Value::String(name.as_ref().to_owned()));
            }
            if let (Some(street), Some(city)) = (cells.get(STREET_COLUMN), cells.get(CITY_COLUMN)) {
                let address = format!(
                    "{} {}",
                    street.as_ref().trim().to_lowercase(),
                    city.as_ref().trim().to_lowercase()
                );
                row.insert("address".into(), Value::String(address));
            }
            Value::Object(row)
        })
        .collect()
}
