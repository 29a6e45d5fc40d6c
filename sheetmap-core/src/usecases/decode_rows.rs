use super::prelude::*;
use crate::gateways::rows::RawRow;
use serde::Deserialize;

#[derive(Deserialize)]
struct RowFields {
    name: String,
    address: String,
}

/// Decode all raw rows or none.
///
/// Unknown fields are ignored, but every row must be an object
/// with non-blank `name` and `address` strings.
pub fn decode_rows(raw_rows: Vec<RawRow>) -> Result<Vec<Row>> {
    raw_rows
        .into_iter()
        .enumerate()
        .map(|(index, raw_row)| {
            decode_row(raw_row).map_err(|reason| Error::MalformedRow { index, reason })
        })
        .collect()
}

fn decode_row(raw_row: RawRow) -> std::result::Result<Row, String> {
    if !raw_row.is_object() {
        return Err("not an object".to_string());
    }
    let RowFields { name, address } =
        serde_json::from_value(raw_row).map_err(|err| err.to_string())?;
    Row::try_new(name, address).map_err(|err| err.to_string())
}
