use anyhow::{anyhow, Result};
use reqwest::{blocking::Client, Url};
use serde::Deserialize;
use sheetmap_core::gateways::rows::{RawRow, RowSourceGateway};
use sheetmap_entities::reference::SheetId;
use std::time::Duration;

use crate::cells::raw_rows_from_cells;

pub const DEFAULT_API_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

pub const DEFAULT_RANGE: &str = "A:C";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads the rows of a spreadsheet through the Google Sheets API.
#[derive(Debug, Clone)]
pub struct GoogleSheets {
    client: Client,
    api_key: String,
    api_base_url: String,
    range: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl GoogleSheets {
    pub fn try_new(api_key: String, api_base_url: String, range: String) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            api_base_url,
            range,
        })
    }

    fn values_url(&self, sheet_id: &SheetId) -> Result<Url> {
        let mut url = Url::parse(&self.api_base_url)?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Invalid API base URL: {}", self.api_base_url))?
            .pop_if_empty()
            .extend([sheet_id.as_str(), "values", self.range.as_str()]);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

impl RowSourceGateway for GoogleSheets {
    fn fetch_rows(&self, sheet_id: &SheetId) -> Result<Vec<RawRow>> {
        let url = self.values_url(sheet_id)?;
        log::debug!("Fetching rows of sheet {sheet_id}");
        let value_range: ValueRange = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json()?;
        log::debug!(
            "Fetched {} rows of sheet {sheet_id}",
            value_range.values.len()
        );
        Ok(raw_rows_from_cells(value_range.values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_id() -> SheetId {
        "https://docs.google.com/spreadsheets/d/abc-123_XYZ/edit"
            .parse::<sheetmap_entities::reference::DatasetReference>()
            .unwrap()
            .sheet_id()
            .clone()
    }

    #[test]
    fn build_values_url() {
        let gw = GoogleSheets::try_new(
            "secret".into(),
            DEFAULT_API_BASE_URL.into(),
            DEFAULT_RANGE.into(),
        )
        .unwrap();
        assert_eq!(
            gw.values_url(&sheet_id()).unwrap().as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc-123_XYZ/values/A:C?key=secret"
        );
    }

    #[test]
    fn build_values_url_with_trailing_slash() {
        let gw = GoogleSheets::try_new(
            "secret".into(),
            "http://localhost:8080/sheets/".into(),
            "Sheet1!A:C".into(),
        )
        .unwrap();
        assert_eq!(
            gw.values_url(&sheet_id()).unwrap().as_str(),
            "http://localhost:8080/sheets/abc-123_XYZ/values/Sheet1!A:C?key=secret"
        );
    }

    #[test]
    fn parse_value_range() {
        let json = r#"{
          "range": "Sheet1!A1:C3",
          "majorDimension": "ROWS",
          "values": [
            ["Name", "Street", "City"],
            ["Alice", "221B Baker St", "London"],
            ["Bob", "221B Baker St", "London"]
          ]
        }"#;
        let value_range: ValueRange = serde_json::from_str(json).unwrap();
        let rows = raw_rows_from_cells(value_range.values);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["name"], "Bob");
        assert_eq!(rows[1]["address"], "221b baker st london");
    }

    #[test]
    fn parse_empty_value_range() {
        let json = r#"{ "range": "Sheet1!A1:C1", "majorDimension": "ROWS" }"#;
        let value_range: ValueRange = serde_json::from_str(json).unwrap();
        assert!(value_range.values.is_empty());
    }
}
