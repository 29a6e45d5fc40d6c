use sheetmap_entities::reference::SheetId;

/// An untyped row as delivered by a row source,
/// expected to be an object with `name` and `address`.
pub type RawRow = serde_json::Value;

pub trait RowSourceGateway {
    fn fetch_rows(&self, sheet_id: &SheetId) -> anyhow::Result<Vec<RawRow>>;
}
