use anyhow::{Context, Result};
use sheetmap_core::gateways::rows::{RawRow, RowSourceGateway};
use sheetmap_entities::reference::SheetId;
use std::{
    io,
    path::{Path, PathBuf},
};

use crate::cells::raw_rows_from_cells;

const FILE_EXTENSION: &str = "tsv";

/// Reads rows from tab-separated exports of spreadsheets.
///
/// The export of a sheet is expected at `<dir>/<sheet-id>.tsv`.
#[derive(Debug, Clone)]
pub struct TsvDirectory {
    dir: PathBuf,
}

impl TsvDirectory {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, sheet_id: &SheetId) -> PathBuf {
        self.dir.join(format!("{sheet_id}.{FILE_EXTENSION}"))
    }
}

pub fn read_tsv_rows<R: io::Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let cells = reader
        .records()
        .map(|record| record.map(|r| r.iter().map(ToOwned::to_owned).collect::<Vec<_>>()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(raw_rows_from_cells(cells))
}

impl RowSourceGateway for TsvDirectory {
    fn fetch_rows(&self, sheet_id: &SheetId) -> Result<Vec<RawRow>> {
        let file_path = self.file_path(sheet_id);
        log::debug!("Reading rows from {}", file_path.display());
        let file = std::fs::File::open(&file_path)
            .with_context(|| format!("Unable to open {}", file_path.display()))?;
        read_tsv_rows(file)
    }
}
