//! # sheetmap-gateways
//!
//! Implementations of the gateways defined in `sheetmap-core`.

mod cells;

pub mod google_maps;
pub mod google_sheets;
pub mod notify;
pub mod pace;
pub mod session;
pub mod tsv;
