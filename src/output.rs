use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use sheetmap_boundary::{PlaceList, PlaceRecord};
use sheetmap_entities::place::ResolvedPlace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Places and their bounding box
    Json,
    /// One record per place
    Csv,
}

pub fn write_places<W: Write>(mut writer: W, format: Format, places: Vec<ResolvedPlace>) -> Result<()> {
    let list = PlaceList::from(places);
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut writer, &list)?;
            writeln!(writer)?;
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(writer);
            for place in list.places {
                writer.serialize(PlaceRecord::from(place))?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
