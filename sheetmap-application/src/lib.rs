#[macro_use]
extern crate log;

mod fetch_places;
mod pipeline;

pub mod prelude {
    pub use super::{fetch_places::*, pipeline::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::PipelineError>;

pub(crate) use error::PipelineError;

pub(crate) use sheetmap_core::{
    entities::*,
    gateways::{
        geocode::GeoCodingGateway, notify::*, pace::Pacer, rows::RowSourceGateway, session::*,
    },
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;
