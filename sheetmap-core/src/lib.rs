//! # sheetmap-core
//!
//! Business logic of the address resolution pipeline.
//!
//! Everything that talks to the outside world is hidden behind the
//! traits in [`gateways`], the [`usecases`] themselves are pure or only
//! depend on those traits.

pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use sheetmap_entities::{geo::*, group::*, place::*, reference::*, row::*};
}
