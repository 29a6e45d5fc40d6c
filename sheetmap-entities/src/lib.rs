#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # sheetmap-entities
//!
//! Reusable, agnostic domain entities for sheetmap.
//!
//! The entities only contain generic functionality that does not reveal
//! any application-specific business logic.

pub mod geo;
pub mod group;
pub mod place;
pub mod reference;
pub mod row;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
