mod decode_rows;
mod error;
mod group_by_address;
mod merge_places;
mod resolve_addresses;

#[cfg(test)]
pub mod tests;

pub use self::{
    decode_rows::*, error::Error, group_by_address::*, merge_places::*, resolve_addresses::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::*};
}
