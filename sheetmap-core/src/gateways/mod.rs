pub mod geocode;
pub mod notify;
pub mod pace;
pub mod rows;
pub mod session;
