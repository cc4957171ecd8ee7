pub mod calculations;
pub mod calendar;
pub mod format;
pub mod models;

pub use models::*;
