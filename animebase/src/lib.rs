pub mod character;
pub mod database;
pub mod power;
pub mod sample;
pub mod series;

mod error;
mod map;

pub use character::Character;
pub use database::Database;
pub use error::{Error, Result};
pub use map::Map;
pub use series::Series;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
