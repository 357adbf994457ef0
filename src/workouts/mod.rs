//! Workout catalog and daily selection.

pub mod catalog;
pub mod picker;
pub mod types;

pub use catalog::{catalog, CATALOG_SIZE};
pub use picker::{daily_workout, random_workout};
pub use types::Workout;
