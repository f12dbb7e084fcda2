//! Shelf-life estimation from a fixed ingredient baseline table.
//!
//! An estimate is the mean baseline of the listed ingredients, scaled by a
//! step multiplier for the storage temperature band and rounded to one
//! decimal place.

mod estimator;
mod table;
mod temperature;

pub use self::estimator::ShelfLifeEstimator;
pub use self::table::{IngredientShelfLifeTable, DEFAULT_BASELINE_DAYS};
pub use self::temperature::TemperatureBand;
