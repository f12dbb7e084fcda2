pub mod builder;
pub mod config;
pub mod error;
pub mod haccp;
pub mod model;
pub mod render;
pub mod shelf_life;
pub mod uniffi_bindings;

pub use builder::{Assessment, AssessmentBuilder, DEFAULT_STORAGE_TEMPERATURE_C};
pub use config::{FoodiqConfig, OutputFormat};
pub use error::FoodiqError;
pub use haccp::{HaccpAnalyzer, HaccpPlan};
pub use model::{
    AssessmentReport, IngredientBaseline, ShelfLifeBreakdown, SpoilageEstimate, SpoilageQuery,
};
pub use shelf_life::{
    IngredientShelfLifeTable, ShelfLifeEstimator, TemperatureBand, DEFAULT_BASELINE_DAYS,
};

/// Estimate shelf-life in days for comma-separated ingredients
///
/// # Example
/// ```
/// use foodiq::{estimate_shelf_life, SpoilageEstimate};
///
/// assert_eq!(estimate_shelf_life("milk, eggs", 4.0), SpoilageEstimate::Days(6.0));
/// ```
pub fn estimate_shelf_life(raw_ingredients: &str, storage_temp_c: f64) -> SpoilageEstimate {
    ShelfLifeEstimator::new().estimate(raw_ingredients, storage_temp_c)
}

/// HACCP checklist for a free-text process description
pub fn generate_haccp_plan(process_description: &str) -> HaccpPlan {
    HaccpAnalyzer::new().generate_plan(process_description)
}
