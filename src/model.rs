use serde::Serialize;

use crate::haccp::HaccpPlan;
use crate::shelf_life::TemperatureBand;

/// Parsed input for a shelf-life estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpoilageQuery {
    /// Lowercased, trimmed ingredient names in input order. Duplicates kept.
    pub ingredients: Vec<String>,
    pub storage_temperature_celsius: f64,
}

impl SpoilageQuery {
    /// Split comma-separated ingredient text into a query.
    ///
    /// Tokens are trimmed and lowercased; tokens that are empty after trimming
    /// are dropped.
    pub fn parse(raw_ingredients: &str, storage_temperature_celsius: f64) -> Self {
        let ingredients = raw_ingredients
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .collect();

        SpoilageQuery {
            ingredients,
            storage_temperature_celsius,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// Outcome of a shelf-life estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpoilageEstimate {
    /// Estimated days, rounded to one decimal place
    Days(f64),
    /// No usable ingredient tokens were supplied
    NoInput,
}

impl SpoilageEstimate {
    /// The estimate in days, or `None` for [`SpoilageEstimate::NoInput`]
    pub fn days(&self) -> Option<f64> {
        match self {
            SpoilageEstimate::Days(days) => Some(*days),
            SpoilageEstimate::NoInput => None,
        }
    }

    pub fn is_no_input(&self) -> bool {
        matches!(self, SpoilageEstimate::NoInput)
    }
}

/// Baseline used for one ingredient token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientBaseline {
    pub ingredient: String,
    pub baseline_days: f64,
    /// false when the ingredient was not in the table and got the default
    pub known: bool,
}

/// Step-by-step record of how an estimate was reached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShelfLifeBreakdown {
    pub baselines: Vec<IngredientBaseline>,
    pub mean_days: f64,
    pub band: TemperatureBand,
    pub multiplier: f64,
    pub estimate: SpoilageEstimate,
}

/// Result of an [`crate::Assessment`] run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssessmentReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf_life: Option<SpoilageEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub haccp: Option<HaccpPlan>,
}
