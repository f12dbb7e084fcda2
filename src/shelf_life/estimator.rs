use log::debug;

use super::{IngredientShelfLifeTable, TemperatureBand};
use crate::model::{IngredientBaseline, ShelfLifeBreakdown, SpoilageEstimate, SpoilageQuery};

/// Estimates shelf-life in days from an ingredient list and storage temperature
#[derive(Debug, Clone, Copy, Default)]
pub struct ShelfLifeEstimator {
    table: IngredientShelfLifeTable,
}

impl ShelfLifeEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate shelf-life for comma-separated ingredient text
    ///
    /// Returns [`SpoilageEstimate::NoInput`] when the text holds no ingredient
    /// names once split and trimmed.
    ///
    /// # Example
    /// ```
    /// use foodiq::{ShelfLifeEstimator, SpoilageEstimate};
    ///
    /// let estimator = ShelfLifeEstimator::new();
    /// assert_eq!(estimator.estimate("milk, eggs", 2.0), SpoilageEstimate::Days(9.0));
    /// assert_eq!(estimator.estimate(" , ", 2.0), SpoilageEstimate::NoInput);
    /// ```
    pub fn estimate(&self, raw_ingredients: &str, storage_temp_c: f64) -> SpoilageEstimate {
        self.estimate_query(&SpoilageQuery::parse(raw_ingredients, storage_temp_c))
    }

    pub fn estimate_query(&self, query: &SpoilageQuery) -> SpoilageEstimate {
        self.breakdown(query)
            .map(|breakdown| breakdown.estimate)
            .unwrap_or(SpoilageEstimate::NoInput)
    }

    /// Same as [`estimate`](Self::estimate) but keeps every intermediate value.
    /// `None` when there are no ingredients.
    pub fn explain(
        &self,
        raw_ingredients: &str,
        storage_temp_c: f64,
    ) -> Option<ShelfLifeBreakdown> {
        self.breakdown(&SpoilageQuery::parse(raw_ingredients, storage_temp_c))
    }

    fn breakdown(&self, query: &SpoilageQuery) -> Option<ShelfLifeBreakdown> {
        if query.is_empty() {
            debug!("No ingredients provided");
            return None;
        }

        let baselines: Vec<IngredientBaseline> = query
            .ingredients
            .iter()
            .map(|ingredient| {
                let known = self.table.lookup(ingredient);
                debug!("Baseline for {:?}: {:?}", ingredient, known);
                IngredientBaseline {
                    ingredient: ingredient.clone(),
                    baseline_days: self.table.baseline_for(ingredient),
                    known: known.is_some(),
                }
            })
            .collect();

        // Divide by token count so duplicates weigh per occurrence
        let total: f64 = baselines.iter().map(|b| b.baseline_days).sum();
        let mean_days = total / baselines.len() as f64;

        let band = TemperatureBand::classify(query.storage_temperature_celsius);
        let multiplier = band.multiplier();
        debug!(
            "{} °C is {:?}, multiplier {}",
            query.storage_temperature_celsius, band, multiplier
        );

        let estimate = SpoilageEstimate::Days(round_to_tenth(mean_days * multiplier));

        Some(ShelfLifeBreakdown {
            baselines,
            mean_days,
            band,
            multiplier,
            estimate,
        })
    }
}

/// Round half away from zero to one decimal place
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
