use log::info;

use crate::{
    haccp::HaccpAnalyzer, model::AssessmentReport, shelf_life::ShelfLifeEstimator, FoodiqError,
};

/// Storage temperature assumed when none is given
pub const DEFAULT_STORAGE_TEMPERATURE_C: f64 = 4.0;

/// Builder for configuring and running a food assessment
#[derive(Debug, Default, Clone)]
pub struct AssessmentBuilder {
    ingredients: Option<String>,
    storage_temperature: Option<f64>,
    process: Option<String>,
}

impl AssessmentBuilder {
    /// Set the comma-separated ingredient list for a shelf-life estimate
    ///
    /// # Example
    /// ```
    /// use foodiq::Assessment;
    ///
    /// let builder = Assessment::builder()
    ///     .ingredients("milk, eggs");
    /// ```
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    /// Set the storage temperature in °C (defaults to 4 °C)
    pub fn storage_temperature(mut self, celsius: f64) -> Self {
        self.storage_temperature = Some(celsius);
        self
    }

    /// Set the process description for a HACCP checklist
    ///
    /// # Example
    /// ```
    /// use foodiq::Assessment;
    ///
    /// let builder = Assessment::builder()
    ///     .process("Baking and packaging sourdough");
    /// ```
    pub fn process(mut self, description: impl Into<String>) -> Self {
        self.process = Some(description.into());
        self
    }

    /// Run the configured assessments
    ///
    /// # Errors
    /// Returns `FoodiqError` if:
    /// - Neither ingredients nor a process description was set
    /// - The storage temperature is NaN or infinite
    /// - The process description is blank
    ///
    /// Blank ingredient text is not an error; the report carries
    /// `SpoilageEstimate::NoInput` instead.
    ///
    /// # Example
    /// ```
    /// use foodiq::{Assessment, SpoilageEstimate};
    ///
    /// let report = Assessment::builder()
    ///     .ingredients("milk, eggs")
    ///     .storage_temperature(25.0)
    ///     .build()?;
    /// assert_eq!(report.shelf_life, Some(SpoilageEstimate::Days(3.0)));
    /// # Ok::<(), foodiq::FoodiqError>(())
    /// ```
    pub fn build(self) -> Result<AssessmentReport, FoodiqError> {
        if self.ingredients.is_none() && self.process.is_none() {
            return Err(FoodiqError::BuilderError(
                "No input specified. Use .ingredients() or .process()".to_string(),
            ));
        }

        let temperature = self
            .storage_temperature
            .unwrap_or(DEFAULT_STORAGE_TEMPERATURE_C);
        if !temperature.is_finite() {
            return Err(FoodiqError::InvalidInput(format!(
                "Storage temperature must be a finite number, got {}",
                temperature
            )));
        }

        let haccp = match self.process {
            Some(description) if description.trim().is_empty() => {
                return Err(FoodiqError::InvalidInput(
                    "Process description cannot be empty".to_string(),
                ));
            }
            Some(description) => Some(HaccpAnalyzer::new().generate_plan(&description)),
            None => None,
        };

        let shelf_life = self
            .ingredients
            .map(|text| ShelfLifeEstimator::new().estimate(&text, temperature));

        info!(
            "Assessment complete: shelf_life={:?}, critical_points={}",
            shelf_life,
            haccp.as_ref().map_or(0, |plan| plan.critical_points.len())
        );

        Ok(AssessmentReport { shelf_life, haccp })
    }
}

/// Main entry point for the builder API
pub struct Assessment;

impl Assessment {
    /// Creates a new builder for a food assessment
    ///
    /// # Example
    /// ```
    /// use foodiq::Assessment;
    ///
    /// let builder = Assessment::builder();
    /// ```
    pub fn builder() -> AssessmentBuilder {
        AssessmentBuilder::default()
    }
}
