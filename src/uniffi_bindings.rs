//! UniFFI bindings for foodiq
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Everything here is synchronous; the core never does I/O.

use std::fmt;

use crate::{FoodiqError, HaccpPlan, SpoilageEstimate};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible shelf-life estimate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiShelfLifeEstimate {
    /// Estimated days, one decimal place
    Days { days: f64 },
    /// No ingredients were given
    NoInput,
}

impl From<SpoilageEstimate> for FfiShelfLifeEstimate {
    fn from(estimate: SpoilageEstimate) -> Self {
        match estimate {
            SpoilageEstimate::Days(days) => FfiShelfLifeEstimate::Days { days },
            SpoilageEstimate::NoInput => FfiShelfLifeEstimate::NoInput,
        }
    }
}

impl From<FfiShelfLifeEstimate> for SpoilageEstimate {
    fn from(ffi: FfiShelfLifeEstimate) -> Self {
        match ffi {
            FfiShelfLifeEstimate::Days { days } => SpoilageEstimate::Days(days),
            FfiShelfLifeEstimate::NoInput => SpoilageEstimate::NoInput,
        }
    }
}

/// FFI-compatible HACCP plan
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiHaccpPlan {
    pub matched_processes: Vec<String>,
    pub critical_points: Vec<String>,
    /// Ready-to-display recommendation
    pub summary: String,
}

impl From<HaccpPlan> for FfiHaccpPlan {
    fn from(plan: HaccpPlan) -> Self {
        let summary = plan.summary();
        FfiHaccpPlan {
            matched_processes: plan.matched_processes,
            critical_points: plan.critical_points,
            summary,
        }
    }
}

/// Inputs for a combined assessment
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiAssessmentInput {
    /// Comma-separated ingredients (skips the shelf-life estimate if not specified)
    pub ingredients: Option<String>,
    /// Storage temperature in °C (4 °C if not specified)
    pub storage_temperature: Option<f64>,
    /// Process description (skips the HACCP plan if not specified)
    pub process: Option<String>,
}

/// FFI-compatible assessment report
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiAssessmentReport {
    pub shelf_life: Option<FfiShelfLifeEstimate>,
    pub haccp: Option<FfiHaccpPlan>,
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiFoodiqError {
    /// Invalid input provided
    InvalidInput { message: String },
    /// Builder configuration error
    BuilderError { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Failed to serialize output
    SerializationError { message: String },
}

impl fmt::Display for FfiFoodiqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiFoodiqError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiFoodiqError::BuilderError { message } => write!(f, "Builder error: {}", message),
            FfiFoodiqError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiFoodiqError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for FfiFoodiqError {}

impl From<FoodiqError> for FfiFoodiqError {
    fn from(err: FoodiqError) -> Self {
        match err {
            FoodiqError::InvalidInput(message) => FfiFoodiqError::InvalidInput { message },
            FoodiqError::BuilderError(message) => FfiFoodiqError::BuilderError { message },
            FoodiqError::ConfigError(e) => FfiFoodiqError::ConfigError {
                message: e.to_string(),
            },
            FoodiqError::SerializationError(e) => FfiFoodiqError::SerializationError {
                message: e.to_string(),
            },
        }
    }
}

/// Estimate shelf-life for comma-separated ingredients
///
/// # Arguments
/// * `ingredients` - Free-text ingredient list
/// * `storage_temperature` - Storage temperature in °C
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn estimate_shelf_life(ingredients: String, storage_temperature: f64) -> FfiShelfLifeEstimate {
    crate::estimate_shelf_life(&ingredients, storage_temperature).into()
}

/// Display text for an estimate ("Estimated Shelf-life: 6.0 days")
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn format_estimate(estimate: FfiShelfLifeEstimate) -> String {
    crate::render::format_estimate(&estimate.into())
}

/// Generate a HACCP checklist for a process description
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn generate_haccp_plan(process_description: String) -> FfiHaccpPlan {
    crate::generate_haccp_plan(&process_description).into()
}

/// Run the builder with the given inputs
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn assess(input: FfiAssessmentInput) -> Result<FfiAssessmentReport, FfiFoodiqError> {
    let mut builder = crate::Assessment::builder();

    if let Some(ingredients) = input.ingredients {
        builder = builder.ingredients(ingredients);
    }

    if let Some(celsius) = input.storage_temperature {
        builder = builder.storage_temperature(celsius);
    }

    if let Some(process) = input.process {
        builder = builder.process(process);
    }

    let report = builder.build()?;

    Ok(FfiAssessmentReport {
        shelf_life: report.shelf_life.map(Into::into),
        haccp: report.haccp.map(Into::into),
    })
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
