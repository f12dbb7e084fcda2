//! User-facing strings for the CLI and embedding apps.

use log::info;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::haccp::{HaccpAnalyzer, HaccpPlan};
use crate::model::{ShelfLifeBreakdown, SpoilageEstimate};
use crate::shelf_life::ShelfLifeEstimator;
use crate::FoodiqError;

pub const ENTER_INGREDIENTS_PROMPT: &str = "Please enter ingredients.";
pub const DESCRIBE_PROCESS_PROMPT: &str = "Please describe your food process.";

/// Display line for an estimate. Days always print with one decimal.
pub fn format_estimate(estimate: &SpoilageEstimate) -> String {
    match estimate {
        SpoilageEstimate::Days(days) => format!("Estimated Shelf-life: {:.1} days", days),
        SpoilageEstimate::NoInput => ENTER_INGREDIENTS_PROMPT.to_string(),
    }
}

pub fn format_haccp_plan(plan: &HaccpPlan) -> String {
    plan.summary()
}

/// Multi-line explanation of an estimate
pub fn format_breakdown(breakdown: &ShelfLifeBreakdown) -> String {
    let mut lines: Vec<String> = breakdown
        .baselines
        .iter()
        .map(|b| {
            let source = if b.known { "table" } else { "default" };
            format!("  {}: {:.1} days ({})", b.ingredient, b.baseline_days, source)
        })
        .collect();

    lines.push(format!("  mean: {:.2} days", breakdown.mean_days));
    lines.push(format!(
        "  storage: {:?} (x{})",
        breakdown.band, breakdown.multiplier
    ));
    lines.push(format_estimate(&breakdown.estimate));
    lines.join("\n")
}

/// Pretty JSON for any result type
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FoodiqError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Estimate and render in one step, as the `shelf-life` command prints it
///
/// With `explain`, the full breakdown is rendered; blank ingredient text has
/// no breakdown and falls back to the plain no-input output.
pub fn shelf_life_output(
    raw_ingredients: &str,
    storage_temp_c: f64,
    format: OutputFormat,
    explain: bool,
) -> Result<String, FoodiqError> {
    let estimator = ShelfLifeEstimator::new();

    if explain {
        if let Some(breakdown) = estimator.explain(raw_ingredients, storage_temp_c) {
            info!("Estimated {:?} at {} °C", breakdown.estimate, storage_temp_c);
            return match format {
                OutputFormat::Json => to_json(&breakdown),
                OutputFormat::Text => Ok(format_breakdown(&breakdown)),
            };
        }
    }

    let estimate = estimator.estimate(raw_ingredients, storage_temp_c);
    info!("Estimated {:?} at {} °C", estimate, storage_temp_c);

    match format {
        OutputFormat::Json => to_json(&estimate),
        OutputFormat::Text => Ok(format_estimate(&estimate)),
    }
}

/// Generate and render a HACCP plan, as the `haccp` command prints it
pub fn haccp_output(
    process_description: &str,
    format: OutputFormat,
) -> Result<String, FoodiqError> {
    if process_description.trim().is_empty() {
        return Ok(DESCRIBE_PROCESS_PROMPT.to_string());
    }

    let plan = HaccpAnalyzer::new().generate_plan(process_description);
    info!("Found {} critical points", plan.critical_points.len());

    match format {
        OutputFormat::Json => to_json(&plan),
        OutputFormat::Text => Ok(format_haccp_plan(&plan)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_days_keep_decimal() {
        assert_eq!(
            format_estimate(&SpoilageEstimate::Days(6.0)),
            "Estimated Shelf-life: 6.0 days"
        );
    }

    #[test]
    fn test_no_input_prompts_for_ingredients() {
        assert_eq!(
            format_estimate(&SpoilageEstimate::NoInput),
            "Please enter ingredients."
        );
    }

    #[test]
    fn test_breakdown_lists_each_token() {
        let breakdown = ShelfLifeEstimator::new().explain("Eggs, tofu", 2.0).unwrap();
        let text = format_breakdown(&breakdown);

        assert!(text.contains("eggs: 7.0 days (table)"));
        assert!(text.contains("tofu: 2.0 days (default)"));
        assert!(text.contains("Chilled (x1.5)"));
        assert!(text.ends_with("Estimated Shelf-life: 6.8 days"));
    }

    #[test]
    fn test_to_json_plan() {
        let plan = crate::HaccpAnalyzer::new().generate_plan("frying");
        let json = to_json(&plan).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["matched_processes"][0], "frying");
        assert_eq!(value["critical_points"][1], "Cross-contamination");
    }

    #[test]
    fn test_shelf_life_output_text() {
        let text = shelf_life_output("milk, eggs", 25.0, OutputFormat::Text, false).unwrap();
        assert_eq!(text, "Estimated Shelf-life: 3.0 days");
    }

    #[test]
    fn test_shelf_life_output_json() {
        let json = shelf_life_output("milk, eggs", 2.0, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["days"], 9.0);
    }

    #[test]
    fn test_shelf_life_output_explain_text() {
        let text = shelf_life_output("milk, kale", 4.0, OutputFormat::Text, true).unwrap();
        assert!(text.contains("milk: 5.0 days (table)"));
        assert!(text.contains("kale: 2.0 days (default)"));
        assert!(text.ends_with("Estimated Shelf-life: 3.5 days"));
    }

    #[test]
    fn test_shelf_life_output_explain_json() {
        let json = shelf_life_output("chicken", 30.0, OutputFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["band"], "warm");
        assert_eq!(value["multiplier"], 0.5);
        assert_eq!(value["baselines"][0]["ingredient"], "chicken");
        assert_eq!(value["estimate"]["days"], 1.5);
    }

    #[test]
    fn test_shelf_life_output_blank_ingredients() {
        for explain in [false, true] {
            assert_eq!(
                shelf_life_output("", 4.0, OutputFormat::Text, explain).unwrap(),
                ENTER_INGREDIENTS_PROMPT
            );
            assert_eq!(
                shelf_life_output(" , ,", 4.0, OutputFormat::Json, explain).unwrap(),
                r#""no_input""#
            );
        }
    }

    #[test]
    fn test_haccp_output_formats() {
        assert_eq!(
            haccp_output("frying fish", OutputFormat::Text).unwrap(),
            "Critical Points: Hot oil splashes, Cross-contamination. Implement proper sanitation and cooking standards."
        );

        let json = haccp_output("frying fish", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["matched_processes"][0], "frying");
    }

    #[test]
    fn test_haccp_output_blank_description() {
        assert_eq!(
            haccp_output("  ", OutputFormat::Json).unwrap(),
            DESCRIBE_PROCESS_PROMPT
        );
    }
}
