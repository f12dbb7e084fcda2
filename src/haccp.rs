//! HACCP critical control point checklist from a free-text process description.

use log::debug;
use serde::Serialize;

/// A process step keyword and the hazards it brings in
#[derive(Debug, Clone, Copy)]
pub struct ProcessHazard {
    pub keyword: &'static str,
    pub critical_points: &'static [&'static str],
}

// Evaluated in order; earlier entries win ties in the output order.
static PROCESS_HAZARDS: &[ProcessHazard] = &[
    ProcessHazard {
        keyword: "baking",
        critical_points: &["Raw eggs", "Undercooked meat"],
    },
    ProcessHazard {
        keyword: "packaging",
        critical_points: &["Contaminated packaging", "Dirty surfaces"],
    },
    ProcessHazard {
        keyword: "frying",
        critical_points: &["Hot oil splashes", "Cross-contamination"],
    },
];

/// Checklist produced for one process description
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HaccpPlan {
    /// Keywords found in the description, in table order
    pub matched_processes: Vec<String>,
    /// Distinct critical points, first occurrence kept
    pub critical_points: Vec<String>,
}

impl HaccpPlan {
    pub fn has_critical_points(&self) -> bool {
        !self.critical_points.is_empty()
    }

    /// One-line recommendation for display
    pub fn summary(&self) -> String {
        if self.has_critical_points() {
            format!(
                "Critical Points: {}. Implement proper sanitation and cooking standards.",
                self.critical_points.join(", ")
            )
        } else {
            "No critical control points detected. Ensure good manufacturing practices.".to_string()
        }
    }
}

/// Scans process descriptions against the hazard table
#[derive(Debug, Clone, Copy, Default)]
pub struct HaccpAnalyzer;

impl HaccpAnalyzer {
    pub fn new() -> Self {
        HaccpAnalyzer
    }

    pub fn hazards(&self) -> &'static [ProcessHazard] {
        PROCESS_HAZARDS
    }

    /// Build a plan by case-insensitive substring match on each keyword
    ///
    /// # Example
    /// ```
    /// use foodiq::HaccpAnalyzer;
    ///
    /// let plan = HaccpAnalyzer::new().generate_plan("Deep FRYING of fish");
    /// assert_eq!(plan.critical_points, vec!["Hot oil splashes", "Cross-contamination"]);
    /// ```
    pub fn generate_plan(&self, process_description: &str) -> HaccpPlan {
        let process = process_description.to_lowercase();
        let mut plan = HaccpPlan::default();

        for hazard in PROCESS_HAZARDS {
            if !process.contains(hazard.keyword) {
                continue;
            }
            debug!("Matched process step {:?}", hazard.keyword);
            plan.matched_processes.push(hazard.keyword.to_string());

            for point in hazard.critical_points {
                if !plan.critical_points.iter().any(|p| p == point) {
                    plan.critical_points.push(point.to_string());
                }
            }
        }

        plan
    }
}
