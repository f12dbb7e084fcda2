/// Baseline for any ingredient missing from the table
pub const DEFAULT_BASELINE_DAYS: f64 = 2.0;

// Keys are lowercase; lookups expect already-normalized names.
static SHELF_LIFE_DAYS: &[(&str, f64)] = &[
    ("milk", 5.0),
    ("eggs", 7.0),
    ("chicken", 3.0),
    ("lettuce", 4.0),
];

/// Read-only table of baseline shelf-life days per ingredient
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientShelfLifeTable;

impl IngredientShelfLifeTable {
    /// Baseline days for an ingredient present in the table
    pub fn lookup(&self, ingredient: &str) -> Option<f64> {
        SHELF_LIFE_DAYS
            .iter()
            .find(|(name, _)| *name == ingredient)
            .map(|(_, days)| *days)
    }

    /// Baseline days, falling back to [`DEFAULT_BASELINE_DAYS`] for unknown names
    pub fn baseline_for(&self, ingredient: &str) -> f64 {
        self.lookup(ingredient).unwrap_or(DEFAULT_BASELINE_DAYS)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> {
        SHELF_LIFE_DAYS.iter().copied()
    }
}
