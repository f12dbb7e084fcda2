use serde::Serialize;

/// Below this (strictly) storage counts as chilled
pub const CHILLED_BELOW_C: f64 = 4.0;
/// Above this (strictly) storage counts as warm
pub const WARM_ABOVE_C: f64 = 20.0;

/// Storage temperature band. Boundaries are strict: 4 °C and 20 °C are both `Ambient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    /// t < 4 °C
    Chilled,
    /// 4 °C <= t <= 20 °C
    Ambient,
    /// t > 20 °C
    Warm,
}

impl TemperatureBand {
    /// Classify a temperature in °C. NaN falls through to `Ambient`.
    pub fn classify(celsius: f64) -> Self {
        if celsius < CHILLED_BELOW_C {
            TemperatureBand::Chilled
        } else if celsius > WARM_ABOVE_C {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Ambient
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            TemperatureBand::Chilled => 1.5,
            TemperatureBand::Ambient => 1.0,
            TemperatureBand::Warm => 0.5,
        }
    }
}
