use serde::{Deserialize, Serialize};

/// Reading of an ambient sensor (light, noise, temperature, atmospheric
/// pressure, proximity).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SensorAttributes {
    /// Value at the time of the query, in the sensor's native unit.
    pub value: Option<f64>,
    /// Minimum value the sensor can report.
    pub min: Option<f64>,
    /// Maximum value the sensor can report.
    pub max: Option<f64>,
    /// Value normalized into 0.0–1.0 against the sensor's range.
    pub normalized_value: Option<f64>,
}
