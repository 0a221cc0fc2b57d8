use serde::{Deserialize, Serialize};

/// Internal temperature state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThermalAttributes {
    /// Free-form description of this property instance.
    pub info: Option<String>,
    /// Free-form identifier of this property instance.
    pub id: Option<String>,
    /// Thermal status normalized to 0.0 (coolest) – 1.0 (hottest).
    pub state: Option<f64>,
}
