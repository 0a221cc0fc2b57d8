use serde::{Deserialize, Serialize};

/// State of the device's power source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerAttributes {
    /// Free-form description of this property instance.
    pub info: Option<String>,
    /// Free-form identifier of this property instance.
    pub id: Option<String>,
    /// Remaining charge of the internal power source, 0–100.
    pub level: Option<f64>,
    /// Estimated seconds until the battery is depleted.
    pub time_remaining: Option<u64>,
    /// Whether the current power source is a battery.
    pub is_battery: Option<bool>,
    /// Whether the battery is being charged.
    pub is_charging: Option<bool>,
}
