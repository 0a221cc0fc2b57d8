use serde::{Deserialize, Serialize};

/// Processor usage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CpuAttributes {
    /// Free-form description of this property instance.
    pub info: Option<String>,
    /// Free-form identifier of this property instance.
    pub id: Option<String>,
    /// Current CPU usage, 0.0–1.0.
    pub usage: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_usage() {
        let cpu: CpuAttributes =
            serde_json::from_value(serde_json::json!({"usage": 0.42})).unwrap();
        assert_eq!(cpu.usage, Some(0.42));
        assert_eq!(cpu.info, None);
    }
}
