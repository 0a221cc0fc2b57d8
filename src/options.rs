use serde::{Deserialize, Serialize};

/// Options forwarded with a `get` or `monitor` request.
///
/// Every field is optional and is omitted from the wire when unset. All
/// semantics live on the host side: thresholds gate when a monitor fires,
/// `timeout` bounds the wait for the first report, and `id` addresses one
/// instance of a multi-instance property (a specific display, storage unit,
/// …). This layer never inspects the values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonitorOptions {
    /// Fire only when the watched attribute meets or exceeds this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_threshold: Option<f64>,
    /// Fire only when the watched attribute meets or falls below this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_threshold: Option<f64>,
    /// Name of the attribute the thresholds apply to (e.g. `"level"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_target: Option<String>,
    /// Maximum milliseconds between the request and the first report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    /// Identifier of the targeted property instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
