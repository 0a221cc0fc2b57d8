use serde::{Deserialize, Serialize};

/// The bearer of a network connection.
///
/// String-coded on the wire. Hosts occasionally report bearer names outside
/// this set (older Android stacks emit `"x-mobile"` for unclassified cellular
/// subtypes); those decode to [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType {
    /// Wired ethernet.
    #[serde(rename = "ethernet")]
    Ethernet,
    /// USB tethering.
    #[serde(rename = "usb")]
    Usb,
    /// Wi-Fi.
    #[serde(rename = "wifi")]
    Wifi,
    /// WiMAX.
    #[serde(rename = "wimax")]
    Wimax,
    /// 2G cellular (GSM, GPRS, EDGE).
    #[serde(rename = "2g")]
    Mobile2G,
    /// 3G cellular (CDMA, UMTS).
    #[serde(rename = "3g")]
    Mobile3G,
    /// 4G cellular (LTE, UMB).
    #[serde(rename = "4g")]
    Mobile4G,
    /// Bearer could not be classified.
    #[default]
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl ConnectionType {
    /// The wire name of this bearer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Ethernet => "ethernet",
            Self::Usb => "usb",
            Self::Wifi => "wifi",
            Self::Wimax => "wimax",
            Self::Mobile2G => "2g",
            Self::Mobile3G => "3g",
            Self::Mobile4G => "4g",
        }
    }
}

/// One active network connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionAttributes {
    /// Free-form description of this connection.
    pub info: Option<String>,
    /// Free-form identifier of this connection.
    pub id: Option<String>,
    /// Bearer of the connection.
    #[serde(rename = "type")]
    pub kind: Option<ConnectionType>,
    /// Current real-time download bandwidth, in Kbit/s.
    pub current_download_bandwidth: Option<u64>,
    /// Current real-time upload bandwidth, in Kbit/s.
    pub current_upload_bandwidth: Option<u64>,
    /// Maximum download bandwidth this connection offers, in Kbit/s.
    pub max_download_bandwidth: Option<u64>,
    /// Maximum upload bandwidth this connection offers, in Kbit/s.
    pub max_upload_bandwidth: Option<u64>,
    /// Signal strength, 0.0–1.0.
    pub current_signal_strength: Option<f64>,
    /// Whether the connection is roaming.
    pub roaming: Option<bool>,
}

/// The device's active network connections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkAttributes {
    /// Free-form description of this property instance.
    pub info: Option<String>,
    /// Free-form identifier of this property instance.
    pub id: Option<String>,
    /// Currently active connections.
    pub active_connections: Option<Vec<ConnectionAttributes>>,
}
