use serde::{Deserialize, Serialize};

/// Errors reported for a system property request.
///
/// The taxonomy is closed and each kind has a stable wire code; hosts deliver
/// errors as `{"code": n}` payloads. Nothing is retried or translated on this
/// side of the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, Serialize, Deserialize)]
#[serde(try_from = "WireError", into = "WireError")]
pub enum SystemInfoError {
    /// The host denied access to the property.
    #[error("permission to access the property was denied")]
    PermissionDenied,
    /// The property exists but no value can currently be reported.
    #[error("the requested information is not available")]
    InformationUnavailable,
    /// A request argument or a reported payload was malformed.
    #[error("a supplied or reported value was invalid")]
    InvalidValue,
    /// The host did not answer within the requested time.
    #[error("the request timed out")]
    Timeout,
}

impl SystemInfoError {
    /// The stable wire code for this error.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::PermissionDenied => 1,
            Self::InformationUnavailable => 2,
            Self::InvalidValue => 3,
            Self::Timeout => 4,
        }
    }

    /// Look up an error by wire code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::PermissionDenied),
            2 => Some(Self::InformationUnavailable),
            3 => Some(Self::InvalidValue),
            4 => Some(Self::Timeout),
            _ => None,
        }
    }
}

/// Wire form of [`SystemInfoError`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct WireError {
    code: u8,
}

impl From<SystemInfoError> for WireError {
    fn from(err: SystemInfoError) -> Self {
        Self { code: err.code() }
    }
}

impl TryFrom<WireError> for SystemInfoError {
    type Error = String;

    fn try_from(wire: WireError) -> Result<Self, Self::Error> {
        Self::from_code(wire.code).ok_or_else(|| format!("unknown error code {}", wire.code))
    }
}
