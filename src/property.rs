use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SystemInfoError;

/// The system properties a host can be asked about.
///
/// Wire names are the lowercase strings hosts dispatch on. The aggregate ids
/// (`network`, `avcodecs`, `storage`, `outputdevices`, `inputdevices`) return
/// compound records; the singular ids (`connection`, `audiocodec`,
/// `videocodec`, `storageunit`) address one member of an aggregate and are
/// typically answered only by hosts that track instances individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyId {
    /// Battery and charging state.
    Power,
    /// Processor usage.
    Cpu,
    /// Internal temperature state.
    Thermal,
    /// Active network connections.
    Network,
    /// A single network connection.
    Connection,
    /// Ambient light sensor.
    AmbientLight,
    /// Ambient noise sensor.
    AmbientNoise,
    /// Ambient temperature sensor.
    AmbientTemperature,
    /// Atmospheric pressure sensor.
    AmbientAtmosphericPressure,
    /// Proximity sensor.
    Proximity,
    /// Audio and video codec catalog.
    AvCodecs,
    /// A single audio codec.
    AudioCodec,
    /// A single video codec.
    VideoCodec,
    /// All storage units.
    Storage,
    /// A single storage unit.
    StorageUnit,
    /// Displays, printers, braille and audio outputs.
    OutputDevices,
    /// Pointers, keyboards, cameras and microphones.
    InputDevices,
}

impl PropertyId {
    /// All known property ids.
    pub const ALL: [Self; 17] = [
        Self::Power,
        Self::Cpu,
        Self::Thermal,
        Self::Network,
        Self::Connection,
        Self::AmbientLight,
        Self::AmbientNoise,
        Self::AmbientTemperature,
        Self::AmbientAtmosphericPressure,
        Self::Proximity,
        Self::AvCodecs,
        Self::AudioCodec,
        Self::VideoCodec,
        Self::Storage,
        Self::StorageUnit,
        Self::OutputDevices,
        Self::InputDevices,
    ];

    /// The wire name of this property.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Cpu => "cpu",
            Self::Thermal => "thermal",
            Self::Network => "network",
            Self::Connection => "connection",
            Self::AmbientLight => "ambientlight",
            Self::AmbientNoise => "ambientnoise",
            Self::AmbientTemperature => "ambienttemperature",
            Self::AmbientAtmosphericPressure => "ambientatmosphericpressure",
            Self::Proximity => "proximity",
            Self::AvCodecs => "avcodecs",
            Self::AudioCodec => "audiocodec",
            Self::VideoCodec => "videocodec",
            Self::Storage => "storage",
            Self::StorageUnit => "storageunit",
            Self::OutputDevices => "outputdevices",
            Self::InputDevices => "inputdevices",
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyId {
    type Err = SystemInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or(SystemInfoError::InvalidValue)
    }
}
