//! Attribute records delivered for each system property.
//!
//! Records mirror the bridge payloads field for field; wire names are
//! camelCase (`timeRemaining`, `activeConnections`, …). Every field is
//! optional: a host reports what it knows and leaves the rest out, and an
//! absent or `null` wire field deserializes to `None`. Closed enumerations
//! (`ConnectionType`, `StorageType`, …) carry fixed wire codes and decode
//! unrecognized codes to their `Unknown` variant.

mod codecs;
mod cpu;
mod input;
mod network;
mod output;
mod power;
mod sensor;
mod storage;
mod thermal;

pub use codecs::{AudioCodecAttributes, AvCodecsAttributes, VideoCodecAttributes};
pub use cpu::CpuAttributes;
pub use input::{
    CameraAttributes, InputDevicesAttributes, KeyboardAttributes, KeyboardType,
    MicrophoneAttributes, MicrophoneType, PointerAttributes, PointerType,
};
pub use network::{ConnectionAttributes, ConnectionType, NetworkAttributes};
pub use output::{
    AudioDeviceAttributes, AudioDeviceType, BrailleDeviceAttributes, DisplayDeviceAttributes,
    DisplayOrientation, OutputDevicesAttributes, PrintingDeviceAttributes, PrintingType,
};
pub use power::PowerAttributes;
pub use sensor::SensorAttributes;
pub use storage::{StorageType, StorageUnitAttributes};
pub use thermal::ThermalAttributes;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SystemInfoError;
use crate::property::PropertyId;

/// A decoded property payload, tagged by the property it answers.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyReport {
    /// Payload of [`PropertyId::Power`].
    Power(PowerAttributes),
    /// Payload of [`PropertyId::Cpu`].
    Cpu(CpuAttributes),
    /// Payload of [`PropertyId::Thermal`].
    Thermal(ThermalAttributes),
    /// Payload of [`PropertyId::Network`].
    Network(NetworkAttributes),
    /// Payload of [`PropertyId::Connection`].
    Connection(ConnectionAttributes),
    /// Payload of one of the five ambient-sensor properties; the id says
    /// which one.
    Sensor(PropertyId, SensorAttributes),
    /// Payload of [`PropertyId::AvCodecs`].
    AvCodecs(AvCodecsAttributes),
    /// Payload of [`PropertyId::AudioCodec`].
    AudioCodec(AudioCodecAttributes),
    /// Payload of [`PropertyId::VideoCodec`].
    VideoCodec(VideoCodecAttributes),
    /// Payload of [`PropertyId::Storage`]: every unit the host knows about.
    Storage(Vec<StorageUnitAttributes>),
    /// Payload of [`PropertyId::StorageUnit`].
    StorageUnit(StorageUnitAttributes),
    /// Payload of [`PropertyId::OutputDevices`].
    OutputDevices(OutputDevicesAttributes),
    /// Payload of [`PropertyId::InputDevices`].
    InputDevices(InputDevicesAttributes),
}

impl PropertyReport {
    /// The property this report answers.
    #[must_use]
    pub const fn property(&self) -> PropertyId {
        match self {
            Self::Power(_) => PropertyId::Power,
            Self::Cpu(_) => PropertyId::Cpu,
            Self::Thermal(_) => PropertyId::Thermal,
            Self::Network(_) => PropertyId::Network,
            Self::Connection(_) => PropertyId::Connection,
            Self::Sensor(property, _) => *property,
            Self::AvCodecs(_) => PropertyId::AvCodecs,
            Self::AudioCodec(_) => PropertyId::AudioCodec,
            Self::VideoCodec(_) => PropertyId::VideoCodec,
            Self::Storage(_) => PropertyId::Storage,
            Self::StorageUnit(_) => PropertyId::StorageUnit,
            Self::OutputDevices(_) => PropertyId::OutputDevices,
            Self::InputDevices(_) => PropertyId::InputDevices,
        }
    }
}

/// Decode a raw bridge payload as the schema of `property`.
pub(crate) fn decode(
    property: PropertyId,
    payload: Value,
) -> Result<PropertyReport, SystemInfoError> {
    Ok(match property {
        PropertyId::Power => PropertyReport::Power(parse(property, payload)?),
        PropertyId::Cpu => PropertyReport::Cpu(parse(property, payload)?),
        PropertyId::Thermal => PropertyReport::Thermal(parse(property, payload)?),
        PropertyId::Network => PropertyReport::Network(parse(property, payload)?),
        PropertyId::Connection => PropertyReport::Connection(parse(property, payload)?),
        PropertyId::AmbientLight
        | PropertyId::AmbientNoise
        | PropertyId::AmbientTemperature
        | PropertyId::AmbientAtmosphericPressure
        | PropertyId::Proximity => PropertyReport::Sensor(property, parse(property, payload)?),
        PropertyId::AvCodecs => PropertyReport::AvCodecs(parse(property, payload)?),
        PropertyId::AudioCodec => PropertyReport::AudioCodec(parse(property, payload)?),
        PropertyId::VideoCodec => PropertyReport::VideoCodec(parse(property, payload)?),
        PropertyId::Storage => PropertyReport::Storage(parse(property, payload)?),
        PropertyId::StorageUnit => PropertyReport::StorageUnit(parse(property, payload)?),
        PropertyId::OutputDevices => PropertyReport::OutputDevices(parse(property, payload)?),
        PropertyId::InputDevices => PropertyReport::InputDevices(parse(property, payload)?),
    })
}

fn parse<T: DeserializeOwned>(property: PropertyId, payload: Value) -> Result<T, SystemInfoError> {
    serde_json::from_value(payload).map_err(|err| {
        log::debug!("payload for {property} did not match its schema: {err}");
        SystemInfoError::InvalidValue
    })
}
