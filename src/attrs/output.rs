use serde::{Deserialize, Serialize};

/// Orientation of a display, integer-coded on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum DisplayOrientation {
    /// Orientation could not be determined.
    #[default]
    Unknown,
    /// Landscape.
    Landscape,
    /// Portrait.
    Portrait,
    /// Landscape, rotated 180°.
    InvertedLandscape,
    /// Portrait, rotated 180°.
    InvertedPortrait,
}

impl DisplayOrientation {
    /// The stable wire code of this orientation.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Landscape => 1,
            Self::Portrait => 2,
            Self::InvertedLandscape => 3,
            Self::InvertedPortrait => 4,
        }
    }
}

impl From<i64> for DisplayOrientation {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Landscape,
            2 => Self::Portrait,
            3 => Self::InvertedLandscape,
            4 => Self::InvertedPortrait,
            _ => Self::Unknown,
        }
    }
}

impl From<DisplayOrientation> for i64 {
    fn from(orientation: DisplayOrientation) -> Self {
        Self::from(orientation.code())
    }
}

/// One display of the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayDeviceAttributes {
    /// Current orientation.
    pub orientation: Option<DisplayOrientation>,
    /// Brightness, 0.0–1.0.
    pub brightness: Option<f64>,
    /// Contrast, 0.0–1.0.
    pub contrast: Option<f64>,
    /// Whether the screen is blanked out.
    pub blanked: Option<bool>,
    /// Resolution along the width, in DPI.
    pub dots_per_inch_w: Option<u32>,
    /// Resolution along the height, in DPI.
    pub dots_per_inch_h: Option<u32>,
    /// Physical width in centimeters.
    pub physical_width: Option<f64>,
    /// Physical height in centimeters.
    pub physical_height: Option<f64>,
    /// Free-form description of this display.
    pub info: Option<String>,
}

/// Kind of an audio output device, integer-coded on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum AudioDeviceType {
    /// Unclassified output.
    #[default]
    Unknown,
    /// Built-in or external speaker.
    Speaker,
    /// Headphones.
    Headphones,
}

impl AudioDeviceType {
    /// The stable wire code of this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Speaker => 1,
            Self::Headphones => 2,
        }
    }
}

impl From<i64> for AudioDeviceType {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Speaker,
            2 => Self::Headphones,
            _ => Self::Unknown,
        }
    }
}

impl From<AudioDeviceType> for i64 {
    fn from(kind: AudioDeviceType) -> Self {
        Self::from(kind.code())
    }
}

/// One audio output device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioDeviceAttributes {
    /// Kind of output.
    #[serde(rename = "type")]
    pub kind: Option<AudioDeviceType>,
    /// Low end of the frequency range, in Hz.
    pub freq_range_low: Option<u32>,
    /// High end of the frequency range, in Hz.
    pub freq_range_high: Option<u32>,
    /// Current volume level.
    pub volume_level: Option<u32>,
    /// Free-form description of this device.
    pub info: Option<String>,
}

/// Kind of a printing device.
///
/// The legacy wire format assigns `Unknown` and `Inkjet` the same code, 0.
/// The collision is kept for compatibility: `Inkjet` still encodes as 0,
/// and a 0 on the wire decodes as `Unknown` since the two cannot be told
/// apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum PrintingType {
    /// Unclassified printer.
    #[default]
    Unknown,
    /// Inkjet printer. Shares wire code 0 with `Unknown`.
    Inkjet,
    /// Laser printer.
    Laser,
    /// Embossing printer.
    Embossed,
    /// Plotter.
    Plotter,
}

impl PrintingType {
    /// The stable wire code of this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unknown | Self::Inkjet => 0,
            Self::Laser => 1,
            Self::Embossed => 2,
            Self::Plotter => 3,
        }
    }
}

impl From<i64> for PrintingType {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Laser,
            2 => Self::Embossed,
            3 => Self::Plotter,
            _ => Self::Unknown,
        }
    }
}

impl From<PrintingType> for i64 {
    fn from(kind: PrintingType) -> Self {
        Self::from(kind.code())
    }
}

/// One printing device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintingDeviceAttributes {
    /// Kind of printer.
    #[serde(rename = "type")]
    pub kind: Option<PrintingType>,
    /// Print resolution in DPI.
    pub resolution: Option<u32>,
    /// Whether the device prints in color.
    pub color: Option<bool>,
    /// Free-form description of this device.
    pub info: Option<String>,
}

/// One braille display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrailleDeviceAttributes {
    /// Number of cells on the device.
    pub nb_cells: Option<u32>,
    /// Free-form description of this device.
    pub info: Option<String>,
}

/// The device's output options: displays, printers, braille displays and
/// audio outputs, each with its currently active subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputDevicesAttributes {
    /// Free-form description of this property instance.
    pub info: Option<String>,
    /// Free-form identifier of this property instance.
    pub id: Option<String>,
    /// All display devices.
    pub display_devices: Option<Vec<DisplayDeviceAttributes>>,
    /// Displays currently in use.
    pub active_display_devices: Option<Vec<DisplayDeviceAttributes>>,
    /// All printing devices.
    pub printing_devices: Option<Vec<PrintingDeviceAttributes>>,
    /// The printer currently in use.
    pub active_printing_device: Option<PrintingDeviceAttributes>,
    /// All braille displays.
    pub braille_devices: Option<Vec<BrailleDeviceAttributes>>,
    /// The braille display currently in use.
    pub active_braille_device: Option<BrailleDeviceAttributes>,
    /// All audio output devices.
    pub audio_devices: Option<Vec<AudioDeviceAttributes>>,
    /// Audio outputs currently in use.
    pub active_audio_devices: Option<Vec<AudioDeviceAttributes>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn orientation_codes_are_stable() {
        assert_eq!(DisplayOrientation::Unknown.code(), 0);
        assert_eq!(DisplayOrientation::Landscape.code(), 1);
        assert_eq!(DisplayOrientation::Portrait.code(), 2);
        assert_eq!(DisplayOrientation::InvertedLandscape.code(), 3);
        assert_eq!(DisplayOrientation::InvertedPortrait.code(), 4);
        assert_eq!(DisplayOrientation::from(7), DisplayOrientation::Unknown);
    }

    #[test]
    fn printing_type_collision_is_preserved() {
        // Unknown and Inkjet share wire code 0; decoding 0 cannot recover
        // Inkjet.
        assert_eq!(PrintingType::Unknown.code(), PrintingType::Inkjet.code());
        assert_eq!(PrintingType::Inkjet.code(), 0);
        assert_eq!(PrintingType::from(0), PrintingType::Unknown);

        assert_eq!(PrintingType::Laser.code(), 1);
        assert_eq!(PrintingType::Embossed.code(), 2);
        assert_eq!(PrintingType::Plotter.code(), 3);
        for kind in [
            PrintingType::Laser,
            PrintingType::Embossed,
            PrintingType::Plotter,
        ] {
            assert_eq!(PrintingType::from(i64::from(kind.code())), kind);
        }
    }

    #[test]
    fn display_decodes_wire_names() {
        let display: DisplayDeviceAttributes = serde_json::from_value(json!({
            "orientation": 2,
            "brightness": 0.7,
            "blanked": false,
            "dotsPerInchW": 316,
            "dotsPerInchH": 316,
            "physicalWidth": 6.5,
            "physicalHeight": 13.2,
        }))
        .unwrap();
        assert_eq!(display.orientation, Some(DisplayOrientation::Portrait));
        assert_eq!(display.dots_per_inch_w, Some(316));
        assert_eq!(display.physical_height, Some(13.2));
        assert_eq!(display.contrast, None);
    }

    #[test]
    fn aggregate_nests_actives() {
        let outputs: OutputDevicesAttributes = serde_json::from_value(json!({
            "displayDevices": [{"orientation": 1}, {"orientation": 2}],
            "activeDisplayDevices": [{"orientation": 1}],
            "activePrintingDevice": {"type": 1, "color": true},
            "audioDevices": [{"type": 2, "volumeLevel": 40}],
        }))
        .unwrap();
        assert_eq!(outputs.display_devices.as_ref().unwrap().len(), 2);
        assert_eq!(outputs.active_display_devices.as_ref().unwrap().len(), 1);
        assert_eq!(
            outputs.active_printing_device.unwrap().kind,
            Some(PrintingType::Laser)
        );
        assert_eq!(
            outputs.audio_devices.unwrap()[0].kind,
            Some(AudioDeviceType::Headphones)
        );
        assert_eq!(outputs.braille_devices, None);
    }
}
