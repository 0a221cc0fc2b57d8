use serde::{Deserialize, Serialize};

/// Kind of a pointing device, integer-coded on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum PointerType {
    /// Unclassified pointer.
    #[default]
    Unknown,
    /// Mouse.
    Mouse,
    /// Touchscreen.
    Touchscreen,
    /// Light pen.
    Lightpen,
    /// Gesture recognizer.
    Gesture,
    /// Graphics tablet.
    Tablet,
}

impl PointerType {
    /// The stable wire code of this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Mouse => 1,
            Self::Touchscreen => 2,
            Self::Lightpen => 3,
            Self::Gesture => 4,
            Self::Tablet => 5,
        }
    }
}

impl From<i64> for PointerType {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Mouse,
            2 => Self::Touchscreen,
            3 => Self::Lightpen,
            4 => Self::Gesture,
            5 => Self::Tablet,
            _ => Self::Unknown,
        }
    }
}

impl From<PointerType> for i64 {
    fn from(kind: PointerType) -> Self {
        Self::from(kind.code())
    }
}

/// One pointing device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointerAttributes {
    /// Kind of pointer.
    #[serde(rename = "type")]
    pub kind: Option<PointerType>,
    /// Whether the device supports multi-touch.
    pub supports_multi_touch: Option<bool>,
    /// Free-form description of this device.
    pub info: Option<String>,
}

/// Kind of a keyboard, integer-coded on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum KeyboardType {
    /// Unclassified keyboard.
    #[default]
    Unknown,
    /// Full keyboard.
    Keyboard,
    /// Numeric or phone keypad.
    Keypad,
}

impl KeyboardType {
    /// The stable wire code of this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Keyboard => 1,
            Self::Keypad => 2,
        }
    }
}

impl From<i64> for KeyboardType {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Keyboard,
            2 => Self::Keypad,
            _ => Self::Unknown,
        }
    }
}

impl From<KeyboardType> for i64 {
    fn from(kind: KeyboardType) -> Self {
        Self::from(kind.code())
    }
}

/// One keyboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyboardAttributes {
    /// Kind of keyboard.
    #[serde(rename = "type")]
    pub kind: Option<KeyboardType>,
    /// Whether this is a hardware keyboard.
    pub is_hardware: Option<bool>,
    /// Free-form description of this device.
    pub info: Option<String>,
}

/// One camera.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraAttributes {
    /// Whether the camera records video.
    pub supports_video: Option<bool>,
    /// Whether the camera has a flash.
    pub has_flash: Option<bool>,
    /// Sensor resolution in pixels.
    pub sensor_pixels: Option<u64>,
    /// Maximum zoom factor.
    pub max_zoom_factor: Option<f64>,
}

/// Kind of a microphone, integer-coded on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum MicrophoneType {
    /// Unclassified input.
    #[default]
    Unknown,
    /// Microphone.
    Microphone,
    /// Line-in jack.
    LineIn,
}

impl MicrophoneType {
    /// The stable wire code of this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Microphone => 1,
            Self::LineIn => 2,
        }
    }
}

impl From<i64> for MicrophoneType {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Microphone,
            2 => Self::LineIn,
            _ => Self::Unknown,
        }
    }
}

impl From<MicrophoneType> for i64 {
    fn from(kind: MicrophoneType) -> Self {
        Self::from(kind.code())
    }
}

/// One microphone or line input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MicrophoneAttributes {
    /// Kind of input.
    #[serde(rename = "type")]
    pub kind: Option<MicrophoneType>,
    /// Low end of the frequency range, in Hz.
    pub freq_range_low: Option<u32>,
    /// High end of the frequency range, in Hz.
    pub freq_range_high: Option<u32>,
    /// Free-form description of this device.
    pub info: Option<String>,
    /// Name of the microphone.
    pub name: Option<String>,
    /// Space-separated list of MIME types it can record.
    pub types: Option<String>,
}

/// The device's input options: pointers, keyboards, cameras and microphones,
/// each with its currently active subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputDevicesAttributes {
    /// Free-form description of this property instance.
    pub info: Option<String>,
    /// Free-form identifier of this property instance.
    pub id: Option<String>,
    /// All pointing devices.
    pub pointing_devices: Option<Vec<PointerAttributes>>,
    /// Pointing devices currently in use.
    pub active_pointing_devices: Option<Vec<PointerAttributes>>,
    /// All keyboards.
    pub keyboards: Option<Vec<KeyboardAttributes>>,
    /// Keyboards currently in use.
    pub active_keyboards: Option<Vec<KeyboardAttributes>>,
    /// All cameras.
    pub cameras: Option<Vec<CameraAttributes>>,
    /// Cameras currently in use.
    pub active_cameras: Option<Vec<CameraAttributes>>,
    /// All microphones.
    pub microphones: Option<Vec<MicrophoneAttributes>>,
    /// Microphones currently in use.
    pub active_microphones: Option<Vec<MicrophoneAttributes>>,
}
