use serde::{Deserialize, Serialize};

/// One audio codec the device ships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioCodecAttributes {
    /// Free-form description of this codec.
    pub info: Option<String>,
    /// Free-form identifier of this codec.
    pub id: Option<String>,
    /// Space-separated list of supported MIME types.
    pub comp_formats: Option<String>,
    /// Whether the device can encode with this codec.
    pub encode: Option<bool>,
    /// Whether the device can decode with this codec.
    pub decode: Option<bool>,
}

/// One video codec the device ships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoCodecAttributes {
    /// Free-form description of this codec.
    pub info: Option<String>,
    /// Free-form identifier of this codec.
    pub id: Option<String>,
    /// Space-separated list of supported MIME types.
    pub comp_formats: Option<String>,
    /// Container format names this codec can be muxed into.
    pub container_formats: Option<Vec<String>>,
    /// Whether hardware acceleration is available.
    pub hw_accel: Option<bool>,
    /// Profiles available for this codec.
    pub profiles: Option<Vec<String>>,
    /// Frame types the codec supports.
    pub frame_types: Option<Vec<String>>,
    /// Rate-control options the codec supports.
    pub rate_types: Option<Vec<String>>,
}

/// The device's audio and video codec catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvCodecsAttributes {
    /// Free-form description of this property instance.
    pub info: Option<String>,
    /// Free-form identifier of this property instance.
    pub id: Option<String>,
    /// Audio codecs.
    pub audio_codecs: Option<Vec<AudioCodecAttributes>>,
    /// Video codecs.
    pub video_codecs: Option<Vec<VideoCodecAttributes>>,
}
