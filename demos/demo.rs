//! Queries a canned in-process bridge and prints the reports.
//!
//! Run with `cargo run --example demo`.

use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use serde_json::{Value, json};
use syskit::{
    Bridge, MonitorOptions, PayloadStream, PropertyId, PropertyReport, SystemInfo, SystemInfoError,
};

/// A bridge that answers from fixed tables, the way a host platform without
/// live introspection would.
struct CannedBridge;

fn codec_catalog() -> Value {
    json!({
        "audioCodecs": [
            {"compFormats": "AAC LC/LTP", "encode": false, "decode": true},
            {"compFormats": "AMR-NB", "encode": true, "decode": true},
            {"compFormats": "MP3", "encode": false, "decode": true},
            {"compFormats": "Ogg Vorbis", "encode": false, "decode": true},
            {"compFormats": "PCM/WAVE", "encode": false, "decode": true},
        ],
        "videoCodecs": [
            {"compFormats": "video/H263", "containerFormats": ["3GPP", "MPEG-4"], "hwAccel": true},
            {"compFormats": "video/h264", "containerFormats": ["3GPP", "MPEG-4"], "hwAccel": true},
            {"compFormats": "video/mp4", "containerFormats": ["3GPP"], "hwAccel": true},
        ],
    })
}

#[async_trait]
impl Bridge for CannedBridge {
    async fn request(&self, property: PropertyId, _args: Value) -> Result<Value, SystemInfoError> {
        match property {
            PropertyId::Power => Ok(json!({
                "level": 87.0,
                "timeRemaining": 5400,
                "isBattery": true,
                "isCharging": false,
            })),
            PropertyId::AvCodecs => Ok(codec_catalog()),
            PropertyId::Storage => Ok(json!([
                {
                    "type": 4,
                    "isWritable": true,
                    "capacity": 32_000_000_000u64,
                    "availableCapacity": 11_500_000_000u64,
                    "isRemoveable": false,
                },
                {
                    "type": 4,
                    "isWritable": true,
                    "capacity": 128_000_000_000u64,
                    "availableCapacity": 97_000_000_000u64,
                    "isRemoveable": true,
                },
            ])),
            _ => Err(SystemInfoError::InformationUnavailable),
        }
    }

    fn watch(&self, property: PropertyId, _args: Value) -> Result<PayloadStream, SystemInfoError> {
        if property != PropertyId::Power {
            return Err(SystemInfoError::InformationUnavailable);
        }
        let updates = [87.0, 86.5, 86.0].map(|level| {
            Ok(json!({"level": level, "isBattery": true, "isCharging": false}))
        });
        Ok(Box::pin(futures::stream::iter(updates)))
    }

    fn supports(&self, property: PropertyId) -> bool {
        matches!(
            property,
            PropertyId::Power | PropertyId::AvCodecs | PropertyId::Storage
        )
    }
}

#[tokio::main]
async fn main() {
    let system = SystemInfo::new(Arc::new(CannedBridge));

    println!("Capability probes:");
    for property in PropertyId::ALL {
        println!("  {property}: {}", system.has(property));
    }

    match system.get(PropertyId::Power).await {
        Ok(PropertyReport::Power(power)) => {
            println!(
                "Power: {:?}% ({:?}s remaining, charging: {:?})",
                power.level, power.time_remaining, power.is_charging
            );
        }
        other => println!("Power: {other:?}"),
    }

    if let Ok(PropertyReport::AvCodecs(codecs)) = system.get(PropertyId::AvCodecs).await {
        for codec in codecs.audio_codecs.unwrap_or_default() {
            println!(
                "Audio codec: {} (decode: {:?})",
                codec.comp_formats.as_deref().unwrap_or("?"),
                codec.decode
            );
        }
        for codec in codecs.video_codecs.unwrap_or_default() {
            println!(
                "Video codec: {} in {:?}",
                codec.comp_formats.as_deref().unwrap_or("?"),
                codec.container_formats.unwrap_or_default()
            );
        }
    }

    if let Ok(PropertyReport::Storage(units)) = system.get(PropertyId::Storage).await {
        for unit in units {
            println!(
                "Storage unit: {:?} bytes free of {:?} (removable: {:?})",
                unit.available_capacity, unit.capacity, unit.is_removeable
            );
        }
    }

    // Watch the battery drain; thresholds would be evaluated by the host.
    let options = MonitorOptions {
        low_threshold: Some(10.0),
        threshold_target: Some("level".into()),
        ..MonitorOptions::default()
    };
    let mut monitor = system
        .monitor_with(PropertyId::Power, &options)
        .expect("power is monitorable");
    while let Some(report) = monitor.next().await {
        if let Ok(PropertyReport::Power(power)) = report {
            println!("Power update: {:?}%", power.level);
        }
    }
}
