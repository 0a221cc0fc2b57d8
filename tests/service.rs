//! End-to-end tests of the `SystemInfo` service against in-memory bridges.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::StreamExt;
use serde_json::{Value, json};
use syskit::{
    Bridge, MonitorOptions, PayloadStream, PropertyId, PropertyReport, SystemInfo, SystemInfoError,
};

/// Records every dispatch and answers `get` with a fixed payload.
struct RecordingBridge {
    requests: Mutex<Vec<(PropertyId, Value)>>,
    response: Value,
}

impl RecordingBridge {
    fn new(response: Value) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response,
        }
    }

    fn requests(&self) -> Vec<(PropertyId, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bridge for RecordingBridge {
    async fn request(
        &self,
        property: PropertyId,
        args: Value,
    ) -> Result<Value, SystemInfoError> {
        self.requests.lock().unwrap().push((property, args));
        Ok(self.response.clone())
    }

    fn watch(&self, _property: PropertyId, _args: Value) -> Result<PayloadStream, SystemInfoError> {
        Err(SystemInfoError::InformationUnavailable)
    }

    fn supports(&self, _property: PropertyId) -> bool {
        true
    }
}

/// Fails every dispatch with a fixed error.
struct FailingBridge(SystemInfoError);

#[async_trait]
impl Bridge for FailingBridge {
    async fn request(
        &self,
        _property: PropertyId,
        _args: Value,
    ) -> Result<Value, SystemInfoError> {
        Err(self.0)
    }

    fn watch(&self, _property: PropertyId, _args: Value) -> Result<PayloadStream, SystemInfoError> {
        Err(self.0)
    }

    fn supports(&self, _property: PropertyId) -> bool {
        false
    }
}

/// Streams queued payloads to every `monitor` subscription.
struct StreamingBridge {
    payloads: Vec<Result<Value, SystemInfoError>>,
    subscriptions: AtomicUsize,
}

impl StreamingBridge {
    fn new(payloads: Vec<Result<Value, SystemInfoError>>) -> Self {
        Self {
            payloads,
            subscriptions: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Bridge for StreamingBridge {
    async fn request(
        &self,
        _property: PropertyId,
        _args: Value,
    ) -> Result<Value, SystemInfoError> {
        Err(SystemInfoError::InformationUnavailable)
    }

    fn watch(&self, _property: PropertyId, _args: Value) -> Result<PayloadStream, SystemInfoError> {
        self.subscriptions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::pin(futures::stream::iter(self.payloads.clone())))
    }

    fn supports(&self, _property: PropertyId) -> bool {
        true
    }
}

#[tokio::test]
async fn get_dispatches_property_and_null_options() {
    let bridge = Arc::new(RecordingBridge::new(json!({"level": 42.0})));
    let system = SystemInfo::new(bridge.clone());

    let report = system.get(PropertyId::Power).await.unwrap();
    let PropertyReport::Power(power) = report else {
        panic!("expected a power report");
    };
    assert_eq!(power.level, Some(42.0));

    assert_eq!(
        bridge.requests(),
        vec![(PropertyId::Power, json!(["power", Value::Null]))]
    );
}

#[tokio::test]
async fn get_with_serializes_options_into_the_args() {
    let bridge = Arc::new(RecordingBridge::new(json!({"usage": 0.9})));
    let system = SystemInfo::new(bridge.clone());

    let options = MonitorOptions {
        high_threshold: Some(0.8),
        id: Some("cpu0".into()),
        ..MonitorOptions::default()
    };
    system.get_with(PropertyId::Cpu, &options).await.unwrap();

    assert_eq!(
        bridge.requests(),
        vec![(
            PropertyId::Cpu,
            json!(["cpu", {"highThreshold": 0.8, "id": "cpu0"}])
        )]
    );
}

#[tokio::test]
async fn bridge_errors_surface_verbatim() {
    let system = SystemInfo::new(Arc::new(FailingBridge(SystemInfoError::PermissionDenied)));
    assert_eq!(
        system.get(PropertyId::Power).await,
        Err(SystemInfoError::PermissionDenied)
    );
}

#[tokio::test]
async fn mismatched_get_payload_is_invalid_value() {
    let bridge = Arc::new(RecordingBridge::new(json!(["not", "a", "power", "object"])));
    let system = SystemInfo::new(bridge);
    assert_eq!(
        system.get(PropertyId::Power).await,
        Err(SystemInfoError::InvalidValue)
    );
}

#[test]
fn has_is_synchronous_and_dispatches_nothing() {
    let bridge = Arc::new(RecordingBridge::new(Value::Null));
    let system = SystemInfo::new(bridge.clone());

    assert!(system.has(PropertyId::Power));
    assert!(bridge.requests().is_empty());

    let unsupported = SystemInfo::new(Arc::new(FailingBridge(SystemInfoError::Timeout)));
    assert!(!unsupported.has(PropertyId::Proximity));
}

#[tokio::test]
async fn monitor_delivers_until_the_host_ends() {
    let bridge = Arc::new(StreamingBridge::new(vec![
        Ok(json!({"level": 20.0, "isCharging": false})),
        Ok(json!({"level": 19.5, "isCharging": false})),
    ]));
    let system = SystemInfo::new(bridge);

    let mut monitor = system.monitor(PropertyId::Power).unwrap();
    assert_eq!(monitor.property(), PropertyId::Power);

    let mut levels = Vec::new();
    while let Some(report) = monitor.next().await {
        let PropertyReport::Power(power) = report.unwrap() else {
            panic!("expected power reports");
        };
        levels.push(power.level.unwrap());
    }
    assert_eq!(levels, vec![20.0, 19.5]);
}

#[tokio::test]
async fn monitor_restarts_as_a_fresh_subscription() {
    let bridge = Arc::new(StreamingBridge::new(vec![Ok(json!({"usage": 0.5}))]));
    let system = SystemInfo::new(bridge.clone());

    let mut first = system.monitor(PropertyId::Cpu).unwrap();
    first.handle().cancel();
    assert!(first.next().await.is_none());

    let mut second = system.monitor(PropertyId::Cpu).unwrap();
    assert!(second.next().await.unwrap().is_ok());
    assert_eq!(bridge.subscriptions.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn monitor_forwards_threshold_options_verbatim() {
    struct ArgsProbe(Mutex<Option<Value>>);

    #[async_trait]
    impl Bridge for ArgsProbe {
        async fn request(
            &self,
            _property: PropertyId,
            _args: Value,
        ) -> Result<Value, SystemInfoError> {
            Err(SystemInfoError::InformationUnavailable)
        }

        fn watch(
            &self,
            _property: PropertyId,
            args: Value,
        ) -> Result<PayloadStream, SystemInfoError> {
            *self.0.lock().unwrap() = Some(args);
            Ok(Box::pin(futures::stream::empty()))
        }

        fn supports(&self, _property: PropertyId) -> bool {
            true
        }
    }

    let bridge = Arc::new(ArgsProbe(Mutex::new(None)));
    let system = SystemInfo::new(bridge.clone());

    let options = MonitorOptions {
        low_threshold: Some(10.0),
        threshold_target: Some("level".into()),
        timeout: Some(30_000),
        ..MonitorOptions::default()
    };
    let _monitor = system.monitor_with(PropertyId::Power, &options).unwrap();

    assert_eq!(
        bridge.0.lock().unwrap().take().unwrap(),
        json!([
            "power",
            {"lowThreshold": 10.0, "thresholdTarget": "level", "timeout": 30_000}
        ])
    );
}

#[tokio::test]
async fn refused_subscription_is_an_error() {
    let system = SystemInfo::new(Arc::new(FailingBridge(
        SystemInfoError::InformationUnavailable,
    )));
    assert!(matches!(
        system.monitor(PropertyId::AmbientNoise),
        Err(SystemInfoError::InformationUnavailable)
    ));
}
