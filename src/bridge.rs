//! The boundary between this crate and the host platform.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
use serde_json::Value;

use crate::error::SystemInfoError;
use crate::options::MonitorOptions;
use crate::property::PropertyId;

/// A boxed stream of raw payloads delivered for a monitor subscription.
pub type PayloadStream = Pin<Box<dyn Stream<Item = Result<Value, SystemInfoError>> + Send>>;

/// The host side of a system property session.
///
/// A bridge owns everything this crate declares out of scope: reading
/// hardware, subscribing to OS events, evaluating thresholds, enforcing
/// timeouts. Implementations range from an FFI shim into a native shell to a
/// canned in-process table (see `demos/demo.rs`).
///
/// The three methods correspond to the three wire verbs: [`request`] is
/// `get`, [`watch`] is `monitor`, [`supports`] is `has`. For `request` and
/// `watch` the `args` value is the full serialized argument array,
/// `[propertyId, options]`, so a bridge that fronts a generic host dispatcher
/// can forward it without reassembling anything; `has` carries no options and
/// receives the property alone.
///
/// [`request`]: Bridge::request
/// [`watch`]: Bridge::watch
/// [`supports`]: Bridge::supports
#[async_trait]
pub trait Bridge: Send + Sync {
    /// Resolve a one-shot read of `property` with its raw payload.
    ///
    /// # Errors
    ///
    /// Host-reported failures, as one of the four [`SystemInfoError`] kinds.
    async fn request(&self, property: PropertyId, args: Value)
    -> Result<Value, SystemInfoError>;

    /// Open a multi-shot subscription to `property`.
    ///
    /// The stream yields a raw payload (or a host error) per update and ends
    /// when the host closes the subscription. Dropping the stream cancels it.
    ///
    /// # Errors
    ///
    /// Returns an error if the subscription cannot be opened at all.
    fn watch(&self, property: PropertyId, args: Value) -> Result<PayloadStream, SystemInfoError>;

    /// Whether the host can report `property`. Synchronous by contract.
    fn supports(&self, property: PropertyId) -> bool;
}

/// Build the wire argument array `[propertyId, options]`.
///
/// The options position is JSON `null` when the caller passed none, matching
/// an omitted argument on the wire.
pub(crate) fn wire_args(property: PropertyId, options: Option<&MonitorOptions>) -> Value {
    let options = options
        .and_then(|options| serde_json::to_value(options).ok())
        .unwrap_or(Value::Null);
    Value::Array(vec![Value::String(property.as_str().to_owned()), options])
}
