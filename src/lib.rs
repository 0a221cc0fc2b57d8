//! Typed access to device and system properties over a host bridge.
//!
//! This crate defines the data model for system properties (power, CPU,
//! thermal, network, ambient sensors, AV codecs, storage, output and input
//! devices) and a small service, [`SystemInfo`], exposing three verbs:
//!
//! - [`get`](SystemInfo::get) — a point-in-time read of one property,
//! - [`monitor`](SystemInfo::monitor) — a cancellable stream of updates,
//! - [`has`](SystemInfo::has) — a synchronous capability probe.
//!
//! No sensor is read here. Every call crosses the [`Bridge`] trait into a
//! host platform that owns the actual introspection, event subscription and
//! threshold evaluation. The crate's job is the schema catalog, the wire
//! shapes crossing that boundary, and the async delivery machinery.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use futures::StreamExt;
//! use syskit::{MonitorOptions, PropertyId, PropertyReport, SystemInfo};
//!
//! let system = SystemInfo::new(Arc::new(host_bridge));
//!
//! if system.has(PropertyId::Power) {
//!     if let PropertyReport::Power(power) = system.get(PropertyId::Power).await? {
//!         println!("battery at {:?}%", power.level);
//!     }
//! }
//!
//! // Notify when battery level drops below 10%; thresholds are evaluated
//! // by the host, this layer only forwards them.
//! let options = MonitorOptions {
//!     low_threshold: Some(10.0),
//!     threshold_target: Some("level".into()),
//!     ..MonitorOptions::default()
//! };
//! let mut monitor = system.monitor_with(PropertyId::Power, &options)?;
//! let handle = monitor.handle();
//! while let Some(report) = monitor.next().await {
//!     println!("{report:?}");
//! }
//! ```

#![warn(missing_docs)]

pub mod attrs;
mod bridge;
mod error;
mod monitor;
mod options;
mod property;

use std::fmt;
use std::sync::Arc;

pub use attrs::PropertyReport;
pub use bridge::{Bridge, PayloadStream};
pub use error::SystemInfoError;
pub use monitor::{MonitorHandle, PropertyMonitor};
pub use options::MonitorOptions;
pub use property::PropertyId;

/// Entry point for system property queries.
///
/// A `SystemInfo` holds a shared handle to the host [`Bridge`]. Construct one
/// when the host session starts and hand it (or clones, which share the same
/// bridge) to consumers; there is no ambient global instance.
#[derive(Clone)]
pub struct SystemInfo {
    bridge: Arc<dyn Bridge>,
}

impl SystemInfo {
    /// Create a service backed by the given bridge.
    #[must_use]
    pub fn new(bridge: Arc<dyn Bridge>) -> Self {
        Self { bridge }
    }

    /// Read the current value of a property.
    ///
    /// # Errors
    ///
    /// Returns the [`SystemInfoError`] reported by the bridge, or
    /// [`SystemInfoError::InvalidValue`] if the payload does not match the
    /// property's schema.
    pub async fn get(&self, property: PropertyId) -> Result<PropertyReport, SystemInfoError> {
        self.dispatch_get(property, None).await
    }

    /// Read the current value of a property, passing request options through
    /// to the bridge.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn get_with(
        &self,
        property: PropertyId,
        options: &MonitorOptions,
    ) -> Result<PropertyReport, SystemInfoError> {
        self.dispatch_get(property, Some(options)).await
    }

    /// Start monitoring a property.
    ///
    /// The returned [`PropertyMonitor`] yields a report for every update the
    /// bridge delivers, until the host ends the subscription or the monitor
    /// is canceled. Call `monitor` again to restart a canceled subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the bridge refuses the subscription.
    pub fn monitor(&self, property: PropertyId) -> Result<PropertyMonitor, SystemInfoError> {
        self.dispatch_monitor(property, None)
    }

    /// Start monitoring a property with options.
    ///
    /// Threshold semantics (`high_threshold`, `low_threshold`,
    /// `threshold_target`, `timeout`) are interpreted entirely by the bridge;
    /// this layer forwards them verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the bridge refuses the subscription.
    pub fn monitor_with(
        &self,
        property: PropertyId,
        options: &MonitorOptions,
    ) -> Result<PropertyMonitor, SystemInfoError> {
        self.dispatch_monitor(property, Some(options))
    }

    /// Whether the host can report the given property.
    ///
    /// Purely synchronous; nothing is dispatched asynchronously and no
    /// payload is produced.
    #[must_use]
    pub fn has(&self, property: PropertyId) -> bool {
        self.bridge.supports(property)
    }

    async fn dispatch_get(
        &self,
        property: PropertyId,
        options: Option<&MonitorOptions>,
    ) -> Result<PropertyReport, SystemInfoError> {
        let args = bridge::wire_args(property, options);
        log::debug!("get {property}");
        let payload = self.bridge.request(property, args).await?;
        attrs::decode(property, payload)
    }

    fn dispatch_monitor(
        &self,
        property: PropertyId,
        options: Option<&MonitorOptions>,
    ) -> Result<PropertyMonitor, SystemInfoError> {
        let args = bridge::wire_args(property, options);
        log::debug!("monitor {property}");
        let payloads = self.bridge.watch(property, args)?;
        Ok(PropertyMonitor::new(property, payloads))
    }
}

impl fmt::Debug for SystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemInfo").finish_non_exhaustive()
    }
}
