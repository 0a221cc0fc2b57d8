//! Multi-shot delivery of property updates.
//!
//! A [`PropertyMonitor`] is a stream of decoded reports plus a detachable
//! cancellation handle. Cancellation signals via channel close, so a task
//! blocked on `poll_next` is woken immediately rather than noticing a flag
//! on its next update.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

use crate::attrs::{self, PropertyReport};
use crate::bridge::PayloadStream;
use crate::error::SystemInfoError;
use crate::property::PropertyId;

/// Cancels a running [`PropertyMonitor`].
///
/// Handles are cheap to clone and may be sent to other tasks; canceling any
/// clone ends delivery.
#[derive(Debug, Clone)]
pub struct MonitorHandle {
    cancel: async_channel::Sender<()>,
}

impl MonitorHandle {
    /// Stop the monitor. Idempotent.
    pub fn cancel(&self) {
        self.cancel.close();
    }

    /// Whether the monitor has been canceled or dropped.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.cancel.is_closed()
    }
}

/// An active monitor subscription.
///
/// Yields one decoded [`PropertyReport`] (or host error) per update the
/// bridge delivers. The stream ends when the host closes the subscription,
/// when a [`MonitorHandle`] cancels it, or when the monitor is dropped.
/// A canceled subscription is restarted by calling
/// [`SystemInfo::monitor`](crate::SystemInfo::monitor) again.
pub struct PropertyMonitor {
    property: PropertyId,
    payloads: PayloadStream,
    handle: MonitorHandle,
    canceled: async_channel::Receiver<()>,
    done: bool,
}

impl PropertyMonitor {
    pub(crate) fn new(property: PropertyId, payloads: PayloadStream) -> Self {
        let (cancel, canceled) = async_channel::bounded(1);
        Self {
            property,
            payloads,
            handle: MonitorHandle { cancel },
            canceled,
            done: false,
        }
    }

    /// The property this monitor was started for.
    #[must_use]
    pub const fn property(&self) -> PropertyId {
        self.property
    }

    /// A handle that cancels this monitor.
    #[must_use]
    pub fn handle(&self) -> MonitorHandle {
        self.handle.clone()
    }
}

impl Stream for PropertyMonitor {
    type Item = Result<PropertyReport, SystemInfoError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }

        // The cancel channel never carries messages; a ready poll means it
        // was closed, which also registers the waker while still open.
        if Pin::new(&mut this.canceled).poll_next(cx).is_ready() {
            this.done = true;
            return Poll::Ready(None);
        }

        match this.payloads.as_mut().poll_next(cx) {
            Poll::Ready(Some(payload)) => Poll::Ready(Some(
                payload.and_then(|value| attrs::decode(this.property, value)),
            )),
            Poll::Ready(None) => {
                this.done = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl fmt::Debug for PropertyMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyMonitor")
            .field("property", &self.property)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use serde_json::{Value, json};

    fn feed() -> (
        async_channel::Sender<Result<Value, SystemInfoError>>,
        PropertyMonitor,
    ) {
        let (tx, rx) = async_channel::unbounded();
        (tx, PropertyMonitor::new(PropertyId::Cpu, Box::pin(rx)))
    }

    #[tokio::test]
    async fn delivers_decoded_reports_in_order() {
        let (tx, mut monitor) = feed();
        tx.send(Ok(json!({"usage": 0.25}))).await.unwrap();
        tx.send(Ok(json!({"usage": 0.75}))).await.unwrap();
        drop(tx);

        let first = monitor.next().await.unwrap().unwrap();
        let PropertyReport::Cpu(cpu) = first else {
            panic!("expected a cpu report, got {first:?}");
        };
        assert_eq!(cpu.usage, Some(0.25));

        assert!(monitor.next().await.unwrap().is_ok());
        assert!(monitor.next().await.is_none());
    }

    #[tokio::test]
    async fn host_errors_do_not_end_the_stream() {
        let (tx, mut monitor) = feed();
        tx.send(Err(SystemInfoError::Timeout)).await.unwrap();
        tx.send(Ok(json!({"usage": 0.5}))).await.unwrap();

        assert_eq!(
            monitor.next().await.unwrap(),
            Err(SystemInfoError::Timeout)
        );
        assert!(monitor.next().await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn undecodable_payload_is_an_invalid_value_item() {
        let (tx, mut monitor) = feed();
        tx.send(Ok(json!("not a cpu payload"))).await.unwrap();
        tx.send(Ok(json!({"usage": 0.5}))).await.unwrap();

        assert_eq!(
            monitor.next().await.unwrap(),
            Err(SystemInfoError::InvalidValue)
        );
        assert!(monitor.next().await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn cancel_ends_the_stream() {
        let (tx, mut monitor) = feed();
        let handle = monitor.handle();
        assert!(!handle.is_canceled());

        handle.cancel();
        assert!(handle.is_canceled());
        assert!(monitor.next().await.is_none());

        // Payloads queued after cancellation are never delivered.
        let _ = tx.send(Ok(json!({"usage": 0.5}))).await;
        assert!(monitor.next().await.is_none());
    }

    #[tokio::test]
    async fn cancel_wakes_a_pending_poll() {
        let (_tx, mut monitor) = feed();
        let handle = monitor.handle();

        let poller = tokio::spawn(async move { monitor.next().await });
        handle.cancel();
        assert!(poller.await.unwrap().is_none());
    }

    #[tokio::test]
    async fn dropping_the_monitor_marks_handles_canceled() {
        let (_tx, monitor) = feed();
        let handle = monitor.handle();
        drop(monitor);
        assert!(handle.is_canceled());
    }
}
