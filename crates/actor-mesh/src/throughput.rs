//! # Throughput Observer
//!
//! A transparent decorator measuring how fast a wrapped endpoint handles
//! messages. It satisfies the full [`Endpoint`] contract by forwarding every
//! operation to the wrapped endpoint; the only thing it adds is a counting
//! window on the inbound path. Subscribing the observer in place of the
//! wrapped endpoint is therefore behavior-preserving: the same identity and
//! the same replies, with one rate sample per elapsed window on top.
//!
//! Sampling is arrival-driven: the window is checked when a message is
//! handled, never by a timer, so an idle endpoint emits nothing.

use crate::endpoint::Endpoint;
use crate::envelope::{ActorName, Destination, Envelope, Payload};
use crate::error::MeshError;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use tokio::sync::mpsc;
use tracing::info;

/// Default measurement window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(1000);

/// One throughput measurement: `count` messages handled over `elapsed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSample {
    /// Messages handled in the window, the one that closed it included.
    pub count: u64,
    /// Actual window length; at least the configured window, longer when
    /// arrivals were sparse around the boundary.
    pub elapsed: Duration,
}

impl RateSample {
    /// Handled messages per millisecond.
    pub fn per_milli(&self) -> f64 {
        self.count as f64 / (self.elapsed.as_secs_f64() * 1000.0)
    }

    /// Handled messages per second.
    pub fn per_second(&self) -> f64 {
        self.count as f64 / self.elapsed.as_secs_f64()
    }
}

struct Window {
    count: u64,
    opened_at: Instant,
}

/// Decorator counting handled messages and emitting one [`RateSample`] per
/// elapsed window.
///
/// Identity is never cached: `name`, `event_id`, `outbound` and `broadcast`
/// all read through to the wrapped endpoint live. If the wrapped handler
/// fails, the failure propagates unchanged and the failed message is not
/// counted.
pub struct ThroughputObserver<M: Payload> {
    inner: Arc<dyn Endpoint<M>>,
    window_len: Duration,
    window: Mutex<Window>,
    samples: Option<mpsc::UnboundedSender<RateSample>>,
}

impl<M: Payload> ThroughputObserver<M> {
    /// Wraps `inner` with the default one-second window.
    pub fn new(inner: Arc<dyn Endpoint<M>>) -> Self {
        Self::with_window(inner, DEFAULT_WINDOW)
    }

    /// Wraps `inner` with a custom window. `window` must be non-zero.
    pub fn with_window(inner: Arc<dyn Endpoint<M>>, window: Duration) -> Self {
        assert!(!window.is_zero(), "throughput window must be non-zero");
        Self {
            inner,
            window_len: window,
            window: Mutex::new(Window {
                count: 0,
                opened_at: Instant::now(),
            }),
            samples: None,
        }
    }

    /// Additionally forwards every emitted sample to `sink`.
    ///
    /// Samples are always logged at `info!`; the sink is for consumers that
    /// want the numbers, tests first among them. A dropped receiver is
    /// ignored.
    pub fn with_sample_sink(mut self, sink: mpsc::UnboundedSender<RateSample>) -> Self {
        self.samples = Some(sink);
        self
    }
}

#[async_trait]
impl<M: Payload> Endpoint<M> for ThroughputObserver<M> {
    fn name(&self) -> &ActorName {
        self.inner.name()
    }

    fn event_id(&self) -> u64 {
        self.inner.event_id()
    }

    fn outbound(&self) -> broadcast::Receiver<Envelope<M>> {
        self.inner.outbound()
    }

    fn broadcast(&self, message: M, destination: Destination) {
        self.inner.broadcast(message, destination)
    }

    async fn handle_message(&self, sender: ActorName, message: M) -> Result<(), MeshError> {
        self.inner.handle_message(sender, message).await?;

        let mut window = self.window.lock().unwrap();
        window.count += 1;
        let elapsed = window.opened_at.elapsed();
        if elapsed >= self.window_len {
            let sample = RateSample {
                count: window.count,
                elapsed,
            };
            info!(
                actor = %self.inner.name(),
                count = sample.count,
                elapsed_ms = elapsed.as_millis() as u64,
                rate_per_ms = sample.per_milli(),
                "throughput"
            );
            if let Some(sink) = &self.samples {
                let _ = sink.send(sample);
            }
            window.count = 0;
            window.opened_at = Instant::now();
        }
        Ok(())
    }
}
