//! # Base Actor
//!
//! `Actor<M>` is the plain mesh participant: it owns its outbound stream and
//! its event counter, traces every handled message, and reacts to nothing.
//! Domain endpoints embed one and delegate to it rather than reimplementing
//! the bookkeeping (see the ping-pong sample crate for the canonical
//! layering).

use crate::endpoint::Endpoint;
use crate::envelope::{ActorName, Destination, Envelope, Payload};
use crate::error::MeshError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::trace;

/// Default capacity of an actor's outbound stream.
///
/// Each subscription link reads the stream at its own pace; a link that
/// falls further behind than this many envelopes skips the overwritten ones
/// (the link logs how many). An unbounded queue would never skip, at the
/// price of unbounded memory per publisher.
pub const DEFAULT_STREAM_CAPACITY: usize = 1024;

/// A named endpoint with no reaction of its own.
///
/// Handling a message increments the event counter and emits one trace
/// line; that is all. The actor is the single writer of its outbound
/// stream, and envelopes are immutable once emitted, so the type is freely
/// shareable across tasks.
pub struct Actor<M: Payload> {
    name: ActorName,
    outbound: broadcast::Sender<Envelope<M>>,
    event_id: AtomicU64,
}

impl<M: Payload> Actor<M> {
    /// Creates an actor with the default stream capacity.
    pub fn new(name: impl Into<ActorName>) -> Self {
        Self::with_capacity(name, DEFAULT_STREAM_CAPACITY)
    }

    /// Creates an actor whose outbound stream buffers up to `capacity`
    /// envelopes per lagging subscriber.
    pub fn with_capacity(name: impl Into<ActorName>, capacity: usize) -> Self {
        let (outbound, _) = broadcast::channel(capacity);
        Self {
            name: name.into(),
            outbound,
            event_id: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl<M: Payload> Endpoint<M> for Actor<M> {
    fn name(&self) -> &ActorName {
        &self.name
    }

    fn event_id(&self) -> u64 {
        self.event_id.load(Ordering::Relaxed)
    }

    fn outbound(&self) -> broadcast::Receiver<Envelope<M>> {
        self.outbound.subscribe()
    }

    fn broadcast(&self, message: M, destination: Destination) {
        let envelope = Envelope {
            sender: self.name.clone(),
            destination,
            message,
        };
        // Err here only means nobody is tapping the stream right now;
        // broadcast is fire-and-forget, so the envelope is simply dropped.
        let _ = self.outbound.send(envelope);
    }

    async fn handle_message(&self, sender: ActorName, message: M) -> Result<(), MeshError> {
        let event_id = self.event_id.fetch_add(1, Ordering::Relaxed) + 1;
        trace!(actor = %self.name, event_id, sender = %sender, message = ?message, "handled");
        Ok(())
    }
}
