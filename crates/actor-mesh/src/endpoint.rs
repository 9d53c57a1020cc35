//! # Endpoint Contract
//!
//! The `Endpoint` trait is the contract every mesh participant satisfies:
//! base actors, domain variants built on top of them, and decorators that
//! wrap either. The delivery machinery in [`crate::link`] is written purely
//! against this trait, so anything implementing it can publish, subscribe and
//! be subscribed to, including wrappers that intercept `handle_message`
//! without touching the identity or the stream of the endpoint they wrap.

use crate::envelope::{ActorName, Destination, Envelope, Payload};
use crate::error::MeshError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// A named endpoint that can emit and receive messages.
///
/// # Contract
///
/// * `broadcast` never blocks and never fails; with nobody tapping the
///   stream the envelope is silently dropped.
/// * `handle_message` is invoked by subscription links only for envelopes
///   that passed the destination filter. Implementations must bump their
///   event counter before running any fallible reaction, so that a failed
///   reaction cannot break the counter's monotonicity.
/// * The event counter is diagnostic: it orders nothing and deduplicates
///   nothing.
#[async_trait]
pub trait Endpoint<M: Payload>: Send + Sync + 'static {
    /// The endpoint's immutable identity.
    fn name(&self) -> &ActorName;

    /// Number of messages this endpoint has successfully handled.
    fn event_id(&self) -> u64;

    /// Taps the endpoint's outbound stream.
    ///
    /// Each call returns a fresh receiver that observes only envelopes
    /// broadcast after the call; there is no replay.
    fn outbound(&self) -> broadcast::Receiver<Envelope<M>>;

    /// Publishes one envelope, stamped with this endpoint's name, on its own
    /// outbound stream. Fire-and-forget.
    fn broadcast(&self, message: M, destination: Destination);

    /// Inbound delivery.
    ///
    /// An `Err` means the envelope was not processed; the delivering link
    /// logs it and moves on.
    async fn handle_message(&self, sender: ActorName, message: M) -> Result<(), MeshError>;

    /// Binds this endpoint to `publisher`'s outbound stream.
    ///
    /// Convenience over [`crate::link::subscribe`]; see there for the
    /// delivery rules and the duplicate-subscription caveat.
    fn subscribe(self: Arc<Self>, publisher: &dyn Endpoint<M>) -> JoinHandle<()>
    where
        Self: Sized,
    {
        crate::link::subscribe(self, publisher)
    }
}
