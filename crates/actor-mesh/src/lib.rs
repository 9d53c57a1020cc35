//! # Actor Mesh
//!
//! A minimal in-process message-passing substrate: independent named actors
//! publish typed envelopes on their own outbound streams, and subscription
//! links deliver each envelope asynchronously to every subscriber whose name
//! the destination selector accepts, either a specific actor or the wildcard.
//!
//! ## Key types
//!
//! - [`Endpoint`]: the contract every mesh participant satisfies.
//! - [`Actor`]: the base participant, carrying identity, outbound stream and
//!   event counter but no reaction of its own.
//! - [`subscribe`]: installs a subscription link; filtering happens at the
//!   subscriber, so one broadcast is genuinely one-to-many.
//! - [`ThroughputObserver`]: decorator that measures a wrapped endpoint's
//!   handling rate without altering its behavior.
//! - [`Envelope`] / [`Destination`] / [`ActorName`]: the value types on the
//!   bus.
//!
//! ## Delivery model
//!
//! `broadcast` never blocks and never waits for subscribers; each link is a
//! tokio task that serializes delivery in publish order for that link only.
//! There is no persistence and no acknowledgment; an envelope nobody accepts
//! is silently dropped. See [`mock`] for a runnable wiring example and the
//! test doubles.

pub mod actor;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod link;
pub mod mock;
pub mod throughput;
pub mod tracing;

// Re-export core types for convenience
pub use actor::Actor;
pub use endpoint::Endpoint;
pub use envelope::{ActorName, Destination, Envelope, Payload};
pub use error::MeshError;
pub use link::subscribe;
pub use throughput::{RateSample, ThroughputObserver};
