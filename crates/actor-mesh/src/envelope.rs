//! # Envelope Types
//!
//! The value types that ride the bus: actor identity, the destination
//! selector, and the envelope itself. Envelopes are created once per
//! broadcast and never mutated; every subscription link receives its own
//! clone.

use std::fmt;
use std::sync::Arc;

/// Immutable actor identity.
///
/// Names are shared (`Arc<str>`) so that stamping a sender onto every
/// envelope and fanning envelopes out to many links never reallocates.
/// Uniqueness within a running topology is an operating assumption of the
/// mesh, not something this type enforces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActorName(Arc<str>);

impl ActorName {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for ActorName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ActorName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for ActorName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ActorName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Routing selector on an envelope: one specific actor, or everyone.
///
/// The wildcard is the default, so undirected traffic can be expressed as
/// `Destination::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Destination {
    /// Wildcard: every subscriber of the sender's stream accepts the
    /// envelope.
    #[default]
    Any,
    /// Only the subscriber with exactly this name accepts the envelope.
    Actor(ActorName),
}

impl Destination {
    /// The delivery filter evaluated by each subscription link.
    pub fn accepts(&self, name: &ActorName) -> bool {
        match self {
            Destination::Any => true,
            Destination::Actor(target) => target == name,
        }
    }
}

impl From<ActorName> for Destination {
    fn from(name: ActorName) -> Self {
        Destination::Actor(name)
    }
}

/// Immutable unit of transit: who sent it, who it is for, and the message.
#[derive(Debug, Clone)]
pub struct Envelope<M> {
    pub sender: ActorName,
    pub destination: Destination,
    pub message: M,
}

/// Bound every bus message type must meet.
///
/// Envelopes are cloned per subscriber and handled on spawned tasks, hence
/// `Clone + Send + 'static`; `Debug` feeds the per-message trace line.
pub trait Payload: Clone + fmt::Debug + Send + 'static {}

impl<T: Clone + fmt::Debug + Send + 'static> Payload for T {}
