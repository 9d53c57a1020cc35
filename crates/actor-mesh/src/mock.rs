//! # Mock Endpoint
//!
//! Test double for delivery assertions. `MockEndpoint` behaves like a base
//! [`Actor`] (same identity, stream and counter) but additionally records
//! every accepted delivery and signals each one on a channel, so tests await
//! deliveries instead of sleeping:
//!
//! ```
//! use actor_mesh::mock::MockEndpoint;
//! use actor_mesh::{Actor, Destination, Endpoint};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let publisher = Arc::new(Actor::<&str>::new("pub"));
//!     let (listener, mut deliveries) = MockEndpoint::<&str>::new("sub");
//!     listener.clone().subscribe(publisher.as_ref());
//!
//!     publisher.broadcast("hello", Destination::Any);
//!
//!     let (sender, message) = deliveries.recv().await.unwrap();
//!     assert_eq!(sender, "pub");
//!     assert_eq!(message, "hello");
//! }
//! ```
//!
//! For failure-path tests, [`MockEndpoint::fail_next`] arms one injected
//! handler error; the failed delivery is neither counted nor recorded.

use crate::actor::Actor;
use crate::endpoint::Endpoint;
use crate::envelope::{ActorName, Destination, Envelope, Payload};
use crate::error::MeshError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, mpsc};

/// Recording endpoint for tests.
pub struct MockEndpoint<M: Payload> {
    inner: Actor<M>,
    received: Mutex<Vec<(ActorName, M)>>,
    notify: mpsc::UnboundedSender<(ActorName, M)>,
    fail_next: AtomicBool,
}

impl<M: Payload> MockEndpoint<M> {
    /// Creates a mock endpoint and the channel its deliveries are signalled
    /// on. Returned pre-wrapped in `Arc` because that is the only shape
    /// `subscribe` accepts.
    pub fn new(name: impl Into<ActorName>) -> (Arc<Self>, mpsc::UnboundedReceiver<(ActorName, M)>) {
        let (notify, deliveries) = mpsc::unbounded_channel();
        let mock = Arc::new(Self {
            inner: Actor::new(name),
            received: Mutex::new(Vec::new()),
            notify,
            fail_next: AtomicBool::new(false),
        });
        (mock, deliveries)
    }

    /// Snapshot of every accepted delivery, in handling order.
    pub fn received(&self) -> Vec<(ActorName, M)> {
        self.received.lock().unwrap().clone()
    }

    /// Makes the next `handle_message` call fail before any bookkeeping.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl<M: Payload> Endpoint<M> for MockEndpoint<M> {
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
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(MeshError::handler("injected failure"));
        }
        self.inner
            .handle_message(sender.clone(), message.clone())
            .await?;
        self.received
            .lock()
            .unwrap()
            .push((sender.clone(), message.clone()));
        let _ = self.notify.send((sender, message));
        Ok(())
    }
}
