//! # Subscription Links
//!
//! A subscription link binds one endpoint's outbound stream to another
//! endpoint's handler. The link is a tokio task that filters and delivers:
//! the publisher's `broadcast` never runs subscriber code, and a slow
//! subscriber only ever delays its own link.
//!
//! ## Delivery rules
//!
//! * An envelope is delivered iff `destination` is the wildcard or names the
//!   subscriber exactly; everything else is dropped silently.
//! * Per link, envelopes are handled one at a time in publish order: the
//!   handler is awaited before the next envelope is taken. Across links
//!   there is no ordering promise.
//! * A handler error is logged and the envelope dropped; the link stays up.
//! * The link ends when the publisher's stream closes (publisher dropped).
//!   There is no unsubscribe.

use crate::endpoint::Endpoint;
use crate::envelope::Payload;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Subscribes `subscriber` to `publisher`'s outbound stream.
///
/// The stream is tapped before this function returns, so envelopes broadcast
/// immediately afterwards are already captured even if the link task has not
/// run yet.
///
/// Calling this twice for the same pair installs two independent links and
/// the subscriber will handle every matching envelope twice; callers wanting
/// at-most-once wiring must subscribe at most once per pair. An endpoint may
/// subscribe to itself: self-addressed envelopes then self-deliver, one
/// asynchronous hop later.
pub fn subscribe<M: Payload>(
    subscriber: Arc<dyn Endpoint<M>>,
    publisher: &dyn Endpoint<M>,
) -> JoinHandle<()> {
    let mut inbound = publisher.outbound();
    let publisher_name = publisher.name().clone();

    tokio::spawn(async move {
        debug!(publisher = %publisher_name, subscriber = %subscriber.name(), "link up");
        loop {
            match inbound.recv().await {
                Ok(envelope) => {
                    if !envelope.destination.accepts(subscriber.name()) {
                        continue;
                    }
                    if let Err(error) = subscriber
                        .handle_message(envelope.sender, envelope.message)
                        .await
                    {
                        warn!(
                            subscriber = %subscriber.name(),
                            %error,
                            "handler failed, envelope dropped"
                        );
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(
                        publisher = %publisher_name,
                        subscriber = %subscriber.name(),
                        skipped,
                        "link lagged, envelopes skipped"
                    );
                }
                Err(RecvError::Closed) => break,
            }
        }
        debug!(publisher = %publisher_name, subscriber = %subscriber.name(), "link down");
    })
}
