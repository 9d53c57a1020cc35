//! End-to-end delivery tests over real links: wildcard and directed
//! broadcast, per-link ordering, destination filtering, failure isolation.

use actor_mesh::mock::MockEndpoint;
use actor_mesh::{subscribe, Actor, ActorName, Destination, Endpoint};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

const RECV_TIMEOUT: Duration = Duration::from_secs(1);

async fn next_delivery(
    deliveries: &mut mpsc::UnboundedReceiver<(ActorName, u32)>,
) -> (ActorName, u32) {
    timeout(RECV_TIMEOUT, deliveries.recv())
        .await
        .expect("timed out waiting for a delivery")
        .expect("delivery channel closed")
}

async fn assert_no_delivery(deliveries: &mut mpsc::UnboundedReceiver<(ActorName, u32)>) {
    let quiet = timeout(Duration::from_millis(100), deliveries.recv()).await;
    assert!(quiet.is_err(), "unexpected delivery: {quiet:?}");
}

#[tokio::test]
async fn test_wildcard_broadcast_reaches_every_subscriber() {
    let publisher = Arc::new(Actor::<u32>::new("pub"));
    let (alpha, mut alpha_rx) = MockEndpoint::<u32>::new("alpha");
    let (beta, mut beta_rx) = MockEndpoint::<u32>::new("beta");
    let (gamma, mut gamma_rx) = MockEndpoint::<u32>::new("gamma");

    alpha.clone().subscribe(publisher.as_ref());
    beta.clone().subscribe(publisher.as_ref());
    gamma.clone().subscribe(publisher.as_ref());

    publisher.broadcast(7, Destination::Any);

    for rx in [&mut alpha_rx, &mut beta_rx, &mut gamma_rx] {
        let (sender, message) = next_delivery(rx).await;
        assert_eq!(sender, "pub");
        assert_eq!(message, 7);
    }
    assert_eq!(alpha.event_id(), 1);
    assert_eq!(beta.event_id(), 1);
    assert_eq!(gamma.event_id(), 1);
    // Publishing is not handling.
    assert_eq!(publisher.event_id(), 0);
}

#[tokio::test]
async fn test_directed_envelope_reaches_only_the_named_subscriber() {
    let publisher = Arc::new(Actor::<u32>::new("pub"));
    let (target, mut target_rx) = MockEndpoint::<u32>::new("target");
    let (bystander, mut bystander_rx) = MockEndpoint::<u32>::new("bystander");

    subscribe(target.clone(), publisher.as_ref());
    subscribe(bystander.clone(), publisher.as_ref());

    publisher.broadcast(3, Destination::Actor("target".into()));

    let (sender, message) = next_delivery(&mut target_rx).await;
    assert_eq!(sender, "pub");
    assert_eq!(message, 3);

    assert_no_delivery(&mut bystander_rx).await;
    assert_eq!(bystander.event_id(), 0);
    assert!(bystander.received().is_empty());
}

#[tokio::test]
async fn test_deliveries_preserve_publish_order_per_link() {
    let publisher = Arc::new(Actor::<u32>::new("pub"));
    let (sub, mut deliveries) = MockEndpoint::<u32>::new("sub");

    sub.clone().subscribe(publisher.as_ref());

    for n in 0..100 {
        publisher.broadcast(n, Destination::Any);
    }
    for expected in 0..100 {
        let (_, message) = next_delivery(&mut deliveries).await;
        assert_eq!(message, expected);
    }
    assert_eq!(sub.event_id(), 100);
}

#[tokio::test]
async fn test_event_counter_ignores_filtered_envelopes() {
    let publisher = Arc::new(Actor::<u32>::new("pub"));
    let (sub, mut deliveries) = MockEndpoint::<u32>::new("sub");

    sub.clone().subscribe(publisher.as_ref());

    publisher.broadcast(1, Destination::Actor("someone-else".into()));
    publisher.broadcast(2, Destination::Actor("sub".into()));

    // The same link processes both in order, so once 2 arrives the filtered
    // envelope has already been skipped.
    let (sender, message) = next_delivery(&mut deliveries).await;
    assert_eq!(sender, "pub");
    assert_eq!(message, 2);
    assert_eq!(sub.event_id(), 1);
    assert_eq!(sub.received(), vec![("pub".into(), 2)]);
}

#[tokio::test]
async fn test_self_subscription_delivers_self_addressed_envelopes() {
    let (looper, mut deliveries) = MockEndpoint::<u32>::new("looper");

    looper.clone().subscribe(looper.as_ref());
    looper.broadcast(9, Destination::Actor("looper".into()));

    let (sender, message) = next_delivery(&mut deliveries).await;
    assert_eq!(sender, "looper");
    assert_eq!(message, 9);
    assert_eq!(looper.event_id(), 1);
}

#[tokio::test]
async fn test_duplicate_subscription_duplicates_delivery() {
    let publisher = Arc::new(Actor::<u32>::new("pub"));
    let (sub, mut deliveries) = MockEndpoint::<u32>::new("sub");

    sub.clone().subscribe(publisher.as_ref());
    sub.clone().subscribe(publisher.as_ref());

    publisher.broadcast(5, Destination::Any);

    let (_, first) = next_delivery(&mut deliveries).await;
    let (_, second) = next_delivery(&mut deliveries).await;
    assert_eq!((first, second), (5, 5));
    assert_eq!(sub.event_id(), 2);
}

#[tokio::test]
async fn test_failing_handler_does_not_break_the_link() {
    let publisher = Arc::new(Actor::<u32>::new("pub"));
    let (sub, mut deliveries) = MockEndpoint::<u32>::new("sub");

    sub.clone().subscribe(publisher.as_ref());
    sub.fail_next();

    publisher.broadcast(1, Destination::Any);
    publisher.broadcast(2, Destination::Any);

    // The first delivery errors and is dropped; the link keeps going.
    let (_, message) = next_delivery(&mut deliveries).await;
    assert_eq!(message, 2);
    assert_eq!(sub.event_id(), 1);
    assert_eq!(sub.received(), vec![("pub".into(), 2)]);
}

#[tokio::test]
async fn test_broadcast_without_subscribers_is_dropped() {
    let publisher = Actor::<u32>::new("pub");

    publisher.broadcast(1, Destination::Any);
    publisher.broadcast(2, Destination::Actor("nobody".into()));

    assert_eq!(publisher.event_id(), 0);
}

#[tokio::test]
async fn test_links_only_observe_envelopes_published_after_subscribe() {
    let publisher = Arc::new(Actor::<u32>::new("pub"));
    let (sub, mut deliveries) = MockEndpoint::<u32>::new("sub");

    publisher.broadcast(1, Destination::Any);
    sub.clone().subscribe(publisher.as_ref());
    publisher.broadcast(2, Destination::Any);

    let (_, message) = next_delivery(&mut deliveries).await;
    assert_eq!(message, 2);
    assert_no_delivery(&mut deliveries).await;
    assert_eq!(sub.event_id(), 1);
}
