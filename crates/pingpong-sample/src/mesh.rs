//! # Mesh Bootstrap
//!
//! Individual rally endpoints are simple; wiring them together is where the
//! interesting structure lives. This module builds the whole topology in one
//! call: an observed hub plus N players in a star, every pair of links
//! mutual, and a seeding step that opens the rally.
//!
//! ## The star
//!
//! ```text
//!        P1 <--> C1 <--> P2
//!                ^
//!                |
//!                v
//!               P3 ...
//! ```
//!
//! Players subscribe only to the hub and the hub subscribes to every player,
//! so all traffic flows through `C1`. The hub is wrapped in a
//! [`ThroughputObserver`], which makes `C1`'s handling rate the one number
//! that summarizes the whole mesh.
//!
//! ## Seeding
//!
//! [`PingPongMesh::seed`] has every player broadcast one wildcard ping. The
//! hub answers each with a pong addressed to that player, the player answers
//! the pong, and from then on every rally sustains itself.

use crate::message::Message;
use crate::ping_pong::PingPong;
use actor_mesh::throughput::{ThroughputObserver, DEFAULT_WINDOW};
use actor_mesh::{Destination, Endpoint};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Name of the central observed endpoint.
pub const HUB_NAME: &str = "C1";

/// A wired star of rally endpoints around one observed hub.
///
/// Constructing the mesh installs every subscription link; nothing moves
/// until [`seed`](PingPongMesh::seed) is called.
pub struct PingPongMesh {
    /// The central endpoint, decorated with throughput measurement.
    pub hub: Arc<ThroughputObserver<Message>>,
    /// The players, named `P1` through `PN`.
    pub players: Vec<Arc<PingPong>>,
    links: Vec<JoinHandle<()>>,
}

impl PingPongMesh {
    /// Builds a star of `players` endpoints around the hub, sampling the
    /// hub's throughput once per second.
    pub fn new(players: usize) -> Self {
        Self::with_window(players, DEFAULT_WINDOW)
    }

    /// Same as [`new`](PingPongMesh::new) with an explicit sampling window.
    pub fn with_window(players: usize, window: Duration) -> Self {
        let hub_inner: Arc<dyn Endpoint<Message>> = Arc::new(PingPong::new(HUB_NAME));
        let hub = Arc::new(ThroughputObserver::with_window(hub_inner, window));

        let mut mesh = Self {
            hub,
            players: Vec::with_capacity(players),
            links: Vec::with_capacity(players * 2),
        };
        for i in 1..=players {
            let player = Arc::new(PingPong::new(format!("P{}", i)));
            // Mutual subscription: the player taps the hub's stream and the
            // hub taps the player's.
            mesh.links
                .push(player.clone().subscribe(mesh.hub.as_ref()));
            mesh.links
                .push(mesh.hub.clone().subscribe(player.as_ref()));
            mesh.players.push(player);
        }
        debug!(
            players = mesh.players.len(),
            links = mesh.links.len(),
            "mesh wired"
        );
        mesh
    }

    /// Opens the rally: every player broadcasts one wildcard ping.
    ///
    /// Only the hub subscribes to players, so each seed lands exactly once
    /// and every player ends up in its own rally with the hub.
    pub fn seed(&self) {
        for player in &self.players {
            player.broadcast(Message::Ping, Destination::Any);
        }
        debug!(seeds = self.players.len(), "rally seeded");
    }

    /// Number of installed subscription links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Tears the mesh down by aborting every link task.
    ///
    /// Endpoints hold no tasks of their own, so dropping the links is all
    /// the shutdown there is.
    pub fn shutdown(self) {
        for link in &self.links {
            link.abort();
        }
        debug!(links = self.links.len(), "mesh torn down");
    }
}
