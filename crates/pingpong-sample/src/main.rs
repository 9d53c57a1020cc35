//! # Ping-Pong Mesh
//!
//! A self-sustaining rally of message-passing actors built on `actor_mesh`.
//!
//! ## 🚀 What runs
//!
//! - **`mesh`**: the bootstrap. A star of eight players around one hub, with
//!   the hub wrapped in a throughput decorator.
//! - **`ping_pong`**: the rally endpoint. Every ping earns a pong back to the
//!   sender, every pong earns a ping.
//! - **`message`**: the closed two-tag vocabulary.
//!
//! ## 📚 Watching it
//!
//! ```bash
//! RUST_LOG=info cargo run                # one throughput line per window
//! RUST_LOG=actor_mesh=trace cargo run    # every handled envelope
//! ```
//!
//! The process runs until Ctrl-C.

use actor_mesh::tracing::setup_tracing;
use pingpong_sample::mesh::PingPongMesh;
use tracing::info;

const PLAYERS: usize = 8;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let mesh = PingPongMesh::new(PLAYERS);
    info!(
        players = PLAYERS,
        links = mesh.link_count(),
        "mesh wired, seeding the rally"
    );
    mesh.seed();

    tokio::signal::ctrl_c().await?;
    info!("interrupted, tearing the mesh down");
    mesh.shutdown();
    Ok(())
}
