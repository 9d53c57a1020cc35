//! # Ping-Pong Sample Library
//!
//! This library exposes the rally building blocks for integration testing.

pub mod mesh;
pub mod message;
pub mod ping_pong;
