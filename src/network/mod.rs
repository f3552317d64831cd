//! Network Module
//!
//! Outbound TCP connections to the camera server.
//!
//! ## Architecture
//! - One connection per command
//! - Blocking I/O on the calling thread
//! - Connection closed unconditionally when the exchange ends

mod client;

pub use client::Client;
