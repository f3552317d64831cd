//! # camctl
//!
//! A remote-control TCP client for a networked camera device:
//! - Interactive command menu (open camera, take photo, get properties)
//! - Line-tagged response framing over a single byte stream
//! - Length-prefixed binary image transfer
//! - EOF-terminated text property listings
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Dispatcher Loop                            │
//! │                 (menu key → Command)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Client (Transport)                           │
//! │        (one connection per command, blocking I/O)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Decoder   │          │   Decoder   │
//!   │   (IMAGE)   │          │   (text)    │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          ▼                        ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Artifact   │          │   Console   │
//!   │   (file)    │          │  (stdout)   │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod artifact;
pub mod dispatcher;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CamError, Result};
pub use config::Config;
pub use network::Client;
pub use protocol::{Command, Response};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of camctl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
