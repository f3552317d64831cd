//! Configuration for camctl
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a camctl client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server address (host:port)
    pub server_addr: String,

    /// Connect timeout (milliseconds, 0 = no timeout)
    pub connect_timeout_ms: u64,

    /// Socket read timeout (milliseconds, 0 = no timeout)
    ///
    /// Text responses are terminated only by the server closing the
    /// connection, so a read timeout also bounds how long the client
    /// waits for that close.
    pub read_timeout_ms: u64,

    /// Socket write timeout (milliseconds, 0 = no timeout)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Artifact Configuration
    // -------------------------------------------------------------------------
    /// Path where a received image is stored (overwritten on each receive)
    pub image_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8888".to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 0,
            write_timeout_ms: 5000,
            image_path: PathBuf::from("received_image.jpg"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server address (host:port)
    pub fn server_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.server_addr = addr.into();
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the local image artifact path
    pub fn image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.image_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
