//! Client Transport
//!
//! Performs one command/response exchange per connection.

use std::io::BufWriter;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::artifact;
use crate::config::Config;
use crate::error::{CamError, Result};
use crate::protocol::{read_response, write_command, Command, Response, WireReader};

/// Client for the camera server
///
/// Holds configuration only; each `send` opens its own connection and
/// closes it before returning, so a `Client` is cheap to keep around and
/// never holds a stale socket.
pub struct Client {
    config: Config,
}

impl Client {
    /// Create a client with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The client's configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a command and decode the server's response
    ///
    /// Opens a connection, writes the command line, decodes exactly one
    /// response, and closes the connection whether or not decoding
    /// succeeded (both stream halves are dropped on return).
    pub fn send(&self, command: Command) -> Result<Response> {
        let stream = self.connect()?;

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;
        self.set_timeouts(&stream)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let mut writer = BufWriter::new(stream);
        let mut reader = WireReader::new(read_stream);

        write_command(&mut writer, command)?;
        tracing::debug!("sent command {}", command);

        read_response(&mut reader)
    }

    /// Send a command and persist an image response to the configured path
    ///
    /// Property responses pass through untouched. The artifact is written
    /// only after the image decoded completely, so a framing failure never
    /// leaves a truncated file at the image path.
    pub fn send_and_store(&self, command: Command) -> Result<Response> {
        let response = self.send(command)?;

        if let Response::Image { bytes } = &response {
            artifact::store(&self.config.image_path, bytes)?;
            tracing::info!(
                "stored {} byte image at {}",
                bytes.len(),
                self.config.image_path.display()
            );
        }

        Ok(response)
    }

    /// Open the outbound connection, mapping connect failures to
    /// `CamError::Connection` so the dispatcher loop can recover.
    fn connect(&self) -> Result<TcpStream> {
        let addr = self.resolve_addr()?;

        let stream = if self.config.connect_timeout_ms > 0 {
            TcpStream::connect_timeout(&addr, Duration::from_millis(self.config.connect_timeout_ms))
        } else {
            TcpStream::connect(addr)
        }
        .map_err(|e| CamError::Connection(format!("cannot connect to {}: {}", addr, e)))?;

        tracing::debug!("connected to {}", addr);
        Ok(stream)
    }

    /// Resolve the configured server address
    fn resolve_addr(&self) -> Result<SocketAddr> {
        self.config
            .server_addr
            .to_socket_addrs()
            .map_err(|e| {
                CamError::Config(format!(
                    "cannot resolve server address {:?}: {}",
                    self.config.server_addr, e
                ))
            })?
            .next()
            .ok_or_else(|| {
                CamError::Config(format!(
                    "server address {:?} resolved to nothing",
                    self.config.server_addr
                ))
            })
    }

    /// Configure socket timeouts (0 = disabled, so the EOF-terminated
    /// text case can wait indefinitely by default)
    fn set_timeouts(&self, stream: &TcpStream) -> Result<()> {
        if self.config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(self.config.read_timeout_ms)))?;
        }
        if self.config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(self.config.write_timeout_ms)))?;
        }
        Ok(())
    }
}
