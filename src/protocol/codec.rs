//! Protocol codec
//!
//! Line-oriented reading primitives and the response decoder.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! ┌─────────────────────────────┬──────┐
//! │      Command identifier     │ "\n" │
//! └─────────────────────────────┴──────┘
//! ```
//!
//! ### Response, image case
//! ```text
//! ┌───────────┬────────────────────┬──────────────────┐
//! │ "IMAGE\n" │ <decimal length>\n │  <length> bytes  │
//! └───────────┴────────────────────┴──────────────────┘
//! ```
//!
//! ### Response, text case
//! Any other first line, followed by UTF-8 text until the server closes
//! the connection. The first line is content, not a header, and is kept
//! in the decoded text.
//!
//! The decoder runs a three-state machine over the stream:
//! `AwaitingTag -> (DecodingImage | DecodingProperties) -> Done`.

use std::io::{BufRead, BufReader, Read, Write};

use crate::error::{CamError, Result};
use super::{Command, Response};

/// Tag line selecting image framing (exact, case-sensitive match)
pub const IMAGE_TAG: &str = "IMAGE";

/// Upper bound on a declared image length (64 MB)
///
/// A length line above this is rejected before any payload read, so a
/// corrupt length cannot make the client allocate or wait for gigabytes.
pub const MAX_IMAGE_BYTES: u64 = 64 * 1024 * 1024;

// =============================================================================
// Reading Primitives
// =============================================================================

/// Buffered reader over the connection's byte stream.
///
/// The underlying transport delivers bytes with arbitrary boundaries, so
/// every primitive here keeps reading until its own framing condition is
/// met (line terminator, exact count, or end of stream).
pub struct WireReader<R: Read> {
    inner: BufReader<R>,
}

impl<R: Read> WireReader<R> {
    /// Wrap a raw stream in a buffered wire reader
    pub fn new(stream: R) -> Self {
        Self {
            inner: BufReader::new(stream),
        }
    }

    /// Read one line, returning the raw bytes including the terminator.
    ///
    /// Returns an empty buffer if the stream ends before any byte arrives.
    pub fn read_line_raw(&mut self) -> Result<Vec<u8>> {
        let mut line = Vec::new();
        self.inner.read_until(b'\n', &mut line)?;
        Ok(line)
    }

    /// Read exactly `len` bytes.
    ///
    /// Blocks until all bytes arrive; the stream ending first is a
    /// framing error reporting how many bytes were actually received.
    pub fn read_exact_len(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        let mut received = 0;
        while received < len {
            match self.inner.read(&mut buf[received..]) {
                Ok(0) => {
                    return Err(CamError::Framing(format!(
                        "stream ended after {} of {} declared image bytes",
                        received, len
                    )));
                }
                Ok(n) => received += n,
                Err(ref e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(buf)
    }

    /// Read everything remaining until the stream ends
    pub fn read_remaining(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.inner.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

// =============================================================================
// Command Writing
// =============================================================================

/// Write a command to a stream
///
/// Format: wire identifier + newline, UTF-8
pub fn write_command<W: Write>(writer: &mut W, command: Command) -> Result<()> {
    writer.write_all(command.wire_name().as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Read and decode a complete response from a stream
///
/// Blocks until the response is fully framed: all declared bytes for an
/// image, or connection close for a property listing.
pub fn read_response<R: Read>(reader: &mut WireReader<R>) -> Result<Response> {
    // AwaitingTag: one line decides the framing for the rest of the stream.
    let tag_line = reader.read_line_raw()?;
    if tag_line.is_empty() {
        // Stream closed before any tag: an empty property listing.
        return Ok(Response::Properties {
            text: String::new(),
        });
    }

    // A tag that is not valid UTF-8 cannot equal "IMAGE"; it falls through
    // to the text path and fails there if the rest is not text either.
    let is_image = std::str::from_utf8(&tag_line)
        .map(|line| line.trim() == IMAGE_TAG)
        .unwrap_or(false);

    if is_image {
        decode_image(reader)
    } else {
        decode_properties(reader, tag_line)
    }
}

/// DecodingImage: a decimal length line, then exactly that many raw bytes
fn decode_image<R: Read>(reader: &mut WireReader<R>) -> Result<Response> {
    let len_line = reader.read_line_raw()?;
    if len_line.is_empty() {
        return Err(CamError::Framing(
            "stream ended before the image length line".to_string(),
        ));
    }

    let len_text = std::str::from_utf8(&len_line)
        .map_err(|_| CamError::Framing("image length line is not valid UTF-8".to_string()))?;

    let len: u64 = len_text.trim().parse().map_err(|_| {
        CamError::Framing(format!("invalid image length line: {:?}", len_text.trim()))
    })?;

    if len > MAX_IMAGE_BYTES {
        return Err(CamError::Framing(format!(
            "declared image length {} exceeds the {} byte limit",
            len, MAX_IMAGE_BYTES
        )));
    }

    let bytes = reader.read_exact_len(len as usize)?;
    tracing::debug!("decoded image response of {} bytes", bytes.len());
    Ok(Response::Image { bytes })
}

/// DecodingProperties: accumulate text until the server closes the stream
///
/// The tag line already read is the first line of the listing, so the
/// surfaced text equals the exact bytes the server sent.
fn decode_properties<R: Read>(reader: &mut WireReader<R>, first_line: Vec<u8>) -> Result<Response> {
    let mut raw = first_line;
    raw.extend_from_slice(&reader.read_remaining()?);

    let text = String::from_utf8(raw)
        .map_err(|e| CamError::Encoding(format!("property text is not valid UTF-8: {}", e)))?;

    tracing::debug!("decoded property response of {} bytes", text.len());
    Ok(Response::Properties { text })
}
