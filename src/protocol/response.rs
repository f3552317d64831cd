//! Response definitions
//!
//! Represents decoded responses from the camera server.

/// A decoded response, one per connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A binary image payload. The decoder only produces this variant
    /// once every declared byte has arrived, so the payload is always
    /// complete.
    Image { bytes: Vec<u8> },

    /// A text property listing, terminated by connection close
    Properties { text: String },
}

impl Response {
    /// Number of payload bytes in the response
    pub fn byte_len(&self) -> usize {
        match self {
            Response::Image { bytes } => bytes.len(),
            Response::Properties { text } => text.len(),
        }
    }

    /// Whether this is an image response
    pub fn is_image(&self) -> bool {
        matches!(self, Response::Image { .. })
    }
}
