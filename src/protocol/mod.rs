//! Protocol Module
//!
//! Defines the wire protocol for talking to the camera server.
//!
//! ## Protocol Format (line-tagged, one exchange per connection)
//!
//! ### Request Format
//! ```text
//! ┌─────────────────────────────┬──────┐
//! │      Command identifier     │ "\n" │
//! └─────────────────────────────┴──────┘
//! ```
//!
//! ### Commands
//! - OPEN_CAMERA - start the camera preview on the device
//! - TAKE_PHOTO  - capture a photo and return it
//! - GET_PROP    - return device properties as text
//!
//! ### Response Format, image case
//! ```text
//! ┌───────────┬────────────────────┬──────────────────┐
//! │ "IMAGE\n" │ <decimal length>\n │  <length> bytes  │
//! └───────────┴────────────────────┴──────────────────┘
//! ```
//!
//! ### Response Format, text case
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │   UTF-8 text, terminated by connection close     │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Any first line other than exactly `IMAGE` selects the text case; the
//! server closes the connection to signal end of text. The first line is
//! part of the text in that case, not a discarded header.

mod command;
mod response;
mod codec;

pub use command::Command;
pub use response::Response;
pub use codec::{WireReader, read_response, write_command, IMAGE_TAG, MAX_IMAGE_BYTES};
