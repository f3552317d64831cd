//! Command definitions
//!
//! Represents commands sent to the camera server.

use std::fmt;

/// A command understood by the camera server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the camera preview on the device
    OpenCamera,

    /// Capture a photo and send it back
    TakePhoto,

    /// Fetch device properties as text
    GetProp,
}

impl Command {
    /// All commands, in menu order
    pub const ALL: [Command; 3] = [Command::OpenCamera, Command::TakePhoto, Command::GetProp];

    /// The identifier sent on the wire
    pub fn wire_name(&self) -> &'static str {
        match self {
            Command::OpenCamera => "OPEN_CAMERA",
            Command::TakePhoto => "TAKE_PHOTO",
            Command::GetProp => "GET_PROP",
        }
    }

    /// Progress text shown when the command is dispatched
    pub fn description(&self) -> &'static str {
        match self {
            Command::OpenCamera => "Opening the camera...",
            Command::TakePhoto => "Taking a photo...",
            Command::GetProp => "Fetching device properties...",
        }
    }

    /// Menu label for the command
    pub fn menu_label(&self) -> &'static str {
        match self {
            Command::OpenCamera => "Open the camera",
            Command::TakePhoto => "Take a photo",
            Command::GetProp => "Get device properties",
        }
    }

    /// Parse a wire identifier back into a command (case-insensitive)
    pub fn from_wire(name: &str) -> Option<Command> {
        match name.trim().to_ascii_uppercase().as_str() {
            "OPEN_CAMERA" => Some(Command::OpenCamera),
            "TAKE_PHOTO" => Some(Command::TakePhoto),
            "GET_PROP" => Some(Command::GetProp),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
