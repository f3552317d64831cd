//! Command Dispatcher
//!
//! Maps menu input to commands. The interactive loop itself lives in the
//! binary; everything here is pure so it can be tested without a
//! terminal.

use crate::protocol::Command;

/// Token that ends the menu loop, alongside the numeric exit key
pub const EXIT_TOKEN: &str = "exit";

/// The result of resolving one line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Send this command to the server
    Dispatch(Command),

    /// End the menu loop
    Quit,

    /// Input matched nothing; re-prompt
    Unknown,
}

/// Resolve one line of user input against the menu
///
/// Keys `1`..=`3` select commands in `Command::ALL` order; the next key
/// or the exit token quits; everything else is unknown.
pub fn resolve(input: &str) -> MenuAction {
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case(EXIT_TOKEN) {
        return MenuAction::Quit;
    }

    if let Ok(key) = trimmed.parse::<usize>() {
        if (1..=Command::ALL.len()).contains(&key) {
            return MenuAction::Dispatch(Command::ALL[key - 1]);
        }
        if key == exit_key() {
            return MenuAction::Quit;
        }
    }

    MenuAction::Unknown
}

/// Numeric key that quits the menu
pub fn exit_key() -> usize {
    Command::ALL.len() + 1
}

/// The numbered menu shown before each prompt
pub fn menu_text() -> String {
    let mut text = String::from("\nAvailable commands:\n");
    for (i, command) in Command::ALL.iter().enumerate() {
        text.push_str(&format!("{} - {}\n", i + 1, command.menu_label()));
    }
    text.push_str(&format!("{} - Exit\n", exit_key()));
    text
}
