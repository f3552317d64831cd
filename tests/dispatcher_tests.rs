//! Dispatcher Tests
//!
//! Tests for menu input resolution.

use camctl::dispatcher::{exit_key, menu_text, resolve, MenuAction, EXIT_TOKEN};
use camctl::Command;

// =============================================================================
// Resolution Tests
// =============================================================================

#[test]
fn test_numeric_keys_dispatch_in_menu_order() {
    assert_eq!(resolve("1"), MenuAction::Dispatch(Command::OpenCamera));
    assert_eq!(resolve("2"), MenuAction::Dispatch(Command::TakePhoto));
    assert_eq!(resolve("3"), MenuAction::Dispatch(Command::GetProp));
}

#[test]
fn test_exit_key_and_token_quit() {
    assert_eq!(resolve("4"), MenuAction::Quit);
    assert_eq!(resolve("exit"), MenuAction::Quit);
    assert_eq!(resolve("EXIT"), MenuAction::Quit);
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert_eq!(resolve("  2  \n"), MenuAction::Dispatch(Command::TakePhoto));
    assert_eq!(resolve(" exit \n"), MenuAction::Quit);
}

#[test]
fn test_unknown_input_is_recoverable() {
    assert_eq!(resolve(""), MenuAction::Unknown);
    assert_eq!(resolve("0"), MenuAction::Unknown);
    assert_eq!(resolve("5"), MenuAction::Unknown);
    assert_eq!(resolve("photo"), MenuAction::Unknown);
    assert_eq!(resolve("1 2"), MenuAction::Unknown);
}

#[test]
fn test_exit_key_follows_command_count() {
    assert_eq!(exit_key(), Command::ALL.len() + 1);
    assert_eq!(EXIT_TOKEN, "exit");
}

// =============================================================================
// Menu Rendering Tests
// =============================================================================

#[test]
fn test_menu_lists_every_command_and_exit() {
    let text = menu_text();
    for (i, command) in Command::ALL.iter().enumerate() {
        let entry = format!("{} - {}", i + 1, command.menu_label());
        assert!(text.contains(&entry), "menu is missing {:?}", entry);
    }
    assert!(text.contains(&format!("{} - Exit", exit_key())));
}
