//! Interactive TUI.

mod input;
mod menu;
mod text;

/// Run TUI interactive mode.
pub fn run() {
    menu::main_menu();
}
