//! Interactive mode: a password panel with a main menu and a settings menu.

mod input;
mod options;
mod text;

pub use text::print_help;

pub fn run() {
    options::main_menu();
}
