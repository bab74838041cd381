//! Screens for the interactive menu.

use crate::pass::CharClass;
use crate::settings::{MENU_MAX_COUNT, MENU_MAX_LENGTH, MENU_MIN_LENGTH, Settings};
use crate::terminal::panel::{blank, bottom, center, divider, entry, row, top};
use crate::terminal::{DIM, GREEN, RESET, UNDERLINE, flush, print_error};

pub const PROMPT: &str = "Choose an option (Enter generates)";

pub fn print_help() {
    top("roundpass");
    center("round-robin password generator");
    blank();
    row("Without arguments roundpass opens this menu. With flags it");
    row("prints passwords to stdout, or copies them with -b.");
    row("`-c FLAGS` stores FLAGS so a bare `roundpass` runs them;");
    row("`-c` alone forgets them.");
    blank();
    row("Every password takes one character from each enabled class in");
    row("turn (lower, upper, digit, symbol), then is cut to length.");
    blank();
    row(&format!("{UNDERLINE}Password{RESET}"));
    entry("  -l, --length <N>", "characters per password (12)");
    entry("  -n, --number <N>", "passwords to generate (1)");
    entry("  -C, --classes <SET>", "enabled classes from the letters l u d s");
    entry("  --no-lower", "leave out a-z");
    entry("  --no-upper", "leave out A-Z");
    entry("  --no-digits", "leave out 0-9");
    entry("  --no-symbols", "leave out !@#$%^&*(){}[]=<>/,.");
    entry("  -u, --secure", "draw from the OS-seeded CSPRNG");
    blank();
    row(&format!("{UNDERLINE}Output{RESET}"));
    entry("  -b, --board", "copy to the clipboard instead of printing");
    entry("  -q, --quiet", "no warnings or notices");
    blank();
    row(&format!("{UNDERLINE}Defaults{RESET}"));
    entry("  -c, --command [FLAGS]", "store FLAGS; alone clears, `get` prints them");
    entry("  -s, --saved", "start from the saved settings");
    entry("  -d, --default", "start from the built-in defaults");
    entry("  -h, --help", "this screen");
    entry("  -v, --version", "print the version");
    blank();
    row(&format!("{UNDERLINE}Examples{RESET}"));
    entry("  roundpass -l 16 -n 3", "three 16-character passwords");
    entry("  roundpass -C ld -l 8", "lowercase and digits, like a1b2c3d4");
    entry("  roundpass -b -u", "one CSPRNG password on the clipboard");
    bottom();
    println!();
}

/// The password panel: the last batch, or a hint when there is none.
pub fn print_passwords(shown: &[String], copied: bool) {
    top("Passwords");
    match shown {
        [] => row(&format!("{DIM}press Enter to generate{RESET}")),
        all if all.iter().all(String::is_empty) => {
            row(&format!("{DIM}empty: enable a class and a positive length{RESET}"))
        }
        lines => lines.iter().for_each(|p| center(p)),
    }
    bottom();
    if copied {
        println!("{GREEN}Copied to the clipboard.{RESET}");
    }
}

pub fn print_main_menu(invalid: bool) {
    top("Menu");
    row("1) settings   2) copy   3) clear   4) help   5) quit");
    bottom();
    if invalid {
        print_error("Unknown option.");
    } else {
        println!();
    }
    flush();
}

fn mark(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

/// What went wrong with the last settings entry, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    Length,
    Count,
    Option,
    Message(String),
}

pub fn print_settings_menu(settings: &Settings, error: Option<&SettingsError>) {
    top("Settings");
    center("Esc: back   Ctrl+U: clear input");
    blank();
    row(&format!("1) length: {}", settings.pass_length));
    for (n, class) in (2..).zip(CharClass::ALL) {
        row(&format!("{n}) {} {}", mark(settings.classes.get(class)), class.name()));
    }
    if settings.classes.count() == 0 {
        row(&format!("   {DIM}nothing enabled, passwords come out empty{RESET}"));
    }
    row(&format!("6) passwords per generation: {}", settings.number_of_passwords));
    match settings.cli_command.as_str() {
        "" => row(&format!("7) start command: {DIM}none{RESET}")),
        cmd => row(&format!("7) start command: {cmd}")),
    }
    row(&format!("8) source: {}", crate::rand::source_name(settings.secure)));
    divider();
    row("r) defaults   f) load saved   s) save   e) quit");
    bottom();

    match error {
        None => println!(),
        Some(SettingsError::Length) => print_error(&format!(
            "Length must be between {MENU_MIN_LENGTH} and {MENU_MAX_LENGTH}."
        )),
        Some(SettingsError::Count) => print_error(&format!(
            "Show between 1 and {MENU_MAX_COUNT} passwords."
        )),
        Some(SettingsError::Option) => print_error("Unknown option."),
        Some(SettingsError::Message(msg)) => print_error(msg),
    }
    flush();
}
