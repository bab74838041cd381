//! Messages for CLI mode. Everything goes to stderr so stdout carries only
//! passwords. `-q` silences warnings and notices; errors always show.

use std::io::{self, Write};

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}warning:{RESET} {msg}");
    }
}

pub fn error(msg: &str) {
    eprintln!("{RED}error:{RESET} {msg}");
}

fn notice(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{msg}");
    }
}

pub fn empty_output(reason: &str) {
    warn(&format!("password will be empty: {reason}"));
}

pub fn copied(count: usize) {
    match count {
        1 => notice("password copied to the clipboard"),
        n => notice(&format!("{n} passwords copied to the clipboard")),
    }
}

/// The saved command goes to stdout so it can be captured.
pub fn saved_command(command: &str) {
    if command.is_empty() {
        notice("no saved command");
    } else {
        println!("{command}");
    }
}

/// Yes/no question defaulting to yes. Answers yes without asking when quiet
/// or when nobody is at the terminal.
pub fn confirm(question: &str) -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("{question} [Y/n] ");
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return true;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "" | "y" | "yes")
}
