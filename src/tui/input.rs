use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Outcome of feeding one key to a [`LineEditor`].
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Edit,
    Submit,
    Cancel,
    Quit,
}

/// Single-line editor state. `cursor` is a 0-based char index.
#[derive(Debug)]
struct LineEditor {
    text: Vec<char>,
    cursor: usize,
    digits_only: bool,
}

impl LineEditor {
    fn new(initial: &str, digits_only: bool) -> Self {
        let text: Vec<char> = initial.chars().collect();
        let cursor = text.len();
        LineEditor {
            text,
            cursor,
            digits_only,
        }
    }

    fn text(&self) -> String {
        self.text.iter().collect()
    }

    fn key(&mut self, key: KeyEvent) -> Step {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Step::Quit,
            KeyCode::Char('q') if ctrl => return Step::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.text.clear();
                self.cursor = 0;
            }
            KeyCode::Esc => return Step::Cancel,
            KeyCode::Enter => return Step::Submit,
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.text.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.text.len() => {
                self.text.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.text.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text.len(),
            KeyCode::Char(c) if !ctrl && (!self.digits_only || c.is_ascii_digit()) => {
                self.text.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Step::Edit
    }
}

/// Read a line in raw mode. `None` on Esc/Ctrl+Q; Ctrl+C exits the process.
fn edit_line(prompt: &str, initial: &str, digits_only: bool) -> Option<String> {
    let mut editor = LineEditor::new(initial, digits_only);

    // Guard disables raw mode even if we return early
    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(editor.text()),
    };

    print!("{}: {}", prompt, editor.text());
    flush();
    let mut drawn = editor.text.len();

    let step = loop {
        match read() {
            Ok(Event::Key(key)) => {
                let step = editor.key(key);
                if step != Step::Edit {
                    break step;
                }
                print!("\r{}: {}", prompt, " ".repeat(drawn + 1));
                print!("\r{}: {}", prompt, editor.text());
                print!("\x1b[{}G", prompt.len() + 3 + editor.cursor);
                flush();
                drawn = editor.text.len();
            }
            Ok(_) => {}
            Err(_) => break Step::Submit,
        }
    };

    drop(guard);
    println!();

    match step {
        Step::Quit => {
            // process::exit skips destructors
            reset_terminal();
            std::process::exit(0);
        }
        Step::Cancel => None,
        _ => Some(editor.text()),
    }
}

pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, false)
}

/// Digits-only input. Empty input reads as 0.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    let digits = edit_line(prompt, &initial, true)?;
    if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}
