//! Fixed-width framed panels.
//!
//! ```text
//! ╭─ Title ──────────╮
//! │ row              │
//! ├──────────────────┤
//! ╰──────────────────╯
//! ```

/// Outer width including both border columns.
const WIDTH: usize = 66;
/// Space between the borders, less one column of margin each side.
const INNER: usize = WIDTH - 4;
/// Column where option descriptions start.
const FLAG_COLUMN: usize = 24;

pub fn top(title: &str) {
    let label = match title {
        "" => String::new(),
        t => format!(" {t} "),
    };
    let rest = (WIDTH - 3).saturating_sub(label.chars().count());
    println!("╭─{label}{}╮", "─".repeat(rest));
}

pub fn bottom() {
    println!("╰{}╯", "─".repeat(WIDTH - 2));
}

pub fn divider() {
    println!("├{}┤", "─".repeat(WIDTH - 2));
}

/// Left-aligned row. Text wider than the panel runs past the border.
pub fn row(text: &str) {
    println!("│ {text}{} │", " ".repeat(INNER.saturating_sub(visible_len(text))));
}

pub fn blank() {
    row("");
}

pub fn center(text: &str) {
    let spare = INNER.saturating_sub(visible_len(text));
    let left = spare / 2;
    row(&format!("{}{text}", " ".repeat(left)));
}

/// `flag` in a fixed column, `desc` word-wrapped beside it.
pub fn entry(flag: &str, desc: &str) {
    let lines = wrap(desc, INNER - FLAG_COLUMN);
    let mut first = true;
    for line in lines {
        let head = if first { flag } else { "" };
        first = false;
        row(&format!("{head:<FLAG_COLUMN$}{line}"));
    }
}

/// Greedy word wrap. Always yields at least one (possibly empty) line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![String::new()];
    for word in text.split_whitespace() {
        let Some(line) = lines.last_mut() else { break };
        if line.is_empty() {
            line.push_str(word);
        } else if line.len() + 1 + word.len() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(word.to_string());
        }
    }
    lines
}

/// Character count with SGR escape sequences (`ESC [ ... m`) left out.
fn visible_len(text: &str) -> usize {
    let mut chars = text.chars();
    let mut len = 0;
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{RESET, UNDERLINE};

    #[test]
    fn escapes_take_no_columns() {
        assert_eq!(visible_len(&format!("{UNDERLINE}Password{RESET}:")), 9);
        assert_eq!(visible_len("╭─ x"), 4);
        assert_eq!(visible_len(""), 0);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("unbreakableword", 4), vec!["unbreakableword"]);
    }
}
