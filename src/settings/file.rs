//! On-disk form of [`Settings`]: a single line of comma-separated fields.
//!
//! `|` escapes the next character, so a literal `,` or `|` inside the start
//! command survives. Only settings are stored here, never passwords.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Settings;

const FIELDS: usize = 8;
const ESCAPE: char = '|';
const SEPARATOR: char = ',';

/// `$ROUNDPASS_SETTINGS`, else `$HOME/.config/roundpass/settings`.
pub fn get_path() -> PathBuf {
    match std::env::var_os("ROUNDPASS_SETTINGS") {
        Some(path) => PathBuf::from(path),
        None => {
            let home = std::env::var_os("HOME").unwrap_or_else(|| ".".into());
            Path::new(&home).join(".config").join("roundpass").join("settings")
        }
    }
}

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, encode(settings))
}

/// Fill `settings` from `path`. A missing file, or one with the wrong number
/// of fields, is replaced by the current values.
pub fn load(settings: &mut Settings, path: &Path) -> io::Result<()> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return save(settings, path),
        Err(e) => return Err(e),
    };
    let line = text.lines().next().unwrap_or_default();
    if !decode(line, settings) {
        return save(settings, path);
    }
    Ok(())
}

fn encode(s: &Settings) -> String {
    let c = s.classes;
    let fields: [String; FIELDS] = [
        s.pass_length.to_string(),
        s.number_of_passwords.to_string(),
        c.lower.to_string(),
        c.upper.to_string(),
        c.digit.to_string(),
        c.symbol.to_string(),
        s.secure.to_string(),
        escape(&s.cli_command),
    ];
    let mut line = fields.join(",");
    line.push('\n');
    line
}

/// Apply the fields of `line`. Values that don't parse leave the current
/// value alone. Returns false when the field count is wrong.
fn decode(line: &str, s: &mut Settings) -> bool {
    let fields = split(line);
    let [length, number, lower, upper, digit, symbol, secure, command] = fields.as_slice() else {
        return false;
    };

    fn keep<T: std::str::FromStr>(field: &str, current: &mut T) {
        if let Ok(value) = field.parse() {
            *current = value;
        }
    }
    keep(length, &mut s.pass_length);
    keep(number, &mut s.number_of_passwords);
    keep(lower, &mut s.classes.lower);
    keep(upper, &mut s.classes.upper);
    keep(digit, &mut s.classes.digit);
    keep(symbol, &mut s.classes.symbol);
    keep(secure, &mut s.secure);
    s.cli_command = command.clone();
    true
}

fn escape(field: &str) -> String {
    field
        .chars()
        .flat_map(|c| {
            let escaped = c == SEPARATOR || c == ESCAPE;
            escaped.then_some(ESCAPE).into_iter().chain([c])
        })
        .collect()
}

fn split(line: &str) -> Vec<String> {
    let mut fields = vec![String::new()];
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        let Some(field) = fields.last_mut() else { break };
        match c {
            ESCAPE => field.extend(chars.next()),
            SEPARATOR => fields.push(String::new()),
            _ => field.push(c),
        }
    }
    fields
}
