//! Menu loops and the actions behind each entry.

use copypasta::ClipboardContext;
use zeroize::{Zeroize, Zeroizing};

use super::input::{get_editable_input, get_numeric_input};
use super::text::{
    PROMPT, SettingsError, print_help, print_main_menu, print_passwords, print_settings_menu,
};
use crate::cli::{self, copy_to_clipboard};
use crate::pass::{self, CharClass};
use crate::rand::{IndexSource, Source};
use crate::settings::{MENU_MAX_COUNT, MENU_MAX_LENGTH, MENU_MIN_LENGTH, Settings};
use crate::terminal::{clear, print_error, reset_terminal};

/// Passwords on display. Wiped when replaced or dropped.
#[derive(Default)]
struct Shown(Vec<String>);

impl Shown {
    /// Replace the display with a fresh batch of `number_of_passwords`,
    /// bounded to what the panel shows.
    fn refill<R: IndexSource + ?Sized>(&mut self, settings: &Settings, rng: &mut R) {
        self.0.zeroize();
        let config = settings.config();
        let count = settings.number_of_passwords.clamp(1, MENU_MAX_COUNT);
        self.0
            .extend((0..count).map(|_| pass::generate(&config, &mut *rng)));
    }

    fn wipe(&mut self) {
        self.0.zeroize();
    }

    /// Everything non-empty, one per line; `None` when there is nothing.
    fn joined(&self) -> Option<Zeroizing<String>> {
        let lines: Vec<&str> = self
            .0
            .iter()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
            .collect();
        (!lines.is_empty()).then(|| Zeroizing::new(lines.join("\n")))
    }
}

impl Drop for Shown {
    fn drop(&mut self) {
        self.wipe();
    }
}

enum Leave {
    Back,
    Quit,
}

pub fn main_menu() {
    reset_terminal();
    clear();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        print_error(&format!("Could not read settings ({e}), using defaults."));
        Settings::default()
    });
    let mut shown = Shown::default();
    let mut clipboard: Option<ClipboardContext> = None;
    let (mut invalid, mut copied) = (false, false);

    loop {
        print_passwords(&shown.0, copied);
        print_main_menu(invalid);
        (invalid, copied) = (false, false);

        let Some(input) = get_editable_input(PROMPT, "") else {
            clear();
            continue;
        };

        clear();
        match input.trim() {
            "" => shown.refill(&settings, &mut Source::new(settings.secure)),
            "1" => {
                if let Leave::Quit = settings_menu(&mut settings, &mut shown) {
                    break;
                }
            }
            "2" => copied = copy_shown(&shown, &mut clipboard),
            "3" => shown.wipe(),
            "4" => print_help(),
            "5" => break,
            _ => invalid = true,
        }
    }
    clear();
}

fn copy_shown(shown: &Shown, clipboard: &mut Option<ClipboardContext>) -> bool {
    let Some(lines) = shown.joined() else {
        print_error("Nothing to copy yet.");
        return false;
    };

    if clipboard.is_none() {
        match ClipboardContext::new() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => {
                print_error(&format!("Clipboard unavailable: {e}"));
                return false;
            }
        }
    }
    clipboard
        .as_mut()
        .is_some_and(|ctx| copy_to_clipboard(ctx, &lines))
}

fn settings_menu(settings: &mut Settings, shown: &mut Shown) -> Leave {
    let mut error = None;

    loop {
        clear();
        print_settings_menu(settings, error.as_ref());
        error = None;

        let Some(choice) = get_editable_input(PROMPT, "") else {
            clear();
            return Leave::Back;
        };
        let choice = choice.trim();

        if let Ok(item) = choice.parse::<u8>() {
            error = edit_setting(item, settings).err();
            continue;
        }
        if choice.is_empty() {
            shown.refill(settings, &mut Source::new(settings.secure));
            clear();
            return Leave::Back;
        }
        match run_commands(choice, settings) {
            Ok(true) => return Leave::Quit,
            Ok(false) => {}
            Err(e) => error = Some(e),
        }
    }
}

fn edit_setting(item: u8, settings: &mut Settings) -> Result<(), SettingsError> {
    match item {
        1 => {
            let prompt = format!("Length ({MENU_MIN_LENGTH}-{MENU_MAX_LENGTH})");
            let current = usize::try_from(settings.pass_length).unwrap_or(0);
            if let Some(n) = get_numeric_input(&prompt, current) {
                settings.pass_length = checked_length(n)?;
            }
        }
        2..=5 => settings.classes.toggle(CharClass::ALL[usize::from(item - 2)]),
        6 => {
            let prompt = format!("Passwords per generation (1-{MENU_MAX_COUNT})");
            if let Some(n) = get_numeric_input(&prompt, settings.number_of_passwords) {
                settings.number_of_passwords = checked_count(n)?;
            }
        }
        7 => {
            if let Some(line) = get_editable_input("Flags to run on start", &settings.cli_command) {
                settings.cli_command = checked_command(&line)?;
            }
        }
        8 => settings.secure = !settings.secure,
        _ => return Err(SettingsError::Option),
    }
    Ok(())
}

fn checked_length(n: usize) -> Result<i64, SettingsError> {
    i64::try_from(n)
        .ok()
        .filter(|n| (MENU_MIN_LENGTH..=MENU_MAX_LENGTH).contains(n))
        .ok_or(SettingsError::Length)
}

fn checked_count(n: usize) -> Result<usize, SettingsError> {
    match n {
        1..=MENU_MAX_COUNT => Ok(n),
        _ => Err(SettingsError::Count),
    }
}

/// A start command is stored only if the CLI would accept it.
fn checked_command(line: &str) -> Result<String, SettingsError> {
    let args: Vec<String> = std::iter::once(env!("CARGO_PKG_NAME"))
        .chain(line.split_whitespace())
        .map(String::from)
        .collect();
    match cli::parse(&args) {
        Ok(_) => Ok(args[1..].join(" ")),
        Err(e) => Err(SettingsError::Message(format!("Not a valid command: {e}"))),
    }
}

/// Letter commands, applied left to right. `Ok(true)` means quit.
fn run_commands(choice: &str, settings: &mut Settings) -> Result<bool, SettingsError> {
    if !choice.chars().all(|c| "rfse".contains(c)) {
        return Err(SettingsError::Option);
    }

    for c in choice.chars() {
        match c {
            'r' => *settings = Settings::default(),
            'f' => {
                *settings = Settings::load_from_file()
                    .map_err(|e| SettingsError::Message(format!("Could not load settings: {e}")))?
            }
            's' => settings
                .save_to_file()
                .map_err(|e| SettingsError::Message(format!("Could not save settings: {e}")))?,
            _ => {}
        }
    }
    Ok(choice.contains('e'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassFlags;
    use crate::pass::testing::Scripted;

    #[test]
    fn generate_fills_the_panel() {
        let settings = Settings {
            pass_length: 6,
            number_of_passwords: 3,
            ..Settings::default()
        };
        let mut shown = Shown::default();
        shown.refill(&settings, &mut Scripted::new([0]));
        assert_eq!(shown.0, vec!["aA0!aA"; 3]);
        assert_eq!(shown.joined().as_deref().map(String::as_str), Some("aA0!aA\naA0!aA\naA0!aA"));
    }

    #[test]
    fn generate_replaces_the_previous_batch() {
        let mut settings = Settings {
            number_of_passwords: 4,
            ..Settings::default()
        };
        let mut shown = Shown::default();
        shown.refill(&settings, &mut Scripted::new([1]));
        settings.number_of_passwords = 1;
        shown.refill(&settings, &mut Scripted::new([1]));
        assert_eq!(shown.0.len(), 1);
    }

    #[test]
    fn generate_count_is_bounded_by_the_panel() {
        let mut settings = Settings {
            number_of_passwords: 0,
            ..Settings::default()
        };
        let mut shown = Shown::default();
        shown.refill(&settings, &mut Scripted::new([2]));
        assert_eq!(shown.0.len(), 1);

        settings.number_of_passwords = 10_000;
        shown.refill(&settings, &mut Scripted::new([2]));
        assert_eq!(shown.0.len(), MENU_MAX_COUNT);
    }

    #[test]
    fn empty_passwords_are_not_copied() {
        let settings = Settings {
            classes: ClassFlags::NONE,
            number_of_passwords: 2,
            ..Settings::default()
        };
        let mut shown = Shown::default();
        assert!(shown.joined().is_none());
        shown.refill(&settings, &mut Scripted::new([0]));
        assert_eq!(shown.0, vec![String::new(); 2]);
        assert!(shown.joined().is_none());
        shown.wipe();
        assert!(shown.0.is_empty());
    }

    #[test]
    fn length_and_count_bounds() {
        assert_eq!(checked_length(3), Err(SettingsError::Length));
        assert_eq!(checked_length(4), Ok(4));
        assert_eq!(checked_length(20), Ok(20));
        assert_eq!(checked_length(21), Err(SettingsError::Length));
        assert_eq!(checked_count(0), Err(SettingsError::Count));
        assert_eq!(checked_count(MENU_MAX_COUNT), Ok(MENU_MAX_COUNT));
        assert_eq!(checked_count(MENU_MAX_COUNT + 1), Err(SettingsError::Count));
    }

    #[test]
    fn start_command_must_parse() {
        assert_eq!(checked_command("  -l 16   -C lu "), Ok("-l 16 -C lu".to_string()));
        assert!(matches!(checked_command("-o out.txt"), Err(SettingsError::Message(_))));
        assert!(matches!(checked_command("-l x"), Err(SettingsError::Message(_))));
    }

    #[test]
    fn letter_commands() {
        let mut settings = Settings {
            pass_length: 5,
            ..Settings::default()
        };
        assert_eq!(run_commands("r", &mut settings), Ok(false));
        assert_eq!(settings, Settings::default());
        assert_eq!(run_commands("x", &mut settings), Err(SettingsError::Option));
        assert_eq!(run_commands("e", &mut settings), Ok(true));
    }
}
