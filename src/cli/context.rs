//! One CLI invocation: saved command handling, flag merging, output.

use std::io;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, CommandMode, ParseError, prompts, quiet};
use crate::pass;
use crate::rand::Source;
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit from [`Context::run`].
#[derive(Debug, PartialEq, Eq)]
pub enum Done {
    /// Nothing left to do, not an error.
    Finished,
    /// Output failed; already reported.
    Failed,
}

pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
    args: Vec<String>,
}

impl Context {
    pub fn new(args: Vec<String>) -> Result<Self, ParseError> {
        let flags = super::parse(&args)?;
        quiet::set(flags.quiet);

        let saved_settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("could not read settings ({e}), using defaults"));
            Settings::default()
        });

        // Without -s only the saved command carries over.
        let settings = match flags.saved {
            true => saved_settings.clone(),
            false => Settings {
                cli_command: saved_settings.cli_command.clone(),
                ..Settings::default()
            },
        };

        Ok(Self {
            settings,
            saved_settings,
            clipboard: None,
            flags,
            args,
        })
    }

    pub fn run(&mut self) -> Result<(), Done> {
        self.show_info()?;
        self.update_saved_command()?;
        self.merge_flags()?;
        self.report_empty();
        self.emit()
    }

    fn show_info(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
        } else if self.flags.version {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        } else {
            return Ok(());
        }
        Err(Done::Finished)
    }

    fn update_saved_command(&mut self) -> Result<(), Done> {
        let command = match self.flags.command {
            CommandMode::None => return Ok(()),
            CommandMode::Get => {
                prompts::saved_command(&self.settings.cli_command);
                return Err(Done::Finished);
            }
            CommandMode::Unset => String::new(),
            CommandMode::Set => command_to_save(&self.args[1..]),
        };

        self.saved_settings.cli_command = command.clone();
        if let Err(e) = self.saved_settings.save_to_file() {
            prompts::warn(&format!("could not save command: {e}"));
        }
        if command.is_empty() {
            return Err(Done::Finished);
        }
        self.settings.cli_command = command;
        Ok(())
    }

    /// Saved command first (only when no explicit flags were given), then
    /// flags on top of the settings.
    fn merge_flags(&mut self) -> Result<(), Done> {
        if !self.settings.cli_command.is_empty()
            && self.flags.command == CommandMode::None
            && !self.flags.has_explicit_args()
        {
            let saved: Vec<String> = std::iter::once(self.args[0].clone())
                .chain(self.settings.cli_command.split_whitespace().map(String::from))
                .collect();
            match super::parse(&saved) {
                Ok(flags) => {
                    quiet::set(flags.quiet);
                    self.flags = flags;
                }
                Err(e) => prompts::warn(&format!("ignoring saved command: {e}")),
            }
        }

        let flags = &self.flags;
        if let Some(length) = flags.length {
            self.settings.pass_length = length;
        }
        if let Some(number) = flags.number {
            self.settings.number_of_passwords = number;
        }
        self.settings.classes = flags.class_flags(self.settings.classes);
        self.settings.secure |= flags.secure;

        if flags.clipboard {
            match ClipboardContext::new() {
                Ok(ctx) => self.clipboard = Some(ctx),
                Err(e) => {
                    prompts::warn(&format!("clipboard unavailable: {e}"));
                    if !prompts::confirm("Print to the terminal instead?") {
                        return Err(Done::Finished);
                    }
                }
            }
        }
        Ok(())
    }

    /// The generator returns "" for both causes; tell the user which one.
    fn report_empty(&self) {
        let resolved = self.settings.config().resolve();
        if resolved.is_empty_selection() {
            prompts::empty_output("no character class enabled");
        } else if resolved.length() == 0 {
            prompts::empty_output(&format!(
                "length {} is not positive",
                self.settings.pass_length
            ));
        }
    }

    /// Passwords go to the clipboard with `-b`, otherwise to stdout.
    fn emit(&mut self) -> Result<(), Done> {
        let config = self.settings.config();
        let count = self
            .flags
            .number
            .unwrap_or(self.settings.number_of_passwords.max(1));
        let mut rng = Source::new(self.settings.secure);

        if let Some(ctx) = self.clipboard.as_mut() {
            let lines = pass::generate_batch(&config, count, &mut rng);
            return match copy_to_clipboard(ctx, &lines) {
                true => Ok(()),
                false => Err(Done::Failed),
            };
        }

        match pass::write_batch(&config, count, io::stdout().lock(), &mut rng) {
            Ok(()) => Ok(()),
            // Reader went away (`| head`); nothing left to report.
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            Err(e) => {
                prompts::error(&format!("could not write passwords: {e}"));
                Err(Done::Failed)
            }
        }
    }
}

/// Put `passwords` on the clipboard, then read it back and wipe the copy.
pub fn copy_to_clipboard(ctx: &mut ClipboardContext, passwords: &str) -> bool {
    if let Err(e) = ctx.set_contents(passwords.trim_end().to_owned()) {
        prompts::error(&format!("clipboard: {e}"));
        return false;
    }
    if let Ok(mut echoed) = ctx.get_contents() {
        echoed.zeroize();
    }
    prompts::copied(passwords.lines().count());
    true
}

/// The arguments to store for `-c`: everything except the `-c`/`--command`
/// token itself and a `set` directly after it.
fn command_to_save(args: &[String]) -> String {
    let mut kept: Vec<&str> = args.iter().map(String::as_str).collect();
    if let Some(at) = kept.iter().position(|a| matches!(*a, "-c" | "--command")) {
        kept.remove(at);
        if kept.get(at) == Some(&"set") {
            kept.remove(at);
        }
    }
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn saved_command_drops_the_command_flag() {
        assert_eq!(command_to_save(&words("-c -l 16 -n 2")), "-l 16 -n 2");
        assert_eq!(command_to_save(&words("-l 16 --command")), "-l 16");
        assert_eq!(command_to_save(&words("-c set -C ld")), "-C ld");
    }

    #[test]
    fn saved_command_keeps_set_elsewhere() {
        // Only the `set` right after -c is a keyword.
        assert_eq!(command_to_save(&words("-C set -c")), "-C set");
        assert_eq!(command_to_save(&words("-c set -C set")), "-C set");
        assert_eq!(command_to_save(&words("-l 8 -c -C set")), "-l 8 -C set");
    }
}
