//! Persisted generation defaults.

mod file;

use crate::pass::{ClassFlags, Config};

/// Length bounds enforced by the interactive length control.
pub const MENU_MIN_LENGTH: i64 = 4;
pub const MENU_MAX_LENGTH: i64 = 20;
/// Most passwords the menu will show at once.
pub const MENU_MAX_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: i64,
    pub number_of_passwords: usize,
    pub classes: ClassFlags,
    pub secure: bool,
    pub cli_command: String,
}

impl Settings {
    pub fn config(&self) -> Config {
        Config::new(self.pass_length, self.classes)
    }

    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, &file::get_path())?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self, &file::get_path())
    }

    pub fn has_saved_command() -> bool {
        Self::load_from_file()
            .map(|s| !s.cli_command.is_empty())
            .unwrap_or(false)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            number_of_passwords: 1,
            classes: ClassFlags::ALL,
            secure: false,
            cli_command: String::new(),
        }
    }
}
