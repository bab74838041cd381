use crate::pass::{CharClass, ClassFlags};

/// What `-c/--command` was asked to do.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CommandMode {
    #[default]
    None,
    Set,
    Get,
    Unset,
}

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub secure: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub default: bool,
    pub command: CommandMode,
    pub quiet: bool,
    pub length: Option<i64>,
    pub number: Option<usize>,
    pub classes: Option<ClassFlags>,
    pub disabled: Vec<CharClass>,
}

impl CliFlags {
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.saved
            || self.default
            || self.secure
            || self.classes.is_some()
            || !self.disabled.is_empty()
    }

    /// Apply `--classes` then any `--no-*` flags on top of `base`.
    pub fn class_flags(&self, base: ClassFlags) -> ClassFlags {
        let mut flags = self.classes.unwrap_or(base);
        for &class in &self.disabled {
            flags.set(class, false);
        }
        flags
    }
}
