//! Resolving user flags and length into an ordered class list.

use super::class::CharClass;

/// Which character classes the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassFlags {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl ClassFlags {
    pub const ALL: ClassFlags = ClassFlags {
        lower: true,
        upper: true,
        digit: true,
        symbol: true,
    };

    pub const NONE: ClassFlags = ClassFlags {
        lower: false,
        upper: false,
        digit: false,
        symbol: false,
    };

    /// (flag, class) pairs in priority order.
    fn table(self) -> [(bool, CharClass); 4] {
        [
            (self.lower, CharClass::Lower),
            (self.upper, CharClass::Upper),
            (self.digit, CharClass::Digit),
            (self.symbol, CharClass::Symbol),
        ]
    }

    fn slot(&mut self, class: CharClass) -> &mut bool {
        match class {
            CharClass::Lower => &mut self.lower,
            CharClass::Upper => &mut self.upper,
            CharClass::Digit => &mut self.digit,
            CharClass::Symbol => &mut self.symbol,
        }
    }

    pub fn get(self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.lower,
            CharClass::Upper => self.upper,
            CharClass::Digit => self.digit,
            CharClass::Symbol => self.symbol,
        }
    }

    pub fn set(&mut self, class: CharClass, on: bool) {
        *self.slot(class) = on;
    }

    pub fn toggle(&mut self, class: CharClass) {
        let slot = self.slot(class);
        *slot = !*slot;
    }

    pub fn count(self) -> usize {
        self.table().into_iter().filter(|(on, _)| *on).count()
    }

    /// Parse a set of class letters such as `"lud"`. Order and repeats don't
    /// matter; an empty string selects nothing.
    pub fn from_letters(s: &str) -> Option<Self> {
        let mut flags = ClassFlags::NONE;
        for c in s.chars() {
            flags.set(CharClass::from_letter(c.to_ascii_lowercase())?, true);
        }
        Some(flags)
    }
}

impl Default for ClassFlags {
    fn default() -> Self {
        ClassFlags::ALL
    }
}

/// One generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub length: i64,
    pub flags: ClassFlags,
}

impl Config {
    pub fn new(length: i64, flags: ClassFlags) -> Self {
        Config { length, flags }
    }

    pub fn resolve(&self) -> Resolved {
        resolve(self.length, self.flags)
    }
}

/// Enabled classes in priority order plus the effective target length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    classes: Vec<CharClass>,
    length: usize,
}

impl Resolved {
    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    /// Target length; zero when the requested length was not positive.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_empty_selection(&self) -> bool {
        self.classes.is_empty()
    }

    /// True when generation will produce the empty string, for either reason.
    pub fn is_empty(&self) -> bool {
        self.is_empty_selection() || self.length == 0
    }
}

/// Build the ordered class list. The length is not clamped; non-positive
/// lengths resolve to zero.
pub fn resolve(length: i64, flags: ClassFlags) -> Resolved {
    let classes = flags
        .table()
        .into_iter()
        .filter_map(|(on, class)| on.then_some(class))
        .collect();

    Resolved {
        classes,
        length: usize::try_from(length).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::CharClass::*;

    #[test]
    fn resolves_in_priority_order() {
        let flags = ClassFlags {
            lower: false,
            upper: true,
            digit: false,
            symbol: true,
        };
        let resolved = resolve(10, flags);
        assert_eq!(resolved.classes(), &[Upper, Symbol]);
        assert_eq!(resolved.length(), 10);
        assert!(!resolved.is_empty());
    }

    #[test]
    fn all_flags_give_full_order() {
        assert_eq!(resolve(4, ClassFlags::ALL).classes(), &CharClass::ALL);
    }

    #[test]
    fn same_flags_same_order() {
        let flags = ClassFlags::from_letters("sdl").unwrap();
        assert_eq!(resolve(3, flags), resolve(3, flags));
        assert_eq!(resolve(3, flags).classes(), &[Lower, Digit, Symbol]);
    }

    #[test]
    fn no_flags_is_empty_selection() {
        let resolved = resolve(12, ClassFlags::NONE);
        assert!(resolved.is_empty_selection());
        assert!(resolved.is_empty());
        assert_eq!(resolved.length(), 12);
    }

    #[test]
    fn non_positive_length_resolves_to_zero() {
        for len in [0, -1, i64::MIN] {
            let resolved = resolve(len, ClassFlags::ALL);
            assert_eq!(resolved.length(), 0);
            assert!(!resolved.is_empty_selection());
            assert!(resolved.is_empty());
        }
    }

    #[test]
    fn length_is_not_clamped() {
        assert_eq!(resolve(10_000, ClassFlags::ALL).length(), 10_000);
    }

    #[test]
    fn flag_editing() {
        let mut flags = ClassFlags::NONE;
        flags.set(Digit, true);
        flags.toggle(Lower);
        assert!(flags.get(Lower) && flags.get(Digit));
        assert!(!flags.get(Upper));
        assert_eq!(flags.count(), 2);
        flags.toggle(Lower);
        assert!(!flags.get(Lower));
    }

    #[test]
    fn get_reads_each_field() {
        for class in CharClass::ALL {
            let mut flags = ClassFlags::NONE;
            flags.set(class, true);
            for other in CharClass::ALL {
                assert_eq!(flags.get(other), other == class);
            }
        }
    }

    #[test]
    fn letters_parse_and_render() {
        assert_eq!(ClassFlags::from_letters("LUDS"), Some(ClassFlags::ALL));
        assert_eq!(ClassFlags::from_letters(""), Some(ClassFlags::NONE));
        assert_eq!(ClassFlags::from_letters("lx"), None);
        assert_eq!(ClassFlags::from_letters("sls").unwrap().count(), 2);
    }
}
