//! Character classes and their fixed alphabets.

use crate::rand::IndexSource;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*(){}[]=<>/,.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharClass {
    /// Every class, in generation priority order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CharClass::Lower => "Lowercase",
            CharClass::Upper => "Uppercase",
            CharClass::Digit => "Numbers",
            CharClass::Symbol => "Symbols",
        }
    }

    /// Letter used for this class in `--classes` sets and the settings file.
    pub const fn letter(self) -> char {
        match self {
            CharClass::Lower => 'l',
            CharClass::Upper => 'u',
            CharClass::Digit => 'd',
            CharClass::Symbol => 's',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.letter() == c)
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }
}

/// Draw one character of `class` using a single `next_index` call.
#[inline]
pub fn sample<R: IndexSource + ?Sized>(class: CharClass, rng: &mut R) -> u8 {
    let alphabet = class.alphabet();
    alphabet[rng.next_index(alphabet.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::testing::Scripted;

    #[test]
    fn alphabets_match_definitions() {
        assert_eq!(CharClass::Lower.alphabet().len(), 26);
        assert_eq!(CharClass::Upper.alphabet().len(), 26);
        assert_eq!(CharClass::Digit.alphabet().len(), 10);
        assert_eq!(CharClass::Symbol.alphabet(), b"!@#$%^&*(){}[]=<>/,.");
        assert!(CharClass::ALL.iter().all(|c| !c.alphabet().is_empty()));
    }

    #[test]
    fn alphabets_are_disjoint() {
        for a in CharClass::ALL {
            for b in CharClass::ALL {
                if a != b {
                    assert!(a.alphabet().iter().all(|&c| !b.contains(c as char)));
                }
            }
        }
    }

    #[test]
    fn sample_uses_one_draw_at_the_given_index() {
        let mut rng = Scripted::new([0, 25, 9, 19]);
        assert_eq!(sample(CharClass::Lower, &mut rng), b'a');
        assert_eq!(sample(CharClass::Upper, &mut rng), b'Z');
        assert_eq!(sample(CharClass::Digit, &mut rng), b'9');
        assert_eq!(sample(CharClass::Symbol, &mut rng), b'.');
        assert_eq!(rng.draws(), &[26, 26, 10, 20]);
    }

    #[test]
    fn letters_round_trip() {
        for class in CharClass::ALL {
            assert_eq!(CharClass::from_letter(class.letter()), Some(class));
        }
        assert_eq!(CharClass::from_letter('x'), None);
    }
}
