//! The character classes passwords are assembled from, plus a table of
//! predefined charsets that can be used instead of the classes.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four categories of characters a password can draw from. Each
/// class maps to a fixed alphabet that never changes during the process
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed alphabet of this class.
    pub fn alphabet(self) -> &'static str {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digit => DIGITS,
            Self::Symbol => SYMBOLS,
        }
    }

    /// Whether `c` belongs to this class's alphabet.
    pub fn contains(self, c: char) -> bool {
        match self {
            Self::Lowercase => c.is_ascii_lowercase(),
            Self::Uppercase => c.is_ascii_uppercase(),
            Self::Digit => c.is_ascii_digit(),
            Self::Symbol => SYMBOLS.contains(c),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Digit => "digit",
            Self::Symbol => "symbol",
        }
    }
}

/// Predefined charsets selectable by name, as an alternative to combining
/// character classes.
pub const NAMED_CHARSETS: &[(&str, &str)] = &[
    ("hexadecimal", "0123456789ABCDEF"),
    (
        "alphanumeric",
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
    ),
    (
        "letters_only",
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
    ),
    ("easy_symbols", "!@#$%&*+-=?"),
    (
        "no_similar",
        "abcdefghjkmnpqrstuvwxyzABCDEFGHJKMNPQRSTUVWXYZ23456789!@#$%&*",
    ),
];

/// Looks up a predefined charset by name.
pub fn named_charset(name: &str) -> Option<&'static str> {
    NAMED_CHARSETS
        .iter()
        .find(|(charset_name, _)| *charset_name == name)
        .map(|(_, charset)| *charset)
}

#[cfg(test)]
#[path = "tests/charset.rs"]
mod charset_test;
