/// This is the library part of passgen, it implements generation of random
/// passwords from character classes, custom charsets and named profiles.
pub mod password_generator;
/// The character classes and their fixed alphabets.
pub mod charset;
/// The built-in profile table.
pub mod profiles;
/// The randomness seam, a capability trait backed by the OS secure random
/// generator.
pub mod random;
/// Loading of user defined profile files.
pub mod settings;
/// Heuristic strength estimation for candidate passwords.
pub mod strength;

pub mod error;

pub use crate::error::{Error, Result};

#[cfg(test)]
#[path = "tests/test_helpers.rs"]
pub(crate) mod test_helpers;
