//! The built-in generation profiles. The table is constant for the process
//! lifetime, user supplied profile files are handled separately in
//! [`crate::settings`].

use crate::password_generator::GenerationConfig;

pub const PROFILE_NAMES: [&str; 4] = ["weak", "medium", "strong", "very_strong"];

/// Resolves a profile name to its preset configuration.
pub fn lookup(name: &str) -> Option<GenerationConfig> {
    let config = match name {
        "weak" => GenerationConfig {
            length: 8,
            lowercase: true,
            uppercase: false,
            digits: true,
            symbols: false,
            custom_charset: None,
        },
        "medium" => GenerationConfig {
            length: 12,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
            custom_charset: None,
        },
        "strong" => GenerationConfig {
            length: 16,
            ..GenerationConfig::default()
        },
        "very_strong" => GenerationConfig {
            length: 20,
            ..GenerationConfig::default()
        },
        _ => return None,
    };
    Some(config)
}

/// The names in the built-in table, in strength order.
pub fn names() -> Vec<&'static str> {
    PROFILE_NAMES.to_vec()
}

#[cfg(test)]
#[path = "tests/profiles.rs"]
mod profiles_test;
