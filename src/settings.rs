//! Loading of user defined profile files.
//!
//! A profile file is a TOML document with one table per profile:
//!
//! ```toml
//! [profiles.pin]
//! length = 6
//! lowercase = false
//! uppercase = false
//! symbols = false
//!
//! [profiles.hex_token]
//! length = 32
//! custom_charset = "0123456789abcdef"
//! ```
//!
//! Omitted class switches default to enabled, matching
//! [`GenerationConfig::default`]. The file only produces configurations,
//! validation stays with the generator.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::password_generator::GenerationConfig;

#[derive(Debug, Deserialize)]
struct ProfilesFile {
    #[serde(default)]
    profiles: HashMap<String, ProfileEntry>,
}

/// One profile entry as written in the file.
#[derive(Debug, Deserialize)]
struct ProfileEntry {
    length: usize,
    #[serde(default = "enabled")]
    lowercase: bool,
    #[serde(default = "enabled")]
    uppercase: bool,
    #[serde(default = "enabled")]
    digits: bool,
    #[serde(default = "enabled")]
    symbols: bool,
    #[serde(default)]
    custom_charset: Option<String>,
}

fn enabled() -> bool {
    true
}

impl From<ProfileEntry> for GenerationConfig {
    fn from(entry: ProfileEntry) -> Self {
        Self {
            length: entry.length,
            lowercase: entry.lowercase,
            uppercase: entry.uppercase,
            digits: entry.digits,
            symbols: entry.symbols,
            custom_charset: entry.custom_charset,
        }
    }
}

/// Reads `path` and returns the profiles defined in it.
pub fn load_profiles(path: &Path) -> Result<HashMap<String, GenerationConfig>> {
    let mut settings = config::Config::default();
    settings.merge(config::File::from(path.to_path_buf()))?;
    let parsed: ProfilesFile = settings.try_into()?;

    log::debug!(
        "loaded {} profile(s) from {}",
        parsed.profiles.len(),
        path.display()
    );

    Ok(parsed
        .profiles
        .into_iter()
        .map(|(name, entry)| (name, entry.into()))
        .collect())
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings_test;
