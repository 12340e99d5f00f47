//! Password generation.

use zeroize::Zeroize;

use crate::charset::CharacterClass;
use crate::error::{Error, Result};
use crate::profiles;
use crate::random::{RandomSource, SecureRandom};

/// Describes one password to generate: how long it should be and which
/// character classes, or explicit charset, it draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// When set, replaces the class selection entirely. The per-class
    /// inclusion guarantee doesn't apply to a custom charset.
    pub custom_charset: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            custom_charset: None,
        }
    }
}

impl GenerationConfig {
    /// The classes switched on in this config, in declaration order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        let mut classes = Vec::with_capacity(4);
        if self.lowercase {
            classes.push(CharacterClass::Lowercase);
        }
        if self.uppercase {
            classes.push(CharacterClass::Uppercase);
        }
        if self.digits {
            classes.push(CharacterClass::Digit);
        }
        if self.symbols {
            classes.push(CharacterClass::Symbol);
        }
        classes
    }

    /// All characters eligible for selection under this config: the custom
    /// charset if one is set, otherwise the union of the enabled classes.
    pub fn effective_alphabet(&self) -> Vec<char> {
        match &self.custom_charset {
            Some(charset) => charset.chars().collect(),
            None => self
                .enabled_classes()
                .iter()
                .flat_map(|class| class.alphabet().chars())
                .collect(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::InvalidConfig(
                "length must be at least 1".to_owned(),
            ));
        }
        match &self.custom_charset {
            Some(charset) if charset.is_empty() => Err(Error::InvalidConfig(
                "custom charset must not be empty".to_owned(),
            )),
            Some(_) => Ok(()),
            None if self.enabled_classes().is_empty() => Err(Error::InvalidConfig(
                "at least one character class must be enabled".to_owned(),
            )),
            None => Ok(()),
        }
    }
}

/// Generates one password from `config`, drawing from the OS secure random
/// generator.
///
/// In class based mode every enabled class is guaranteed at least one
/// character in the output, as long as the length allows it. When the
/// length is shorter than the number of enabled classes the guarantee is
/// relaxed and all positions are drawn uniformly from the effective
/// alphabet.
pub fn generate(config: &GenerationConfig) -> Result<String> {
    generate_with(config, &mut SecureRandom)
}

/// Generates `count` passwords, each from an independent [`generate`] call.
/// The passwords are not deduplicated.
pub fn generate_many(config: &GenerationConfig, count: usize) -> Result<Vec<String>> {
    (0..count).map(|_| generate(config)).collect()
}

/// Generates one password from `config` with an explicit randomness source.
pub fn generate_with(config: &GenerationConfig, source: &mut dyn RandomSource) -> Result<String> {
    config.validate()?;

    let alphabet = config.effective_alphabet();
    let mut chars: Vec<char> = Vec::with_capacity(config.length);

    // Seed one character per enabled class when they all fit, so every
    // class is represented in the output.
    if config.custom_charset.is_none() {
        let classes = config.enabled_classes();
        if config.length >= classes.len() {
            for class in classes {
                let class_alphabet: Vec<char> = class.alphabet().chars().collect();
                chars.push(pick(source, &class_alphabet)?);
            }
        }
    }

    while chars.len() < config.length {
        chars.push(pick(source, &alphabet)?);
    }

    // Uniform permutation, the seeded characters must not end up in
    // predictable positions.
    source.shuffle(&mut chars);

    let password = chars.iter().collect();
    chars.zeroize();
    Ok(password)
}

fn pick(source: &mut dyn RandomSource, alphabet: &[char]) -> Result<char> {
    source
        .choose(alphabet)
        .ok_or(Error::Generic("effective alphabet is empty"))
}

/// Generates one password from the named profile in the built-in table.
pub fn generate_with_profile(name: &str) -> Result<String> {
    match profiles::lookup(name) {
        Some(config) => generate(&config),
        None => Err(Error::UnknownProfile(format!(
            "{name} (available: {})",
            profiles::names().join(", ")
        ))),
    }
}

/// Generates one password of `length` characters drawn from `charset`.
/// Duplicate characters in `charset` are dropped, keeping the first
/// occurrence; there is no per-class inclusion guarantee in this mode.
pub fn generate_with_custom_charset(length: usize, charset: &str) -> Result<String> {
    let mut deduplicated = String::with_capacity(charset.len());
    for c in charset.chars() {
        if !deduplicated.contains(c) {
            deduplicated.push(c);
        }
    }
    if deduplicated.is_empty() {
        return Err(Error::InvalidConfig(
            "custom charset must not be empty".to_owned(),
        ));
    }

    let config = GenerationConfig {
        length,
        lowercase: false,
        uppercase: false,
        digits: false,
        symbols: false,
        custom_charset: Some(deduplicated),
    };
    generate(&config)
}

#[cfg(test)]
#[path = "tests/password_generator.rs"]
mod password_generator_test;
