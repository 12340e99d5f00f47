use std::io;

/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// The supplied configuration can never produce a password, for example a
    /// zero length or an empty effective alphabet.
    InvalidConfig(String),
    /// The requested name doesn't exist in the profile table.
    UnknownProfile(String),
    Io(io::Error),
    ConfigError(config::ConfigError),
    Generic(&'static str),
    GenericDyn(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Self::GenericDyn(err.to_owned())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "invalid configuration: {err}"),
            Self::UnknownProfile(err) => write!(f, "unknown profile: {err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::ConfigError(err) => write!(f, "{err}"),
            Self::Generic(err) => write!(f, "{err}"),
            Self::GenericDyn(err) => write!(f, "{err}"),
        }
    }
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
