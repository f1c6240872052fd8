use std::time::Duration;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors from the listing source. The only error family that is surfaced
/// to the user; a failed load renders an error banner and nothing else.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("listing API key is required")]
    MissingCredential,

    #[error("invalid listing API key")]
    InvalidCredential,

    #[error("listing service returned HTTP {status}")]
    Status { status: u16 },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Errors from the per-listing enrichment lookups (asset metadata, staking
/// points). These never cross the enrichment boundary: the producers fold
/// them into fallback values.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("lookup timed out after {after:?}")]
    TimedOut { after: Duration },

    #[error("lookup returned HTTP {status}")]
    Status { status: u16 },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),
}

pub type Result<T> = std::result::Result<T, Error>;
