//! Error types for the I/O and configuration edges of the analyzer.
//!
//! Decoding, hazard detection and resolution are total and never fail; only
//! reading hex listings, loading configuration and rendering output can.

use thiserror::Error;

/// Errors surfaced by the loader, configuration and report layers.
#[derive(Error, Debug)]
pub enum Error {
    /// A file could not be read or written.
    #[error("could not access '{path}': {source}")]
    Io {
        /// Path of the file being accessed.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A line of a hex listing is not a valid 32-bit word.
    ///
    /// `line` is 1-based and counts blank lines, so it matches what an
    /// editor shows.
    #[error("line {line}: '{text}' is not a 32-bit hexadecimal word")]
    InvalidHex {
        /// 1-based line number in the source text.
        line: usize,
        /// The offending (trimmed) line.
        text: String,
    },

    /// The TOML configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON rendering of a report failed.
    #[error("could not render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A technique name did not match any catalog entry.
    #[error("unknown technique '{0}'")]
    UnknownTechnique(String),
}

impl Error {
    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_string(),
            source,
        }
    }
}

/// Result alias used by the fallible edges of the crate.
pub type Result<T> = std::result::Result<T, Error>;
