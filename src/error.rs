//! Error types. One enum per concern, `thiserror` only.

use std::io;

/// Errors raised when building a checked band range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BandError {
    #[error("lower band {lower} is above upper band {upper}")]
    InvertedBands { lower: i32, upper: i32 },
}

/// Errors raised while reading or writing a track.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("invalid band value {token:?} at position {position}")]
    Parse { position: usize, token: String },

    #[error("band {band} at position {position} does not fit a {bits}-bit sample")]
    SampleTooWide { position: usize, band: i32, bits: u16 },

    #[error("failed to open track {path}: {source}")]
    Open { path: String, source: io::Error },

    #[error("unsupported WAV sample format: {0:?}")]
    UnsupportedFormat(hound::SampleFormat),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Wav(#[from] hound::Error),
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("failed to parse config {path}: {message}")]
    Parse { path: String, message: String },

    #[error(transparent)]
    Bands(#[from] BandError),
}
