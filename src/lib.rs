pub mod band;
pub mod config;
pub mod error;
pub mod logging;
pub mod track;
pub mod util;

pub use band::{clamp_track, BandFilter, Bands};
pub use config::Config;
pub use error::{BandError, ConfigError, TrackError};
