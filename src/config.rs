//! `bandclamp.toml` configuration.
//!
//! ```toml
//! strict = true
//!
//! [bands]
//! lower = 40
//! upper = 1000
//! ```
//!
//! Missing keys fall back to the compiled defaults. CLI flags are applied on
//! top through [`Overrides`].

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::band::Bands;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bands: Bands,
    /// Reject `lower > upper` instead of clamping with inverted bands.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bands: Bands::default(),
            strict: true,
        }
    }
}

/// Values given on the command line, taking priority over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub lower: Option<i32>,
    pub upper: Option<i32>,
    pub lenient: bool,
}

impl Config {
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::parse(&contents, &path.display().to_string())
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, "<string>")
    }

    fn parse(toml_str: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(lower) = overrides.lower {
            self.bands.lower = lower;
        }
        if let Some(upper) = overrides.upper {
            self.bands.upper = upper;
        }
        if overrides.lenient {
            self.strict = false;
        }
    }

    /// The configured bands, checked unless `strict` is off.
    pub fn bands(&self) -> Result<Bands, ConfigError> {
        if self.strict {
            Ok(Bands::try_new(self.bands.lower, self.bands.upper)?)
        } else {
            Ok(self.bands)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BandError;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.strict);
        assert_eq!(config.bands().unwrap(), Bands::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml("[bands]\nupper = 500\n").unwrap();
        assert_eq!(config.bands().unwrap(), Bands::new(40, 500));
        assert!(config.strict);
    }

    #[test]
    fn overrides_win() {
        let mut config = Config::from_toml("[bands]\nlower = 10\nupper = 20\n").unwrap();
        config.apply_overrides(&Overrides {
            lower: Some(15),
            upper: None,
            lenient: false,
        });
        assert_eq!(config.bands().unwrap(), Bands::new(15, 20));
    }

    #[test]
    fn strict_rejects_inverted() {
        let config = Config::from_toml("[bands]\nlower = 50\nupper = 20\n").unwrap();
        match config.bands() {
            Err(ConfigError::Bands(BandError::InvertedBands { lower: 50, upper: 20 })) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn lenient_accepts_inverted() {
        let config = Config::from_toml("strict = false\n[bands]\nlower = 50\nupper = 20\n").unwrap();
        assert_eq!(config.bands().unwrap(), Bands::new(50, 20));
    }

    #[test]
    fn bad_toml() {
        match Config::from_toml("[bands\nlower = ") {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, "<string>"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        match Config::load(Some(path.as_path()), &Overrides::default()) {
            Err(ConfigError::Io { .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
