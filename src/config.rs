//! Engine settings, read with the `config` crate.
//!
//! A settings file looks like
//! ```toml
//! [world]
//! max_iterations = 100
//! ```
//! and `CLAIMLOG_MAX_ITERATIONS` in the environment overrides it.

use std::env;
use std::path::Path;

use config::{Config, File};
use serde::Deserialize;

use crate::error::{DatalogError, Result};

/// Rounds `World::run` may take before it gives up on a rule set.
///
/// This is a safety valve against rule sets that never stabilize, not a
/// performance knob; well formed policies settle in a handful of rounds.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

pub const MAX_ITERATIONS_VAR: &str = "CLAIMLOG_MAX_ITERATIONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_iterations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_iterations: DEFAULT_MAX_ITERATIONS }
    }
}

impl EngineConfig {
    /// Layers the `[world]` table of an optional file, then the environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Config::builder()
            .set_default("world.max_iterations", DEFAULT_MAX_ITERATIONS as i64)?
            .add_source(File::from(path.as_ref()).required(false))
            .set_override_option("world.max_iterations", env::var(MAX_ITERATIONS_VAR).ok())?
            .build()?;
        Self::from_settings(settings)
    }
    pub fn from_env() -> Result<Self> {
        let settings = Config::builder()
            .set_default("world.max_iterations", DEFAULT_MAX_ITERATIONS as i64)?
            .set_override_option("world.max_iterations", env::var(MAX_ITERATIONS_VAR).ok())?
            .build()?;
        Self::from_settings(settings)
    }
    fn from_settings(settings: Config) -> Result<Self> {
        let config: EngineConfig = settings.get("world")?;
        config.validate()?;
        Ok(config)
    }
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(DatalogError::Config("max_iterations must be at least 1".to_string()));
        }
        Ok(())
    }
}
