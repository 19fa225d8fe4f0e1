//! Schedule configuration.
//!
//! Provides [`ScheduleConfig`], loaded in layers with the `config` crate:
//! 1. built-in defaults (100,000 → 10,000 tokens, 2 years, 10 steps)
//! 2. a TOML file (`<config_dir>/minstake/schedule.toml` unless overridden)
//! 3. `MINSTAKE_*` environment variables, e.g. `MINSTAKE_STEPS=12`
//!
//! Amounts are whole tokens because TOML integers cannot hold base-unit
//! amounts such as `100_000 * 10^18`.

use std::path::{Path, PathBuf};

use minstake_core::constants::{
    to_base_units, DEFAULT_SCHEDULE_DURATION_SECS, DEFAULT_SCHEDULE_STEPS, TOKEN_DECIMALS,
};
use minstake_core::error::{MinStakeError, ScheduleError};
use minstake_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::ScheduleBuilder;
use crate::params::ScheduleParameters;

/// Prefix for environment-variable overrides.
pub const ENV_PREFIX: &str = "MINSTAKE";

/// Schedule settings as written by an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Minimum stake at the schedule start, in whole tokens.
    pub initial_stake_tokens: u64,
    /// Minimum stake once the schedule has elapsed, in whole tokens.
    pub floor_stake_tokens: u64,
    /// Decimal places of the staked token.
    pub decimals: u32,
    /// Schedule length in seconds.
    pub duration_secs: u64,
    /// Number of discrete decrements.
    pub steps: u64,
    /// Unix timestamp the schedule started at. `None` until the staking
    /// service has been initialized.
    pub schedule_start: Option<Timestamp>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            initial_stake_tokens: 100_000,
            floor_stake_tokens: 10_000,
            decimals: TOKEN_DECIMALS,
            duration_secs: DEFAULT_SCHEDULE_DURATION_SECS,
            steps: DEFAULT_SCHEDULE_STEPS,
            schedule_start: None,
        }
    }
}

impl ScheduleConfig {
    /// Default location of the configuration file.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("minstake")
            .join("schedule.toml")
    }

    /// Load from defaults, a TOML file and the process environment.
    ///
    /// An explicit `path` must exist; without one, the file at
    /// [`default_path`](Self::default_path) is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self, MinStakeError> {
        Self::load_with_env(path, None)
    }

    /// Like [`load`](Self::load) but reads overrides from `env` instead of
    /// the process environment when given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<::config::Map<String, String>>,
    ) -> Result<Self, MinStakeError> {
        let (file, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };
        debug!(path = %file.display(), required, "loading schedule config");

        let settings = ::config::Config::builder()
            .add_source(::config::File::from(file.as_path()).required(required))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .map_err(|e| MinStakeError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| MinStakeError::Config(e.to_string()))
    }

    /// Validated decay parameters in base units.
    pub fn parameters(&self) -> Result<ScheduleParameters, ScheduleError> {
        ScheduleParameters::new(
            to_base_units(self.initial_stake_tokens, self.decimals)?,
            to_base_units(self.floor_stake_tokens, self.decimals)?,
            self.duration_secs,
            self.steps,
        )
    }

    /// A builder preloaded with these settings, including the schedule
    /// start when one is configured.
    pub fn builder(&self) -> Result<ScheduleBuilder, ScheduleError> {
        let builder = ScheduleBuilder::new().parameters(self.parameters()?);
        Ok(match self.schedule_start {
            Some(start) => builder.schedule_start(start),
            None => builder,
        })
    }
}
