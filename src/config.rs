//! Runtime configuration for [`GameUtil`](crate::GameUtil).
//!
//! Values come from, in order: built-in defaults, an optional JSON document,
//! and `GAMEUTIL_*` environment variables.

use crate::highscore::{STUB_HIGHSCORE_NAME, STUB_HIGHSCORE_SLOTS};
use crate::{GameUtilError, GameUtilResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

pub const ENV_STORE_CAPACITY: &str = "GAMEUTIL_STORE_CAPACITY";
pub const ENV_HIGHSCORE_SLOTS: &str = "GAMEUTIL_HIGHSCORE_SLOTS";
pub const ENV_HIGHSCORE_PLACEHOLDER: &str = "GAMEUTIL_HIGHSCORE_PLACEHOLDER";
pub const ENV_RNG_SEED: &str = "GAMEUTIL_RNG_SEED";

/// Largest accepted `store_capacity`
pub const MAX_STORE_CAPACITY: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameUtilConfig {
    /// Initial capacity of the shared store
    pub store_capacity: usize,
    /// Rows in the stub highscore table
    pub highscore_slots: usize,
    /// Name used for unclaimed highscore rows
    pub highscore_placeholder: String,
    /// Fixed seed for sampling; `None` seeds from OS entropy
    pub rng_seed: Option<u64>,
}

impl Default for GameUtilConfig {
    fn default() -> Self {
        Self {
            store_capacity: 16,
            highscore_slots: STUB_HIGHSCORE_SLOTS,
            highscore_placeholder: STUB_HIGHSCORE_NAME.to_string(),
            rng_seed: None,
        }
    }
}

impl GameUtilConfig {
    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> GameUtilResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GameUtilError::Config(format!("invalid config document: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `GAMEUTIL_*` process environment overrides applied.
    pub fn from_env() -> GameUtilResult<Self> {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides looked up by variable name. Values that fail to parse
    /// are logged and skipped.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> GameUtilResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(capacity) = parse_override(&lookup, ENV_STORE_CAPACITY) {
            self.store_capacity = capacity;
        }
        if let Some(slots) = parse_override(&lookup, ENV_HIGHSCORE_SLOTS) {
            self.highscore_slots = slots;
        }
        if let Some(placeholder) = lookup(ENV_HIGHSCORE_PLACEHOLDER) {
            debug!(var = ENV_HIGHSCORE_PLACEHOLDER, "config override");
            self.highscore_placeholder = placeholder;
        }
        if let Some(seed) = parse_override(&lookup, ENV_RNG_SEED) {
            self.rng_seed = Some(seed);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> GameUtilResult<()> {
        if self.store_capacity > MAX_STORE_CAPACITY {
            return Err(GameUtilError::Config(format!(
                "store_capacity must be at most {MAX_STORE_CAPACITY}, got {}",
                self.store_capacity
            )));
        }
        if self.highscore_slots == 0 {
            return Err(GameUtilError::Config(
                "highscore_slots must be at least 1".to_string(),
            ));
        }
        if self.highscore_placeholder.trim().is_empty() {
            return Err(GameUtilError::Config(
                "highscore_placeholder must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_override<T, F>(lookup: &F, var: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(var)?;
    match raw.trim().parse() {
        Ok(value) => {
            debug!(var, value = %raw, "config override");
            Some(value)
        }
        Err(_) => {
            warn!(var, value = %raw, "ignoring unparsable config override");
            None
        }
    }
}
