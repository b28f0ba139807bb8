//! The `GameUtil` facade: every helper behind one injectable object.
//!
//! Build one at startup and hand it (or a reference to it) to whatever needs
//! the shared store or the helpers.

use crate::config::GameUtilConfig;
use crate::highscore::{HighscoreEntry, stub_highscore};
use crate::shared_store::InMemorySharedStore;
use crate::time::DeltaMode;
use crate::viewport::Viewport;
use crate::{GameUtilResult, geometry, sampling, scoring, text, time, viewport};
use chrono::{DateTime, TimeZone};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;

pub struct GameUtil {
    store: InMemorySharedStore,
    config: GameUtilConfig,
    rng: StdRng,
}

impl GameUtil {
    /// A facade with default configuration
    pub fn new() -> Self {
        Self::from_parts(GameUtilConfig::default())
    }

    /// A facade with a validated configuration
    pub fn with_config(config: GameUtilConfig) -> GameUtilResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: GameUtilConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        tracing::debug!(
            seeded = config.rng_seed.is_some(),
            capacity = config.store_capacity,
            "creating GameUtil"
        );
        Self {
            store: InMemorySharedStore::with_capacity(config.store_capacity),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &GameUtilConfig {
        &self.config
    }

    pub fn store(&self) -> &InMemorySharedStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut InMemorySharedStore {
        &mut self.store
    }

    /// Stores `value` under `key`, replacing what was there.
    pub fn set_data(&mut self, key: impl Into<String>, value: Value) -> GameUtilResult<()> {
        self.store.set(key, value)
    }

    /// Current JSON value for `key`, `None` if it was never set. Fails with
    /// `NotSerializable` if the key holds an opaque value.
    pub fn get_data(&self, key: &str) -> GameUtilResult<Option<Value>> {
        self.store.get(key)
    }

    /// Stores a value with no JSON form (a sound handle, a callback) under `key`.
    pub fn set_opaque_data<T: Any + Send + Sync>(
        &mut self,
        key: impl Into<String>,
        value: T,
    ) -> GameUtilResult<()> {
        self.store.set_opaque(key, value)
    }

    /// Opaque value for `key` as a `T`, `None` if it was never set.
    pub fn get_opaque_data<T: Any + Send + Sync>(&self, key: &str) -> GameUtilResult<Option<Arc<T>>> {
        self.store.get_opaque(key)
    }

    /// Deep copy of the value at `key`, safe to mutate.
    pub fn copy_json_data(&self, key: &str) -> GameUtilResult<Value> {
        self.store.copy_json(key)
    }

    /// `n` random items from `items`, drawn from this facade's RNG.
    pub fn pick_from_list<T: Clone>(&mut self, n: usize, items: &[T]) -> Vec<T> {
        sampling::pick_from_list_with_rng(n, items, &mut self.rng)
    }

    /// Elapsed time in `"seconds"` or, for any other mode string, milliseconds.
    pub fn delta_time<Tz1: TimeZone, Tz2: TimeZone>(
        &self,
        start: &DateTime<Tz1>,
        end: &DateTime<Tz2>,
        mode: &str,
    ) -> f64 {
        time::delta_time(start, end, DeltaMode::parse(mode))
    }

    pub fn find_exist(&self, keyword: &str, full_text: &str) -> bool {
        text::find_exist(keyword, full_text)
    }

    pub fn calc_vector_distance(&self, x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
        geometry::calc_vector_distance(x1, x2, y1, y2)
    }

    pub fn calculate_fs(&self, seed: f64, multiplier: f64, bonus: Option<f64>) -> f64 {
        scoring::calculate_fs(seed, multiplier, bonus)
    }

    pub fn calc_height_ratio(&self, width: f64, height: f64, window: Viewport) -> f64 {
        viewport::calc_height_ratio(width, height, window)
    }

    /// Stub table sized and named by the configuration.
    pub fn populate_stub_highscore(&self) -> Vec<HighscoreEntry> {
        stub_highscore(
            self.config.highscore_slots,
            &self.config.highscore_placeholder,
        )
    }
}

impl Default for GameUtil {
    fn default() -> Self {
        Self::new()
    }
}
