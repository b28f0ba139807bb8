//! # GameUtil-RS
//!
//! Small, independent helpers for games:
//!
//! - **Shared store**: a key/value store for handing data between scenes, with
//!   JSON deep copies of stored values
//! - **Sampling**: pick `n` random items from a list
//! - **Time**: elapsed time between two instants in milliseconds or seconds
//! - **Text**: substring lookup
//! - **Geometry**: distance between two canvas points
//! - **Scoring**: seed x multiplier + bonus
//! - **Viewport**: responsive canvas height for the current window size
//! - **Highscore**: placeholder highscore tables
//!
//! [`GameUtil`] bundles all of them behind one object that owns its store, so
//! nothing lives in hidden global state.
//!
//! ## Features
//!
//! - `async` (default): [`AsyncSharedStore`], a cloneable lock-guarded store
//!
//! ## Example
//!
//! ```rust
//! use gameutil_rs::prelude::*;
//! use serde_json::json;
//!
//! let mut util = GameUtil::new();
//! util.set_data("CONFIG", json!({"lives": 3})).unwrap();
//!
//! let mut copied = util.copy_json_data("CONFIG").unwrap();
//! copied["lives"] = json!(99);
//! assert_eq!(util.get_data("CONFIG").unwrap(), Some(json!({"lives": 3})));
//!
//! assert_eq!(calculate_fs(500.0, 5.0, Some(1000.0)), 3500.0);
//! ```

// ============================================================================
// MODULES
// ============================================================================

pub mod config;
pub mod geometry;
pub mod highscore;
pub mod sampling;
pub mod scoring;
pub mod shared_store;
pub mod storage;
pub mod text;
pub mod time;
pub mod util;
pub mod viewport;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use config::GameUtilConfig;
pub use geometry::{calc_vector_distance, checked_vector_distance};
pub use highscore::{HighscoreEntry, populate_stub_highscore, stub_highscore};
pub use sampling::{pick_from_list, pick_from_list_with_rng};
pub use scoring::calculate_fs;
pub use shared_store::{InMemorySharedStore, SharedStore};
pub use storage::{InMemoryStorage, StorageBackend, StoredValue};
pub use text::find_exist;
pub use time::{DeltaMode, delta_time};
pub use util::GameUtil;
pub use viewport::{Viewport, calc_height_ratio};

/// Async store
#[cfg(feature = "async")]
pub use shared_store::AsyncSharedStore;

/// Commonly used external types
pub use serde_json::Value as JsonValue;

/// Convenient re-exports for common types and functions
pub mod prelude {
    pub use crate::{
        DeltaMode, GameUtil, GameUtilConfig, GameUtilError, GameUtilResult, HighscoreEntry,
        InMemorySharedStore, SharedStore, StorageBackend, StoredValue, Viewport,
        calc_height_ratio, calc_vector_distance, calculate_fs, delta_time, find_exist,
        pick_from_list, populate_stub_highscore,
    };

    #[cfg(feature = "async")]
    pub use crate::AsyncSharedStore;

    pub use serde_json::Value as JsonValue;
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Result type alias for GameUtil operations
pub type GameUtilResult<T> = Result<T, GameUtilError>;

/// Common error type for GameUtil operations
#[derive(Debug, thiserror::Error)]
pub enum GameUtilError {
    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Error when a required key is not found in the SharedStore
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// The stored value has no JSON representation
    #[error("Value under key '{0}' is not serializable")]
    NotSerializable(String),

    /// Rejected argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error reported by a storage backend
    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_integration() {
        let mut store = InMemorySharedStore::new();

        store.set("test_key", json!("test_value")).unwrap();
        assert_eq!(store.get("test_key").unwrap(), Some(json!("test_value")));

        assert!(find_exist("test", "test_value"));
    }

    #[test]
    fn test_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json");
        assert!(json_error.is_err());

        let err: GameUtilError = json_error.unwrap_err().into();
        assert!(matches!(err, GameUtilError::SerializationError(_)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameUtilError::KeyNotFound("CONFIG".to_string()).to_string(),
            "Key not found: CONFIG"
        );
        assert_eq!(
            GameUtilError::NotSerializable("onHit".to_string()).to_string(),
            "Value under key 'onHit' is not serializable"
        );
    }
}
