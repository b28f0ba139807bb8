//! Shared store implementations
//!
//! This module provides both synchronous and asynchronous shared store
//! implementations for passing data between the parts of a game.

#[cfg(feature = "async")]
pub mod async_store;
pub mod sync;

// Re-export the main types for convenience
#[cfg(feature = "async")]
pub use async_store::AsyncSharedStore;
pub use sync::{InMemorySharedStore, SharedStore};
