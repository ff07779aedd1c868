//! Repository Layer - Core Traits
//!
//! The key-value medium the feedback collection is persisted to.
//! Implementations can be browser storage, in-memory, etc.

use crate::error::Result;

/// String slots addressed by key
///
/// Calls are synchronous; a medium that refuses a read or write reports
/// `FeedPulseError::Storage`.
pub trait KeyValueStore {
    /// Read a slot; `None` when nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace a slot's value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Clear a slot
    fn remove(&mut self, key: &str) -> Result<()>;
}
