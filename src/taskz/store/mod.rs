//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the task collection lives so the
//! command layer never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, the whole collection as one JSON
//!   document in `tasks.json`
//! - [`memory::InMemoryStore`]: In-memory storage for testing, no persistence
//!
//! ## Storage Format
//!
//! For `FileStore`, a single JSON object keyed by decimal task IDs:
//!
//! ```text
//! {
//!   "1": { "id": 1, "description": "...", "status": "todo",
//!          "createdAt": "...", "updatedAt": "..." }
//! }
//! ```
//!
//! There is no cross-process locking: two simultaneous invocations may race
//! on the file. That is an accepted limitation, not something the store
//! arbitrates.

use crate::error::Result;
use crate::model::TaskMap;

pub mod fs;
pub mod memory;

/// Abstract interface for task collection storage.
///
/// The collection is always read and written as a whole; a save either
/// replaces the entire document or leaves the previous one intact.
pub trait DataStore {
    /// Load the full collection. A missing or unreadable document must yield
    /// an empty collection, never an error a user has to repair by hand.
    fn load(&mut self) -> Result<TaskMap>;

    /// Persist the full collection, replacing whatever was stored before.
    fn save(&mut self, tasks: &TaskMap) -> Result<()>;
}
