//! # Storage Layer
//!
//! This module defines the storage abstraction for findmypet. The [`DataStore`] trait
//! allows the application to work with different storage backends.
//!
//! ## Single-Slot Model
//!
//! All user-created listings live in **one** string slot of a key-value store, encoded as
//! a JSON array. There are no per-record files and no incremental writes:
//!
//! 1. **Read**: load the slot, decode the whole array.
//! 2. **Mutate**: change the decoded `Vec<Listing>` in memory.
//! 3. **Write**: encode the whole array and replace the slot.
//!
//! ## Failure Semantics
//!
//! - **Reads fail soft**: a missing, unreadable or corrupt slot is treated as "no
//!   listings". The problem is logged with `tracing::warn!` and never raised.
//! - **Writes fail loud**: I/O errors and quota exhaustion are returned to the caller.
//! - **Not found** is a value, not an error: `update` yields `Ok(None)`, `delete`
//!   yields `Ok(false)`.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw slot I/O (`read`/`write` a string).
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per slot, atomic writes.
//! - [`mem_backend::MemBackend`]: in-memory slots with an optional byte quota.
//! - [`listing_store::ListingStore`]: the listing collection on top of any backend.
//!
//! ## Storage Layout
//!
//! For `FsBackend`:
//! ```text
//! <data dir>/
//! ├── findmypet_listings.json   # JSON array of listings
//! └── findmypet.toml            # Optional configuration
//! ```

use crate::error::Result;
use crate::model::{Listing, ListingPatch};

pub mod backend;
pub mod fs_backend;
pub mod listing_store;
pub mod mem_backend;

/// Abstract interface for listing storage.
pub trait DataStore {
    /// Every persisted listing, in insertion order. Empty when storage is unreadable.
    fn get_all(&self) -> Vec<Listing>;

    /// Append a listing and return it unchanged. Ids are not checked for collisions.
    fn save(&mut self, listing: Listing) -> Result<Listing>;

    /// Merge `patch` into the listing with `id`. `Ok(None)` if there is none.
    fn update(&mut self, id: &str, patch: &ListingPatch) -> Result<Option<Listing>>;

    /// Remove the listing with `id`; returns whether one was removed.
    fn delete(&mut self, id: &str) -> Result<bool>;

    fn get_by_id(&self, id: &str) -> Option<Listing> {
        self.get_all().into_iter().find(|l| l.id == id)
    }
}
