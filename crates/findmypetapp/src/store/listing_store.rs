use super::backend::StorageBackend;
use super::fs_backend::FsBackend;
use super::mem_backend::MemBackend;
use super::DataStore;
use crate::error::{FindMyPetError, Result};
use crate::model::{Listing, ListingPatch};
use std::path::PathBuf;
use tracing::{debug, warn};

pub const DEFAULT_STORAGE_KEY: &str = "findmypet_listings";

pub struct ListingStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    key: String,
}

impl<B: StorageBackend> ListingStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Decodes the slot, treating anything unreadable as an empty collection.
    fn load(&self) -> Vec<Listing> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read listings, treating as empty");
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Listing>>(&raw) {
            Ok(listings) => listings,
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored listings are corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    fn persist(&self, listings: &[Listing]) -> Result<()> {
        let content = serde_json::to_string(listings).map_err(FindMyPetError::Serialization)?;
        self.backend.write(&self.key, &content)?;
        debug!(key = %self.key, count = listings.len(), "persisted listings");
        Ok(())
    }
}

impl<B: StorageBackend> DataStore for ListingStore<B> {
    fn get_all(&self) -> Vec<Listing> {
        self.load()
    }

    fn save(&mut self, listing: Listing) -> Result<Listing> {
        let mut listings = self.load();
        listings.push(listing.clone());
        self.persist(&listings)?;
        Ok(listing)
    }

    fn update(&mut self, id: &str, patch: &ListingPatch) -> Result<Option<Listing>> {
        let mut listings = self.load();
        let Some(listing) = listings.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        patch.apply_to(listing);
        let updated = listing.clone();

        self.persist(&listings)?;
        Ok(Some(updated))
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let mut listings = self.load();
        let before = listings.len();
        listings.retain(|l| l.id != id);
        if listings.len() == before {
            return Ok(false);
        }

        self.persist(&listings)?;
        Ok(true)
    }
}

/// The production store: listings in `<root>/<key>.json`.
pub type FileStore = ListingStore<FsBackend>;

impl ListingStore<FsBackend> {
    pub fn new(root: PathBuf) -> Self {
        Self::with_backend(FsBackend::new(root))
    }
}

/// Store for tests and embedding without a filesystem.
pub type InMemoryStore = ListingStore<MemBackend>;

impl ListingStore<MemBackend> {
    pub fn in_memory() -> Self {
        Self::with_backend(MemBackend::new())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

// --- Test Fixtures ---
