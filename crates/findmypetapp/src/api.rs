//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for every findmypet operation, whichever UI is driving it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (id lists, the current time, demo-listing settings)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business rules; those live in `commands/*.rs`.
//!
//! ## Generic Over DataStore
//!
//! `FindMyPetApi<S: DataStore>` is generic over the storage backend:
//! - Production: `FindMyPetApi<FileStore>`, built with [`FindMyPetApi::open`]
//! - Testing: `FindMyPetApi<InMemoryStore>`
//!
//! The API owns its store. There is no process-wide store instance.

use chrono::Utc;
use std::path::Path;

use crate::commands::{self, profile::UserProfile, report::NewListing, CmdResult};
use crate::config::FindMyPetConfig;
use crate::error::Result;
use crate::filter::Query;
use crate::model::{ListingPatch, ListingStatus};
use crate::store::listing_store::FileStore;
use crate::store::DataStore;

pub struct FindMyPetApi<S: DataStore> {
    store: S,
    config: FindMyPetConfig,
}

impl FindMyPetApi<FileStore> {
    /// Loads configuration from `data_dir` and opens the listing slot stored there.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let config = FindMyPetConfig::load(data_dir)?;
        let store = FileStore::new(data_dir.to_path_buf()).with_key(config.storage_key.clone());
        tracing::debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opened store");
        Ok(Self::new(store, config))
    }
}

impl<S: DataStore> FindMyPetApi<S> {
    pub fn new(store: S, config: FindMyPetConfig) -> Self {
        Self { store, config }
    }

    pub fn report(&mut self, draft: NewListing, author: Option<&UserProfile>) -> Result<CmdResult> {
        commands::report::run(&mut self.store, draft, author, Utc::now())
    }

    pub fn list(&self, query: &Query) -> Result<CmdResult> {
        commands::list::run(
            &self.store,
            query,
            self.config.include_demo_listings,
            Utc::now(),
        )
    }

    /// The Followed page: every followed listing, newest first.
    pub fn followed(&self) -> Result<CmdResult> {
        self.list(&Query::new().followed_only().recent())
    }

    pub fn view<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        let ids = normalize_ids(ids);
        commands::view::run(&self.store, &ids, self.config.include_demo_listings)
    }

    pub fn follow(&mut self, id: &str) -> Result<CmdResult> {
        commands::follow::follow(&mut self.store, id.trim())
    }

    pub fn unfollow(&mut self, id: &str) -> Result<CmdResult> {
        commands::follow::unfollow(&mut self.store, id.trim())
    }

    pub fn toggle_follow(&mut self, id: &str) -> Result<CmdResult> {
        commands::follow::toggle(&mut self.store, id.trim())
    }

    pub fn set_status(&mut self, id: &str, status: ListingStatus) -> Result<CmdResult> {
        commands::status::run(&mut self.store, id.trim(), status)
    }

    pub fn update(&mut self, id: &str, patch: &ListingPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id.trim(), patch)
    }

    pub fn delete<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        let ids = normalize_ids(ids);
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn profile(&self, user: &UserProfile) -> Result<CmdResult> {
        commands::profile::run(&self.store, user, Utc::now())
    }

    pub fn config(&self) -> &FindMyPetConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Trims ids and drops blanks and repeats, preserving order.
fn normalize_ids<I: AsRef<str>>(inputs: &[I]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::with_capacity(inputs.len());
    for input in inputs {
        let id = input.as_ref().trim();
        if !id.is_empty() && !ids.iter().any(|seen| seen == id) {
            ids.push(id.to_string());
        }
    }
    ids
}
