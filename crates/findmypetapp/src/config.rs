//! # Configuration
//!
//! Configuration is managed by [`confique`], which handles layered loading from a TOML
//! file and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `FINDMYPET_STORAGE_KEY`, `FINDMYPET_DEMO`.
//! 2. **Data dir config**: `<data dir>/findmypet.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! The data directory itself is chosen by the client (flag, `FINDMYPET_DATA_DIR`, or
//! [`default_data_dir`]) before configuration is read.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `findmypet_listings` | Slot holding the listing collection |
//! | `include_demo_listings` | `true` | Append the built-in demo listings when browsing |

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::store::listing_store::DEFAULT_STORAGE_KEY;

pub const CONFIG_FILENAME: &str = "findmypet.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FindMyPetConfig {
    /// Key of the storage slot holding the listing collection.
    #[config(default = "findmypet_listings", env = "FINDMYPET_STORAGE_KEY")]
    pub storage_key: String,

    /// Whether browsing includes the built-in demo listings.
    #[config(default = true, env = "FINDMYPET_DEMO")]
    pub include_demo_listings: bool,
}

impl Default for FindMyPetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            include_demo_listings: true,
        }
    }
}

impl FindMyPetConfig {
    /// Loads env overrides, then `findmypet.toml` in `data_dir` (if present), then defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config = Self::builder()
            .env()
            .file(data_dir.join(CONFIG_FILENAME))
            .load()?;
        Ok(config)
    }
}

/// OS-appropriate data directory, e.g. `~/.local/share/findmypet` on Linux.
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "findmypet", "findmypet").map(|dirs| dirs.data_dir().to_path_buf())
}
