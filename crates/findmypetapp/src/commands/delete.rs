use crate::commands::helpers::{describe, ensure_mutable};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FindMyPetError, Result};
use crate::store::DataStore;

/// Deletes every id, or none of them: all ids are resolved before the first delete.
pub fn run<S: DataStore>(store: &mut S, ids: &[String]) -> Result<CmdResult> {
    let mut targets = Vec::with_capacity(ids.len());
    for id in ids {
        ensure_mutable(id)?;
        let listing = store
            .get_by_id(id)
            .ok_or_else(|| FindMyPetError::ListingNotFound(id.clone()))?;
        targets.push(listing);
    }

    let mut result = CmdResult::default();
    for listing in targets {
        let id = &listing.id;
        if store.delete(id)? {
            tracing::info!(id = %id, "listing deleted");
            result.add_message(CmdMessage::success(format!("Deleted {}", describe(&listing))));
            result.affected_listings.push(listing);
        }
    }

    Ok(result)
}
