use crate::commands::helpers::{describe, ensure_mutable, find_listing, patch_listing};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ListingPatch;
use crate::store::DataStore;

/// Merges `patch` into a stored listing. The merged listing must still be valid.
pub fn run<S: DataStore>(store: &mut S, id: &str, patch: &ListingPatch) -> Result<CmdResult> {
    ensure_mutable(id)?;
    let mut preview = find_listing(store, id, false)?;

    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to update for {}",
            describe(&preview)
        )));
        return Ok(result);
    }

    patch.apply_to(&mut preview);
    preview.validate()?;

    let listing = patch_listing(store, id, patch)?;
    result.add_message(CmdMessage::success(format!("Updated {}", describe(&listing))));
    Ok(result.with_affected_listings(vec![listing]))
}
