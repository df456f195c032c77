use crate::commands::helpers::{describe, ensure_mutable, find_listing, patch_listing};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ListingPatch;
use crate::store::DataStore;

pub fn follow<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    set_followed(store, id, true)
}

pub fn unfollow<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    set_followed(store, id, false)
}

/// Flips the follow flag, as the heart button on a listing card does.
pub fn toggle<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let current = find_listing(store, id, false)?;
    set_followed(store, id, !current.is_followed)
}

fn set_followed<S: DataStore>(store: &mut S, id: &str, followed: bool) -> Result<CmdResult> {
    ensure_mutable(id)?;
    let current = find_listing(store, id, false)?;
    let mut result = CmdResult::default();

    if current.is_followed == followed {
        let state = if followed { "Already following" } else { "Not following" };
        result.add_message(CmdMessage::warning(format!("{} {}", state, describe(&current))));
        return Ok(result.with_affected_listings(vec![current]));
    }

    let listing = patch_listing(store, id, &ListingPatch::followed(followed))?;
    let verb = if followed { "Following" } else { "Stopped following" };
    result.add_message(CmdMessage::success(format!("{} {}", verb, describe(&listing))));
    Ok(result.with_affected_listings(vec![listing]))
}
