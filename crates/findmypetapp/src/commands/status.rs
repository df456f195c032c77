use crate::commands::helpers::{describe, patch_listing};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ListingPatch, ListingStatus};
use crate::store::DataStore;

/// Sets the lifecycle status. Any transition is accepted.
pub fn run<S: DataStore>(store: &mut S, id: &str, status: ListingStatus) -> Result<CmdResult> {
    let listing = patch_listing(store, id, &ListingPatch::status(status))?;
    tracing::info!(id, %status, "status changed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Marked {} as {}",
        describe(&listing),
        status
    )));
    Ok(result.with_affected_listings(vec![listing]))
}
