use crate::error::{FindMyPetError, Result};
use crate::model::{Listing, ListingPatch};
use crate::seed;
use crate::store::DataStore;

/// The collection the UI browses: persisted listings, then demo ones if enabled.
pub fn browsable_listings<S: DataStore>(store: &S, include_demo: bool) -> Vec<Listing> {
    let persisted = store.get_all();
    if include_demo {
        seed::with_demo_listings(persisted)
    } else {
        persisted
    }
}

/// Finds a listing in the browsable collection.
pub fn find_listing<S: DataStore>(store: &S, id: &str, include_demo: bool) -> Result<Listing> {
    if let Some(listing) = store.get_by_id(id) {
        return Ok(listing);
    }
    if include_demo {
        if let Some(listing) = seed::demo_listings().iter().find(|l| l.id == id) {
            return Ok(listing.clone());
        }
    }
    Err(FindMyPetError::ListingNotFound(id.to_string()))
}

/// Rejects ids that cannot be mutated because they are not in the store.
pub fn ensure_mutable(id: &str) -> Result<()> {
    if seed::is_demo_id(id) {
        return Err(FindMyPetError::Validation(format!(
            "Listing {} is a demo listing and cannot be changed",
            id
        )));
    }
    Ok(())
}

/// Applies `patch` to a stored listing, turning a missing id into `ListingNotFound`.
pub fn patch_listing<S: DataStore>(store: &mut S, id: &str, patch: &ListingPatch) -> Result<Listing> {
    ensure_mutable(id)?;
    store
        .update(id, patch)?
        .ok_or_else(|| FindMyPetError::ListingNotFound(id.to_string()))
}

/// Short human label, e.g. "Lost Dog Max".
pub fn describe(listing: &Listing) -> String {
    format!("{} {} {}", listing.kind, listing.animal_type, listing.name)
}
