//! Reporting a lost pet or a sighting.
//!
//! A [`NewListing`] is what the report form collects. `run` turns it into a stored
//! [`Listing`]: it assigns the id, defaults the date and the sighting name, attaches
//! the author snapshot and validates everything before the store is touched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::commands::helpers::describe;
use crate::commands::profile::{self, UserProfile};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FindMyPetError, Result};
use crate::model::{
    new_listing_id, AnimalType, Gender, Listing, ListingKind, ListingStatus, Location,
    UNKNOWN_NAME,
};
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    #[serde(rename = "type")]
    pub kind: ListingKind,
    #[serde(default)]
    pub name: String,
    pub animal_type: AnimalType,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub breed: Option<String>,
    pub color: String,
    #[serde(default)]
    pub age: Option<String>,
    /// When the pet went missing or was seen. Defaults to the reporting time.
    #[serde(default)]
    pub date_reported: Option<DateTime<Utc>>,
    pub location: Location,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
}

impl NewListing {
    pub fn lost(
        name: impl Into<String>,
        animal_type: AnimalType,
        color: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::draft(ListingKind::Lost, name.into(), animal_type, color.into(), location)
    }

    pub fn sighting(animal_type: AnimalType, color: impl Into<String>, location: Location) -> Self {
        Self::draft(
            ListingKind::Sighting,
            String::new(),
            animal_type,
            color.into(),
            location,
        )
    }

    fn draft(
        kind: ListingKind,
        name: String,
        animal_type: AnimalType,
        color: String,
        location: Location,
    ) -> Self {
        Self {
            kind,
            name,
            animal_type,
            gender: None,
            breed: None,
            color,
            age: None,
            date_reported: None,
            location,
            image_urls: Vec::new(),
            description: None,
            contact_info: None,
        }
    }

    /// Builds the listing without an author. Blank optional text becomes `None`.
    pub fn into_listing(self, now: DateTime<Utc>) -> Result<Listing> {
        let name = self.name.trim();
        let name = match (self.kind, name.is_empty()) {
            (ListingKind::Lost, true) => {
                return Err(FindMyPetError::Validation(
                    "A lost pet report needs the pet's name".to_string(),
                ))
            }
            (ListingKind::Sighting, true) => UNKNOWN_NAME.to_string(),
            (_, false) => name.to_string(),
        };

        let listing = Listing {
            id: new_listing_id(now),
            kind: self.kind,
            name,
            animal_type: self.animal_type,
            gender: self.gender,
            breed: non_blank(self.breed),
            color: self.color.trim().to_string(),
            age: non_blank(self.age),
            date_reported: self.date_reported.unwrap_or(now),
            location: self.location,
            status: ListingStatus::Active,
            image_url: None,
            image_urls: (!self.image_urls.is_empty()).then_some(self.image_urls),
            description: non_blank(self.description),
            contact_info: non_blank(self.contact_info),
            is_followed: false,
            created_by: None,
            posted_by: None,
        };
        listing.validate()?;
        Ok(listing)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn run<S: DataStore>(
    store: &mut S,
    draft: NewListing,
    author: Option<&UserProfile>,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let mut listing = draft.into_listing(now)?;

    if let Some(user) = author {
        // The new listing counts towards the snapshot it carries.
        let mut listings = store.get_all();
        listing.created_by = Some(user.id.clone());
        listings.push(listing.clone());
        let stats = profile::compute_stats(user, &listings, now);
        listing.posted_by = Some(profile::poster_info(user, &stats));
    }

    let saved = store.save(listing)?;
    tracing::info!(id = %saved.id, kind = %saved.kind, "listing reported");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Reported {} ({})",
        describe(&saved),
        saved.id
    )));
    Ok(result.with_affected_listings(vec![saved]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MAX_DESCRIPTION_CHARS, MAX_IMAGES};
    use crate::store::listing_store::{InMemoryStore, ListingStore};
    use crate::store::mem_backend::MemBackend;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    fn park() -> Location {
        Location::new("Prince's Island Park, Calgary, AB", 51.0544, -114.0697)
    }

    #[test]
    fn lost_report_is_stored_active_and_unfollowed() {
        let mut store = InMemoryStore::in_memory();
        let mut draft = NewListing::lost("Max", AnimalType::Dog, "Golden", park());
        draft.breed = Some("Golden Retriever".into());

        let result = run(&mut store, draft, None, now()).unwrap();
        let saved = &result.affected_listings[0];

        assert_eq!(saved.status, ListingStatus::Active);
        assert!(!saved.is_followed);
        assert_eq!(saved.date_reported, now());
        assert_eq!(store.get_all(), vec![saved.clone()]);
        assert!(result.messages[0].content.contains("Lost Dog Max"));
    }

    #[test]
    fn sighting_without_name_is_unknown() {
        let mut store = InMemoryStore::in_memory();
        let draft = NewListing::sighting(AnimalType::Cat, "Black", park());

        let result = run(&mut store, draft, None, now()).unwrap();
        assert_eq!(result.affected_listings[0].name, UNKNOWN_NAME);
    }

    #[test]
    fn lost_report_requires_a_name() {
        let mut store = InMemoryStore::in_memory();
        let draft = NewListing::lost("  ", AnimalType::Dog, "Golden", park());

        let err = run(&mut store, draft, None, now()).unwrap_err();
        assert!(matches!(err, FindMyPetError::Validation(_)));
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn invalid_drafts_write_nothing() {
        let mut store = InMemoryStore::in_memory();

        let mut long = NewListing::lost("Max", AnimalType::Dog, "Golden", park());
        long.description = Some("a".repeat(MAX_DESCRIPTION_CHARS + 1));
        assert!(run(&mut store, long, None, now()).is_err());

        let mut photos = NewListing::lost("Max", AnimalType::Dog, "Golden", park());
        photos.image_urls = (0..=MAX_IMAGES).map(|i| format!("{}.jpg", i)).collect();
        assert!(run(&mut store, photos, None, now()).is_err());

        let blank_color = NewListing::lost("Max", AnimalType::Dog, "", park());
        assert!(run(&mut store, blank_color, None, now()).is_err());

        assert!(store.get_all().is_empty());
    }

    #[test]
    fn supplied_date_is_kept_and_blank_text_dropped() {
        let mut store = InMemoryStore::in_memory();
        let mut draft = NewListing::lost("Max", AnimalType::Dog, "Golden", park());
        draft.date_reported = Some(now() - Duration::days(2));
        draft.contact_info = Some("   ".into());

        let result = run(&mut store, draft, None, now()).unwrap();
        let saved = &result.affected_listings[0];
        assert_eq!(saved.date_reported, now() - Duration::days(2));
        assert_eq!(saved.contact_info, None);
        assert_eq!(saved.image_urls, None);
    }

    #[test]
    fn author_snapshot_counts_the_new_listing() {
        let mut store = InMemoryStore::in_memory();
        let user = UserProfile::new("u1", "Jane Doe", now() - Duration::days(3));
        let draft = NewListing::sighting(AnimalType::Bird, "Green", park());

        let result = run(&mut store, draft, Some(&user), now()).unwrap();
        let saved = &result.affected_listings[0];
        assert_eq!(saved.created_by.as_deref(), Some("u1"));

        let poster = saved.posted_by.as_ref().unwrap();
        assert_eq!(poster.name, "Jane Doe");
        assert_eq!(poster.listings_count, 1);
        assert_eq!(poster.sightings_reported, 1);
        assert_eq!(poster.days_active, 3);
        assert!(poster.badges.iter().any(|b| b.id == "first-listing"));
    }

    #[test]
    fn storage_failure_is_reported() {
        let backend = MemBackend::default();
        backend.set_simulate_write_error(true);
        let mut store = ListingStore::with_backend(backend);
        let draft = NewListing::lost("Max", AnimalType::Dog, "Golden", park());

        assert!(run(&mut store, draft, None, now()).is_err());
    }
}
