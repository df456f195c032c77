//! Built-in demo listings.
//!
//! Shown after the persisted listings when `include_demo_listings` is on, so a fresh
//! install has something to browse. They are never written to storage, which means
//! store mutations (follow, status) do not apply to them.

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

use crate::model::{
    AnimalType, Gender, Listing, ListingKind, ListingStatus, Location, UNKNOWN_NAME,
};

pub const DEMO_ID_PREFIX: &str = "demo-";

// 2025-09-01T00:00:00Z
const DEMO_EPOCH: i64 = 1_756_684_800;

static DEMO_LISTINGS: Lazy<Vec<Listing>> = Lazy::new(build_demo_listings);

pub fn demo_listings() -> &'static [Listing] {
    &DEMO_LISTINGS
}

pub fn is_demo_id(id: &str) -> bool {
    id.starts_with(DEMO_ID_PREFIX)
}

/// Persisted listings first, then the demo set.
pub fn with_demo_listings(mut persisted: Vec<Listing>) -> Vec<Listing> {
    persisted.extend(demo_listings().iter().cloned());
    persisted
}

fn days_after_epoch(days: i64, hours: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(DEMO_EPOCH, 0).unwrap_or_default()
        + Duration::days(days)
        + Duration::hours(hours)
}

#[allow(clippy::too_many_arguments)]
fn demo(
    n: u32,
    kind: ListingKind,
    name: &str,
    animal_type: AnimalType,
    gender: Gender,
    breed: Option<&str>,
    color: &str,
    age: Option<&str>,
    reported: DateTime<Utc>,
    location: Location,
    status: ListingStatus,
    description: &str,
) -> Listing {
    Listing {
        id: format!("{}{}", DEMO_ID_PREFIX, n),
        kind,
        name: name.to_string(),
        animal_type,
        gender: Some(gender),
        breed: breed.map(str::to_string),
        color: color.to_string(),
        age: age.map(str::to_string),
        date_reported: reported,
        location,
        status,
        image_url: None,
        image_urls: None,
        description: Some(description.to_string()),
        contact_info: None,
        is_followed: false,
        created_by: Some("demo".to_string()),
        posted_by: None,
    }
}

fn build_demo_listings() -> Vec<Listing> {
    vec![
        demo(
            1,
            ListingKind::Lost,
            "Max",
            AnimalType::Dog,
            Gender::Male,
            Some("Golden Retriever"),
            "Golden",
            Some("3 years"),
            days_after_epoch(0, 9),
            Location::new("Kensington, Calgary, AB", 51.0527, -114.0909),
            ListingStatus::Active,
            "Slipped his collar near the river path. Very friendly, responds to his name.",
        ),
        demo(
            2,
            ListingKind::Lost,
            "Luna",
            AnimalType::Cat,
            Gender::Female,
            Some("Siamese"),
            "Cream",
            Some("2 years"),
            days_after_epoch(3, 18),
            Location::new("Beltline, Calgary, AB", 51.0375, -114.0719),
            ListingStatus::Active,
            "Indoor cat, got out through an open window. Blue eyes, shy with strangers.",
        ),
        demo(
            3,
            ListingKind::Sighting,
            UNKNOWN_NAME,
            AnimalType::Dog,
            Gender::Unknown,
            None,
            "Black and white",
            None,
            days_after_epoch(5, 7),
            Location::new("Bridgeland, Calgary, AB", 51.0545, -114.0407),
            ListingStatus::Active,
            "Medium-sized dog running loose near the community garden, no collar seen.",
        ),
        demo(
            4,
            ListingKind::Lost,
            "Clover",
            AnimalType::Bunny,
            Gender::Female,
            Some("Holland Lop"),
            "Brown",
            Some("1 year"),
            days_after_epoch(-40, 12),
            Location::new("Hillhurst, Calgary, AB", 51.0589, -114.0921),
            ListingStatus::Found,
            "Found safe two streets away. Thank you everyone!",
        ),
        demo(
            5,
            ListingKind::Sighting,
            UNKNOWN_NAME,
            AnimalType::Bird,
            Gender::Unknown,
            Some("Budgie"),
            "Green",
            None,
            days_after_epoch(-120, 15),
            Location::new("Inglewood, Calgary, AB", 51.0375, -114.0219),
            ListingStatus::Stale,
            "Small green parakeet perched on a balcony railing, flew east.",
        ),
        demo(
            6,
            ListingKind::Lost,
            "Biscuit",
            AnimalType::Dog,
            Gender::Male,
            Some("Beagle"),
            "Tricolor",
            Some("9 years"),
            days_after_epoch(6, 20),
            Location::new("Mission, Calgary, AB", 51.0321, -114.0667),
            ListingStatus::Active,
            "Older beagle, slightly deaf. Needs daily medication.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_listings_are_valid_and_uniquely_identified() {
        let listings = demo_listings();
        assert!(!listings.is_empty());

        let ids: HashSet<_> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), listings.len());

        for listing in listings {
            assert!(is_demo_id(&listing.id));
            assert!(listing.validate().is_ok(), "{} is invalid", listing.id);
        }
    }

    #[test]
    fn persisted_listings_come_first() {
        let mut mine = demo_listings()[0].clone();
        mine.id = "1700000000000-abcdef12".into();

        let combined = with_demo_listings(vec![mine]);
        assert_eq!(combined.len(), demo_listings().len() + 1);
        assert_eq!(combined[0].id, "1700000000000-abcdef12");
        assert!(is_demo_id(&combined[1].id));
    }

    #[test]
    fn demo_dates_are_fixed() {
        assert_eq!(
            demo_listings()[0].date_reported.to_rfc3339(),
            "2025-09-01T09:00:00+00:00"
        );
    }
}
