//! # Domain Model: Listings
//!
//! This module defines the core data structures for findmypet: [`Listing`], its
//! enumerated attributes, the [`PosterInfo`] author snapshot and the [`ListingPatch`]
//! used for partial updates.
//!
//! ## Wire Format
//!
//! Listings are persisted as a JSON array with camelCase field names. The listing kind
//! is stored under `type`, timestamps as RFC 3339 strings:
//!
//! ```text
//! {
//!   "id": "1718036400000-3f9c2a1b",
//!   "type": "Lost",
//!   "name": "Eva",
//!   "animalType": "Dog",
//!   "color": "Golden",
//!   "dateReported": "2024-06-10T16:20:00Z",
//!   "location": { "address": "Portland, OR", "lat": 45.52, "lng": -122.68 },
//!   "status": "Active",
//!   "isFollowed": false
//! }
//! ```
//!
//! ## Optional Fields
//!
//! Several fields are optional on the wire. Rather than defaulting them inline at
//! every call site, each has one resolution function:
//!
//! - [`Listing::gender`]: absent gender resolves to [`Gender::Unknown`].
//! - [`Listing::images`]: `imageUrls` wins, the deprecated `imageUrl` is the fallback.
//! - [`leading_age_years`]: first integer found in the free-text `age`.
//!
//! ## Invariants
//!
//! Enforced at entry time by [`Listing::validate`], not by the store:
//! - `color` is non-empty
//! - `description` is at most [`MAX_DESCRIPTION_CHARS`] characters
//! - at most [`MAX_IMAGES`] image references

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{FindMyPetError, Result};

pub const MAX_DESCRIPTION_CHARS: usize = 300;
pub const MAX_IMAGES: usize = 4;
pub const UNKNOWN_NAME: &str = "Unknown";

/// Reporting intent: the owner lost the pet, or someone spotted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ListingKind {
    Lost,
    Sighting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnimalType {
    Dog,
    Cat,
    Bunny,
    Bird,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

/// Lifecycle of a report. Intended flow is `Active -> Found` or `Active -> Stale`,
/// but nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    Active,
    Found,
    Stale,
}

/// Case-insensitive parsing shared by the enumerated attributes.
macro_rules! named_enum {
    ($ty:ident, $label:expr, { $($variant:ident => $name:expr),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = FindMyPetError;

            fn from_str(s: &str) -> Result<Self> {
                $(
                    if s.trim().eq_ignore_ascii_case($name) {
                        return Ok($ty::$variant);
                    }
                )+
                Err(FindMyPetError::Validation(format!(
                    "Unknown {}: '{}'",
                    $label, s
                )))
            }
        }
    };
}

named_enum!(ListingKind, "listing type", { Lost => "Lost", Sighting => "Sighting" });
named_enum!(AnimalType, "animal type", {
    Dog => "Dog",
    Cat => "Cat",
    Bunny => "Bunny",
    Bird => "Bird",
    Other => "Other",
});
named_enum!(Gender, "gender", { Male => "Male", Female => "Female", Unknown => "Unknown" });
named_enum!(ListingStatus, "status", { Active => "Active", Found => "Found", Stale => "Stale" });

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(address: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            address: address.into(),
            lat,
            lng,
        }
    }
}

/// Icons a badge can be rendered with. Renderers map each variant explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeIcon {
    Star,
    Heart,
    Trophy,
    MapPin,
    Target,
    Zap,
    Users,
    CheckCircle2,
    Award,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBadge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub earned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<u32>,
    pub color: String,
    pub icon: BadgeIcon,
}

/// Public profile of the author, frozen at the moment the listing was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterInfo {
    pub name: String,
    pub avatar: String,
    pub joined_date: DateTime<Utc>,
    pub listings_count: u32,
    /// Successful matches and reunifications the author helped with.
    pub verifications_count: u32,
    pub active_listings: u32,
    pub sightings_reported: u32,
    pub followed_pets: u32,
    pub days_active: u32,
    #[serde(default)]
    pub badges: Vec<UserBadge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub name: String,
    pub animal_type: AnimalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    pub date_reported: DateTime<Utc>,
    pub location: Location,
    pub status: ListingStatus,
    /// Single image from older records; superseded by `image_urls`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    #[serde(default)]
    pub is_followed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<PosterInfo>,
}

impl Listing {
    /// A bare active listing. Optional attributes start empty.
    pub fn new(
        kind: ListingKind,
        name: impl Into<String>,
        animal_type: AnimalType,
        color: impl Into<String>,
        location: Location,
        date_reported: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_listing_id(Utc::now()),
            kind,
            name: name.into(),
            animal_type,
            gender: None,
            breed: None,
            color: color.into(),
            age: None,
            date_reported,
            location,
            status: ListingStatus::Active,
            image_url: None,
            image_urls: None,
            description: None,
            contact_info: None,
            is_followed: false,
            created_by: None,
            posted_by: None,
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender.unwrap_or(Gender::Unknown)
    }

    pub fn images(&self) -> Vec<&str> {
        match (&self.image_urls, &self.image_url) {
            (Some(urls), _) if !urls.is_empty() => urls.iter().map(String::as_str).collect(),
            (_, Some(url)) => vec![url.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn age_years(&self) -> Option<u32> {
        self.age.as_deref().and_then(leading_age_years)
    }

    pub fn validate(&self) -> Result<()> {
        if self.color.trim().is_empty() {
            return Err(FindMyPetError::Validation("Color is required".to_string()));
        }
        if let Some(description) = &self.description {
            let len = description.chars().count();
            if len > MAX_DESCRIPTION_CHARS {
                return Err(FindMyPetError::Validation(format!(
                    "Description is {} characters, the limit is {}",
                    len, MAX_DESCRIPTION_CHARS
                )));
            }
        }
        if let Some(urls) = &self.image_urls {
            if urls.len() > MAX_IMAGES {
                return Err(FindMyPetError::Validation(format!(
                    "{} images attached, the limit is {}",
                    urls.len(),
                    MAX_IMAGES
                )));
            }
        }
        Ok(())
    }
}

/// Unique listing id: creation millis plus a random suffix.
pub fn new_listing_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", now.timestamp_millis(), &suffix[..8])
}

/// Extracts the first run of digits in a free-text age ("5 years", "about 2").
/// Numbers too large for `u32` saturate.
pub fn leading_age_years(age: &str) -> Option<u32> {
    let digits: String = age
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

/// Fields to merge into an existing listing. `None` leaves the field untouched.
/// The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPatch {
    #[serde(rename = "type")]
    pub kind: Option<ListingKind>,
    pub name: Option<String>,
    pub animal_type: Option<AnimalType>,
    pub gender: Option<Gender>,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub age: Option<String>,
    pub date_reported: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    pub status: Option<ListingStatus>,
    pub image_urls: Option<Vec<String>>,
    pub description: Option<String>,
    pub contact_info: Option<String>,
    pub is_followed: Option<bool>,
}

impl ListingPatch {
    pub fn status(status: ListingStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn followed(is_followed: bool) -> Self {
        Self {
            is_followed: Some(is_followed),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, listing: &mut Listing) {
        if let Some(kind) = self.kind {
            listing.kind = kind;
        }
        if let Some(name) = &self.name {
            listing.name = name.clone();
        }
        if let Some(animal_type) = self.animal_type {
            listing.animal_type = animal_type;
        }
        if let Some(gender) = self.gender {
            listing.gender = Some(gender);
        }
        if let Some(breed) = &self.breed {
            listing.breed = Some(breed.clone());
        }
        if let Some(color) = &self.color {
            listing.color = color.clone();
        }
        if let Some(age) = &self.age {
            listing.age = Some(age.clone());
        }
        if let Some(date) = self.date_reported {
            listing.date_reported = date;
        }
        if let Some(location) = &self.location {
            listing.location = location.clone();
        }
        if let Some(status) = self.status {
            listing.status = status;
        }
        if let Some(urls) = &self.image_urls {
            listing.image_urls = Some(urls.clone());
        }
        if let Some(description) = &self.description {
            listing.description = Some(description.clone());
        }
        if let Some(contact) = &self.contact_info {
            listing.contact_info = Some(contact.clone());
        }
        if let Some(is_followed) = self.is_followed {
            listing.is_followed = is_followed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Listing {
        Listing::new(
            ListingKind::Lost,
            "Eva",
            AnimalType::Dog,
            "Golden",
            Location::new("Portland, OR", 45.52, -122.68),
            Utc.with_ymd_and_hms(2024, 6, 10, 16, 20, 0).unwrap(),
        )
    }

    #[test]
    fn leading_age_extracts_first_integer() {
        assert_eq!(leading_age_years("5 years"), Some(5));
        assert_eq!(leading_age_years("about 12 months"), Some(12));
        assert_eq!(leading_age_years("2-3 years"), Some(2));
        assert_eq!(leading_age_years("99999999999 years"), Some(u32::MAX));
        assert_eq!(leading_age_years("young"), None);
        assert_eq!(leading_age_years(""), None);
    }

    #[test]
    fn gender_resolves_to_unknown() {
        let mut listing = sample();
        assert_eq!(listing.gender(), Gender::Unknown);
        listing.gender = Some(Gender::Female);
        assert_eq!(listing.gender(), Gender::Female);
    }

    #[test]
    fn images_prefer_image_urls_over_legacy_field() {
        let mut listing = sample();
        assert!(listing.images().is_empty());

        listing.image_url = Some("legacy.jpg".into());
        assert_eq!(listing.images(), vec!["legacy.jpg"]);

        listing.image_urls = Some(vec!["a.jpg".into(), "b.jpg".into()]);
        assert_eq!(listing.images(), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn validate_rejects_long_description() {
        let mut listing = sample();
        listing.description = Some("x".repeat(MAX_DESCRIPTION_CHARS));
        assert!(listing.validate().is_ok());

        listing.description = Some("x".repeat(MAX_DESCRIPTION_CHARS + 1));
        assert!(matches!(
            listing.validate(),
            Err(FindMyPetError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_too_many_images_and_blank_color() {
        let mut listing = sample();
        listing.image_urls = Some((0..5).map(|i| format!("{}.jpg", i)).collect());
        assert!(listing.validate().is_err());

        let mut listing = sample();
        listing.color = "  ".into();
        assert!(listing.validate().is_err());
    }

    #[test]
    fn wire_format_uses_camel_case_and_type_key() {
        let mut listing = sample();
        listing.id = "a".into();
        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json["type"], "Lost");
        assert_eq!(json["animalType"], "Dog");
        assert_eq!(json["dateReported"], "2024-06-10T16:20:00Z");
        assert_eq!(json["isFollowed"], false);
        assert!(json.get("breed").is_none());
    }

    #[test]
    fn missing_follow_flag_defaults_to_false() {
        let raw = r#"{
            "id": "x", "type": "Sighting", "name": "Unknown", "animalType": "Cat",
            "color": "Black", "dateReported": "2024-02-01T00:00:00Z",
            "location": {"address": "Seattle", "lat": 0.0, "lng": 0.0},
            "status": "Active"
        }"#;
        let listing: Listing = serde_json::from_str(raw).unwrap();
        assert!(!listing.is_followed);
        assert_eq!(listing.gender(), Gender::Unknown);
    }

    #[test]
    fn enums_parse_case_insensitively() {
        assert_eq!("dog".parse::<AnimalType>().unwrap(), AnimalType::Dog);
        assert_eq!("FOUND".parse::<ListingStatus>().unwrap(), ListingStatus::Found);
        assert_eq!(" sighting ".parse::<ListingKind>().unwrap(), ListingKind::Sighting);
        assert!("hamster".parse::<AnimalType>().is_err());
    }

    #[test]
    fn patch_touches_only_set_fields() {
        let original = sample();
        let mut patched = original.clone();
        ListingPatch::status(ListingStatus::Found).apply_to(&mut patched);

        assert_eq!(patched.status, ListingStatus::Found);
        patched.status = original.status;
        assert_eq!(patched, original);
    }

    #[test]
    fn listing_ids_are_unique() {
        let now = Utc::now();
        let a = new_listing_id(now);
        let b = new_listing_id(now);
        assert_ne!(a, b);
        assert!(a.starts_with(&now.timestamp_millis().to_string()));
    }
}
