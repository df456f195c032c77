//! # Listing Filter Engine
//!
//! [`filter_listings`] narrows a listing collection down to what a [`Query`] asks for.
//! It is a pure function of `(listings, query, now)`: no I/O, no mutation of its
//! inputs, and it never fails.
//!
//! ## Predicates
//!
//! A query is compiled into a list of active [`Predicate`]s. A listing is kept only if it
//! passes **all** of them (AND, never OR), so predicates can be applied in any order or
//! one at a time with the same result:
//!
//! | Predicate | Active when | Passes when |
//! |-----------|-------------|-------------|
//! | `Search` | search text non-blank | name, address, color or breed contains it (case-insensitive) |
//! | `AnimalType` | type set | exact match |
//! | `Breed` | advanced breed non-empty | breed contains it; no breed fails |
//! | `Location` | advanced location non-empty | address contains it |
//! | `Gender` | advanced gender set | resolved gender equals it |
//! | `DateRange` | range set | whole days since report within the range |
//! | `AgeRange` | range set | first integer of `age` within range; no number passes |
//! | `Kinds` | type toggles non-empty | kind in set |
//! | `Statuses` | status toggles non-empty | status in set |
//! | `FollowedOnly` | flag set | listing is followed |
//!
//! ## Recency Is a Sort, Not a Filter
//!
//! The UI shows "Recent" next to the status chips, but it only reorders results
//! (newest report first). It lives in [`Query::sort_recent`], apart from
//! [`Query::status_toggles`]. [`Query::toggle_chip`] maps chip labels accordingly.
//! Without it, the input order is preserved.
//!
//! ## Unparsable Ages
//!
//! A listing whose `age` has no number is never excluded by an age range. Product may
//! want such listings hidden when a range is picked; until then they stay visible.
//!
//! ## Malformed Input
//!
//! Raw UI values go through [`choice`], which maps `""`, `"all"` and anything
//! unrecognised to `None`: an inactive predicate, never an error.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{FindMyPetError, Result};
use crate::model::{AnimalType, Gender, Listing, ListingKind, ListingStatus};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// How recently a listing must have been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRange {
    Today,
    Week,
    Month,
    ThreeMonths,
}

impl DateRange {
    /// Largest number of whole days since the report that still matches.
    pub fn max_days(&self) -> i64 {
        match self {
            DateRange::Today => 0,
            DateRange::Week => 7,
            DateRange::Month => 30,
            DateRange::ThreeMonths => 90,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::ThreeMonths => "3months",
        }
    }
}

impl FromStr for DateRange {
    type Err = FindMyPetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(DateRange::Today),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "3months" => Ok(DateRange::ThreeMonths),
            other => Err(FindMyPetError::Validation(format!(
                "Unknown date range: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age bands in years. Bounds are inclusive, so neighbouring bands share an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeRange {
    Puppy,
    Young,
    Adult,
    Senior,
}

impl AgeRange {
    pub fn contains(&self, years: u32) -> bool {
        match self {
            AgeRange::Puppy => years <= 1,
            AgeRange::Young => (1..=3).contains(&years),
            AgeRange::Adult => (3..=7).contains(&years),
            AgeRange::Senior => years >= 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRange::Puppy => "puppy",
            AgeRange::Young => "young",
            AgeRange::Adult => "adult",
            AgeRange::Senior => "senior",
        }
    }
}

impl FromStr for AgeRange {
    type Err = FindMyPetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "puppy" => Ok(AgeRange::Puppy),
            "young" => Ok(AgeRange::Young),
            "adult" => Ok(AgeRange::Adult),
            "senior" => Ok(AgeRange::Senior),
            other => Err(FindMyPetError::Validation(format!(
                "Unknown age range: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a raw UI selection. `""`, `"all"` and unknown values select nothing.
pub fn choice<T: FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return None;
    }
    raw.parse().ok()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvancedFilters {
    pub breed: Option<String>,
    pub location: Option<String>,
    pub gender: Option<Gender>,
    pub date_range: Option<DateRange>,
    pub age_range: Option<AgeRange>,
}

impl AdvancedFilters {
    /// Number of filters that will actually constrain results.
    pub fn active_count(&self) -> usize {
        [
            non_empty(&self.breed).is_some(),
            non_empty(&self.location).is_some(),
            self.gender.is_some(),
            self.date_range.is_some(),
            self.age_range.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub search_text: Option<String>,
    pub animal_type: Option<AnimalType>,
    pub type_toggles: BTreeSet<ListingKind>,
    pub status_toggles: BTreeSet<ListingStatus>,
    /// Newest reports first. Does not affect membership.
    pub sort_recent: bool,
    pub followed_only: bool,
    pub advanced: AdvancedFilters,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn animal_type(mut self, animal_type: AnimalType) -> Self {
        self.animal_type = Some(animal_type);
        self
    }

    pub fn kind(mut self, kind: ListingKind) -> Self {
        self.type_toggles.insert(kind);
        self
    }

    pub fn status(mut self, status: ListingStatus) -> Self {
        self.status_toggles.insert(status);
        self
    }

    pub fn recent(mut self) -> Self {
        self.sort_recent = true;
        self
    }

    pub fn followed_only(mut self) -> Self {
        self.followed_only = true;
        self
    }

    pub fn advanced(mut self, advanced: AdvancedFilters) -> Self {
        self.advanced = advanced;
        self
    }

    /// Toggles a filter chip by its label: `Lost`/`Sighting` flip type toggles,
    /// `Active`/`Found`/`Stale` flip status toggles, `Recent` flips the sort.
    /// Returns false for labels that are not chips.
    pub fn toggle_chip(&mut self, label: &str) -> bool {
        if label.trim().eq_ignore_ascii_case("recent") {
            self.sort_recent = !self.sort_recent;
            return true;
        }
        if let Ok(kind) = label.parse::<ListingKind>() {
            if !self.type_toggles.remove(&kind) {
                self.type_toggles.insert(kind);
            }
            return true;
        }
        if let Ok(status) = label.parse::<ListingStatus>() {
            if !self.status_toggles.remove(&status) {
                self.status_toggles.insert(status);
            }
            return true;
        }
        false
    }

    /// Clears every chip and advanced filter, keeping the search text and animal type.
    pub fn clear_filters(&mut self) {
        self.type_toggles.clear();
        self.status_toggles.clear();
        self.sort_recent = false;
        self.advanced = AdvancedFilters::default();
    }

    /// The membership predicates this query activates, in evaluation order.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut preds = Vec::new();

        if let Some(text) = &self.search_text {
            if !text.is_empty() {
                preds.push(Predicate::Search(text.to_lowercase()));
            }
        }
        if let Some(animal_type) = self.animal_type {
            preds.push(Predicate::AnimalType(animal_type));
        }
        if let Some(breed) = non_empty(&self.advanced.breed) {
            preds.push(Predicate::Breed(breed.to_lowercase()));
        }
        if let Some(location) = non_empty(&self.advanced.location) {
            preds.push(Predicate::Location(location.to_lowercase()));
        }
        if let Some(gender) = self.advanced.gender {
            preds.push(Predicate::Gender(gender));
        }
        if let Some(range) = self.advanced.date_range {
            preds.push(Predicate::DateRange(range));
        }
        if let Some(range) = self.advanced.age_range {
            preds.push(Predicate::AgeRange(range));
        }
        if !self.type_toggles.is_empty() {
            preds.push(Predicate::Kinds(self.type_toggles.clone()));
        }
        if !self.status_toggles.is_empty() {
            preds.push(Predicate::Statuses(self.status_toggles.clone()));
        }
        if self.followed_only {
            preds.push(Predicate::FollowedOnly);
        }

        preds
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// One membership test. Text payloads are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Search(String),
    AnimalType(AnimalType),
    Breed(String),
    Location(String),
    Gender(Gender),
    DateRange(DateRange),
    AgeRange(AgeRange),
    Kinds(BTreeSet<ListingKind>),
    Statuses(BTreeSet<ListingStatus>),
    FollowedOnly,
}

impl Predicate {
    pub fn matches(&self, listing: &Listing, now: DateTime<Utc>) -> bool {
        match self {
            Predicate::Search(term) => {
                contains_ci(&listing.name, term)
                    || contains_ci(&listing.location.address, term)
                    || contains_ci(&listing.color, term)
                    || listing
                        .breed
                        .as_deref()
                        .is_some_and(|breed| contains_ci(breed, term))
            }
            Predicate::AnimalType(animal_type) => listing.animal_type == *animal_type,
            Predicate::Breed(term) => listing
                .breed
                .as_deref()
                .is_some_and(|breed| contains_ci(breed, term)),
            Predicate::Location(term) => contains_ci(&listing.location.address, term),
            Predicate::Gender(gender) => listing.gender() == *gender,
            Predicate::DateRange(range) => {
                days_since(listing.date_reported, now) <= range.max_days()
            }
            Predicate::AgeRange(range) => listing
                .age_years()
                .map_or(true, |years| range.contains(years)),
            Predicate::Kinds(kinds) => kinds.contains(&listing.kind),
            Predicate::Statuses(statuses) => statuses.contains(&listing.status),
            Predicate::FollowedOnly => listing.is_followed,
        }
    }
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Whole days elapsed, rounded down. Future reports give negative values.
pub fn days_since(reported: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - reported).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Keeps the listings that pass every predicate, preserving input order.
pub fn apply_predicates(
    listings: &[Listing],
    predicates: &[Predicate],
    now: DateTime<Utc>,
) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| predicates.iter().all(|p| p.matches(listing, now)))
        .cloned()
        .collect()
}

/// Stable sort, newest report first.
pub fn sort_by_recent(listings: &mut [Listing]) {
    listings.sort_by(|a, b| b.date_reported.cmp(&a.date_reported));
}

pub fn filter_listings(listings: &[Listing], query: &Query, now: DateTime<Utc>) -> Vec<Listing> {
    let mut matched = apply_predicates(listings, &query.predicates(), now);
    if query.sort_recent {
        sort_by_recent(&mut matched);
    }
    matched
}
