use chrono::{DateTime, Utc};

use crate::commands::helpers::browsable_listings;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{filter_listings, Query};
use crate::store::DataStore;

/// Loads the browsable collection and runs it through the filter engine.
pub fn run<S: DataStore>(
    store: &S,
    query: &Query,
    include_demo: bool,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let listings = browsable_listings(store, include_demo);
    let matched = filter_listings(&listings, query, now);
    tracing::debug!(total = listings.len(), matched = matched.len(), "filtered listings");

    let mut result = CmdResult::default();
    if matched.is_empty() {
        let message = if listings.is_empty() {
            "No listings yet."
        } else {
            "No listings match the current filters."
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result.with_listed_listings(matched))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnimalType, Listing, ListingKind, ListingStatus, Location};
    use crate::seed;
    use crate::store::listing_store::fixtures::StoreFixture;
    use crate::store::listing_store::InMemoryStore;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 8, 12, 0, 0).unwrap()
    }

    fn listing(name: &str, animal_type: AnimalType, days_ago: i64) -> Listing {
        Listing::new(
            ListingKind::Lost,
            name,
            animal_type,
            "Brown",
            Location::new("Calgary", 0.0, 0.0),
            now() - Duration::days(days_ago),
        )
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let mut store = InMemoryStore::in_memory();
        store.save(listing("Old", AnimalType::Dog, 10)).unwrap();
        store.save(listing("New", AnimalType::Cat, 1)).unwrap();

        let result = run(&store, &Query::new(), false, now()).unwrap();
        let names: Vec<_> = result.listed_listings.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Old", "New"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn query_is_applied_to_persisted_and_demo_listings() {
        let mut store = InMemoryStore::in_memory();
        store.save(listing("Rex", AnimalType::Dog, 1)).unwrap();

        let query = Query::new().animal_type(AnimalType::Dog).recent();
        let result = run(&store, &query, true, now()).unwrap();

        assert!(result.listed_listings.iter().all(|l| l.animal_type == AnimalType::Dog));
        let demo_dogs = seed::demo_listings()
            .iter()
            .filter(|l| l.animal_type == AnimalType::Dog)
            .count();
        assert_eq!(result.listed_listings.len(), demo_dogs + 1);

        let dates: Vec<_> = result.listed_listings.iter().map(|l| l.date_reported).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn empty_results_explain_why() {
        let mut store = InMemoryStore::in_memory();
        let result = run(&store, &Query::new(), false, now()).unwrap();
        assert_eq!(result.messages[0].content, "No listings yet.");

        store.save(listing("Rex", AnimalType::Dog, 1)).unwrap();
        let query = Query::new().status(ListingStatus::Found);
        let result = run(&store, &query, false, now()).unwrap();
        assert!(result.listed_listings.is_empty());
        assert_eq!(result.messages[0].content, "No listings match the current filters.");
    }

    #[test]
    fn chips_and_followed_only_combine() {
        let fixture = StoreFixture::new()
            .with_followed("Snow")
            .with_found("Rocky")
            .with_sighting(AnimalType::Dog, 3)
            .with_lost("Pepper", AnimalType::Cat);

        let followed = run(&fixture.store, &Query::new().followed_only(), false, now()).unwrap();
        let names: Vec<_> = followed.listed_listings.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Snow"]);

        let query = Query::new().kind(ListingKind::Lost).status(ListingStatus::Active);
        let active_lost = run(&fixture.store, &query, false, now()).unwrap();
        let names: Vec<_> = active_lost.listed_listings.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Snow", "Pepper"]);
    }
}
