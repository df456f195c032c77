use findmypetapp::api::FindMyPetApi;
use findmypetapp::commands::report::NewListing;
use findmypetapp::config::CONFIG_FILENAME;
use findmypetapp::filter::Query;
use findmypetapp::model::{AnimalType, ListingStatus, Location};
use std::fs;
use tempfile::TempDir;

fn draft(name: &str) -> NewListing {
    NewListing::lost(
        name,
        AnimalType::Cat,
        "Grey",
        Location::new("Beltline, Calgary, AB", 51.0375, -114.0719),
    )
}

#[test]
fn test_open_reads_config_from_data_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILENAME),
        "storage_key = \"shelter\"\ninclude_demo_listings = false\n",
    )
    .unwrap();

    let mut api = FindMyPetApi::open(dir.path()).unwrap();
    assert!(!api.config().include_demo_listings);

    api.report(draft("Misty"), None).unwrap();
    assert!(dir.path().join("shelter.json").exists());

    let listed = api.list(&Query::new()).unwrap().listed_listings;
    assert_eq!(listed.len(), 1);
}

#[test]
fn test_listing_lifecycle_across_reopen() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILENAME), "include_demo_listings = false\n").unwrap();

    let id = {
        let mut api = FindMyPetApi::open(dir.path()).unwrap();
        let id = api.report(draft("Misty"), None).unwrap().affected_listings[0]
            .id
            .clone();
        api.follow(&id).unwrap();
        api.set_status(&id, ListingStatus::Found).unwrap();
        id
    };

    let mut api = FindMyPetApi::open(dir.path()).unwrap();
    let followed = api.followed().unwrap().listed_listings;
    assert_eq!(followed.len(), 1);
    assert_eq!(followed[0].status, ListingStatus::Found);

    api.delete(&[id.as_str()]).unwrap();
    assert!(api.list(&Query::new()).unwrap().listed_listings.is_empty());
}
