use chrono::{TimeZone, Utc};
use findmypetapp::model::{AnimalType, Listing, ListingKind, ListingPatch, ListingStatus, Location};
use findmypetapp::store::backend::StorageBackend;
use findmypetapp::store::fs_backend::FsBackend;
use findmypetapp::store::listing_store::FileStore;
use findmypetapp::store::DataStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("data"));
    (dir, store)
}

fn listing(name: &str) -> Listing {
    Listing::new(
        ListingKind::Lost,
        name,
        AnimalType::Dog,
        "Golden",
        Location::new("Kensington, Calgary, AB", 51.0527, -114.0909),
        Utc.with_ymd_and_hms(2024, 6, 10, 16, 20, 0).unwrap(),
    )
}

#[test]
fn test_fs_backend_basic_slot_io() {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());

    // 1. Missing slot
    assert_eq!(backend.read("slot").unwrap(), None);

    // 2. Write and read
    backend.write("slot", "[]").unwrap();
    assert_eq!(backend.read("slot").unwrap(), Some("[]".to_string()));

    // 3. Overwrite
    backend.write("slot", "[1]").unwrap();
    assert_eq!(backend.read("slot").unwrap(), Some("[1]".to_string()));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());

    backend.write("findmypet_listings", "[1]").unwrap();
    backend.write("findmypet_listings", "[2]").unwrap();

    let expected = dir.path().join("findmypet_listings.json");
    assert_eq!(fs::read_to_string(&expected).unwrap(), "[2]");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());

    assert!(backend.write("../escape", "x").is_err());
    assert!(backend.write("", "x").is_err());
    assert!(backend.read(".hidden").is_err());
}

#[test]
fn test_file_store_survives_reopen() {
    let (dir, mut store) = setup();
    let eva = store.save(listing("Eva")).unwrap();
    let rex = store.save(listing("Rex")).unwrap();
    store
        .update(&eva.id, &ListingPatch::status(ListingStatus::Found))
        .unwrap();

    let reopened = FileStore::new(dir.path().join("data"));
    let all = reopened.get_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, eva.id);
    assert_eq!(all[0].status, ListingStatus::Found);
    assert_eq!(all[1], rex);
}

#[test]
fn test_file_store_wire_format() {
    let (dir, mut store) = setup();
    store.save(listing("Eva")).unwrap();

    let raw = fs::read_to_string(dir.path().join("data/findmypet_listings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &json[0];
    assert_eq!(first["type"], "Lost");
    assert_eq!(first["animalType"], "Dog");
    assert_eq!(first["dateReported"], "2024-06-10T16:20:00Z");
    assert_eq!(first["isFollowed"], false);
}

#[test]
fn test_file_store_recovers_from_corrupt_file() {
    let (dir, mut store) = setup();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/findmypet_listings.json"), "{not json").unwrap();

    assert!(store.get_all().is_empty());

    // The next write replaces the corrupt content with a fresh collection.
    store.save(listing("Eva")).unwrap();
    assert_eq!(store.get_all().len(), 1);
}
