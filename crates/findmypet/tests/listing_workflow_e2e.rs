#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn findmypet_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("findmypet"));
    cmd.env("FINDMYPET_DATA_DIR", data_dir.as_os_str())
        .env("FINDMYPET_DEMO", "false")
        .env("NO_COLOR", "1")
        .env_remove("FINDMYPET_USER")
        .env_remove("FINDMYPET_USER_NAME")
        .env_remove("FINDMYPET_STORAGE_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn stored_ids(data_dir: &Path) -> Vec<String> {
    let raw = fs::read_to_string(data_dir.join("findmypet_listings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    json.as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_report_list_follow_status_delete() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");

    // 1. Empty store
    findmypet_cmd(&data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No listings yet."));

    // 2. Report a lost dog and a sighting
    findmypet_cmd(&data)
        .args([
            "report", "lost", "--name", "Max", "--animal", "dog", "--color", "Golden",
            "--address", "Kensington, Calgary, AB", "--breed", "Golden Retriever", "--age",
            "3 years",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reported Lost Dog Max"));

    findmypet_cmd(&data)
        .args([
            "report", "sighting", "--animal", "cat", "--color", "Black", "--address",
            "Bridgeland, Calgary, AB",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reported Sighting Cat Unknown"));

    let ids = stored_ids(&data);
    assert_eq!(ids.len(), 2);
    let max = &ids[0];

    // 3. Filters
    findmypet_cmd(&data)
        .args(["list", "--animal", "dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Max"))
        .stdout(predicate::str::contains("Unknown").not());

    findmypet_cmd(&data)
        .args(["list", "--animal", "all", "--type", "sighting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown"))
        .stdout(predicate::str::contains("Max").not());

    // 4. Follow
    findmypet_cmd(&data)
        .args(["follow", max])
        .assert()
        .success()
        .stdout(predicate::str::contains("Following Lost Dog Max"));

    findmypet_cmd(&data)
        .args(["followed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Max"))
        .stdout(predicate::str::contains("Unknown").not());

    // 5. Status
    findmypet_cmd(&data)
        .args(["status", max, "found"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked Lost Dog Max as Found"));

    findmypet_cmd(&data)
        .args(["show", max])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found"))
        .stdout(predicate::str::contains("Golden Retriever"));

    // 6. Delete
    findmypet_cmd(&data)
        .args(["delete", max])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted Lost Dog Max"));

    assert_eq!(stored_ids(&data).len(), 1);
}

#[test]
fn test_errors_exit_non_zero() {
    let temp = TempDir::new().unwrap();

    findmypet_cmd(temp.path())
        .args(["follow", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));

    findmypet_cmd(temp.path())
        .args([
            "report", "lost", "--name", "Max", "--animal", "hamster", "--color", "Brown",
            "--address", "Calgary",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hamster"));

    let long = "x".repeat(301);
    findmypet_cmd(temp.path())
        .args([
            "report", "sighting", "--animal", "dog", "--color", "Brown", "--address",
            "Calgary", "--description", &long,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit is 300"));
}

#[test]
fn test_profile_counts_authored_reports() {
    let temp = TempDir::new().unwrap();

    findmypet_cmd(temp.path())
        .args([
            "--user", "jane", "--user-name", "Jane Doe", "report", "sighting", "--animal",
            "bird", "--color", "Green", "--address", "Inglewood, Calgary, AB",
        ])
        .assert()
        .success();

    findmypet_cmd(temp.path())
        .args(["profile", "jane", "--user-name", "Jane Doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("First Step"));
}
