//! CLI smoke tests for the geosar binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn classifies_fixture_to_stdout() {
    let mut cmd = Command::cargo_bin("geosar").expect("binary builds");
    cmd.arg("tests/data/VA.gpx")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "track_id,latitude,longitude,utc,utc_date,utc_time,local,date,time,\
             phase,start_phase,end_phase,name,description",
        ))
        .stdout(predicate::str::contains("RVA to RIC"))
        .stdout(predicate::str::contains("Night"));
}

#[test]
fn writes_table_to_file_and_prints_track_summary() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("phases.csv");

    let mut cmd = Command::cargo_bin("geosar").expect("binary builds");
    cmd.arg("tests/data/VA.gpx")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Track phases ==="))
        .stdout(predicate::str::contains("[2] RVA to RIC: Night -> Night"))
        .stdout(predicate::str::contains(
            "[4] Henrico to VDEM: Astronomical Twilight -> Daytime",
        ));

    let table = std::fs::read_to_string(&output).expect("table written");
    assert_eq!(table.lines().count(), 21);
}

#[test]
fn missing_input_file_fails_with_context() {
    let mut cmd = Command::cargo_bin("geosar").expect("binary builds");
    cmd.arg("tests/data/nonexistent.gpx")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nonexistent.gpx"));
}

#[test]
fn rejects_an_unknown_time_zone() {
    let mut cmd = Command::cargo_bin("geosar").expect("binary builds");
    cmd.arg("tests/data/VA.gpx")
        .arg("--timezone")
        .arg("Mars/Olympus_Mons")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time zone"));
}
