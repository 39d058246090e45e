use assert_cmd::Command;
use predicates::prelude::*;

fn troop() -> Command {
    Command::cargo_bin("troop").unwrap()
}

#[test]
fn list_shows_every_species_sorted() {
    troop()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Baboon"))
        .stdout(predicate::str::contains("Mandrill"))
        .stdout(predicate::str::contains("Red-shanked douc"));
}

#[test]
fn find_is_case_insensitive() {
    troop()
        .arg("find")
        .arg("BABOON")
        .assert()
        .success()
        .stdout(predicate::str::contains("Africa & Asia"))
        .stdout(predicate::str::contains("10,000"));
}

#[test]
fn find_accepts_unquoted_multiword_names() {
    troop()
        .arg("find")
        .arg("golden")
        .arg("lion")
        .arg("tamarin")
        .assert()
        .success()
        .stdout(predicate::str::contains("Brazil"));
}

#[test]
fn find_miss_offers_suggestions() {
    troop()
        .arg("find")
        .arg("monkey")
        .assert()
        .success()
        .stdout(predicate::str::contains("Did you mean"))
        .stdout(predicate::str::contains("Capuchin Monkey"));
}

#[test]
fn location_filter_matches_substrings() {
    troop()
        .arg("location")
        .arg("america")
        .assert()
        .success()
        .stdout(predicate::str::contains("Capuchin Monkey"))
        .stdout(predicate::str::contains("Squirrel Monkey"))
        .stdout(predicate::str::contains("Howler Monkey"))
        .stdout(predicate::str::contains("Baboon").not());
}

#[test]
fn endangered_excludes_vulnerable_but_large_populations() {
    troop()
        .arg("endangered")
        .assert()
        .success()
        .stdout(predicate::str::contains("Japanese Macaque"))
        .stdout(predicate::str::contains("Red-shanked douc"))
        // 10,000 population sits above the endangered threshold.
        .stdout(predicate::str::contains("Baboon").not());
}

#[test]
fn random_reports_the_pick_count() {
    troop()
        .arg("random")
        .assert()
        .success()
        .stdout(predicate::str::contains("Random picks this session: 1"));
}

#[test]
fn stats_reports_catalog_totals() {
    troop()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total species:       13"))
        .stdout(predicate::str::contains("Random picks:        0"));
}

#[test]
fn stats_reset_flag_reports_and_zeroes() {
    troop()
        .arg("stats")
        .arg("--reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Random pick counter reset."))
        .stdout(predicate::str::contains("Random picks:        0"));
}

#[test]
fn refresh_reloads_the_seed() {
    troop()
        .arg("refresh")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog reloaded: 13 species."));
}

#[test]
fn json_list_is_parseable() {
    let output = troop().arg("list").arg("--json").output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 13);
    assert!(entries
        .iter()
        .any(|e| e["name"] == "Baboon" && e["conservation_status"] == "Least Concern"));
}

#[test]
fn json_find_includes_derived_fields() {
    let output = troop()
        .arg("find")
        .arg("red-shanked douc")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["population"], 1300);
    assert_eq!(value["is_endangered"], true);
    assert_eq!(value["conservation_status"], "Endangered");
}

#[test]
fn menu_exits_on_quit_choice() {
    troop().write_stdin("8\n").assert().success();
}
