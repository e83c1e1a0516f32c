//! CLI command integration tests. Every command is stateless — the catalog
//! is compiled in — so no fixtures or temp dirs are needed.

use assert_cmd::Command;
use predicates::prelude::*;

fn sc_cmd() -> Command {
    #[allow(deprecated)]
    let cmd = Command::cargo_bin("sc").unwrap();
    cmd
}

#[test]
fn list_prints_every_constellation() {
    sc_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Constellations (22)"))
        .stdout(predicate::str::contains("Orion (Ori)"))
        .stdout(predicate::str::contains("Ursa Major (UMa)"))
        .stdout(predicate::str::contains("Cassiopeia (Cas)"));
}

#[test]
fn list_json_has_total_count() {
    let output = sc_cmd().args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_count"], 22);
}

#[test]
fn compose_is_case_insensitive() {
    sc_cmd()
        .args(["compose", "orion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"constellation\": \"Orion\""));
}

#[test]
fn compose_json_is_deterministic() {
    let run = || {
        let output = sc_cmd()
            .args(["compose", "Cygnus", "--width", "1920", "--height", "1080"])
            .output()
            .unwrap();
        assert!(output.status.success());
        output.stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn compose_markdown_sections() {
    sc_cmd()
        .args(["compose", "Lyra", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Constellation Composition: Lyra"))
        .stdout(predicate::str::contains("## Focal Points"))
        .stdout(predicate::str::contains("## Suggested Visual Elements"));
}

#[test]
fn compose_no_mythology_yields_empty_themes() {
    let output = sc_cmd()
        .args(["compose", "Orion", "--no-mythology"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["composition"]["mythology_themes"].as_array().unwrap().len(),
        0
    );
}

#[test]
fn compose_rejects_out_of_range_dimensions() {
    sc_cmd()
        .args(["compose", "Orion", "--width", "511"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside supported range"));

    sc_cmd()
        .args(["compose", "Orion", "--width", "4097"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside supported range"));
}

#[test]
fn compose_unknown_name_fails() {
    sc_cmd()
        .args(["compose", "Orionis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn search_no_match_is_clean_exit() {
    sc_cmd()
        .args(["search", "zzznonexistent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no matches)"));
}

#[test]
fn search_with_filters() {
    sc_cmd()
        .args(["search", "--shape", "hunter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Orion"))
        .stdout(predicate::str::contains("Sagittarius"));
}

#[test]
fn search_invalid_filter_fails() {
    sc_cmd()
        .args(["search", "--shape", "teapot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shape class"));
}

#[test]
fn search_unknown_theme_fails() {
    sc_cmd()
        .args(["search", "--theme", "zzzunrecognized"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn search_json_scores_name_match_highest() {
    let output = sc_cmd()
        .args(["search", "orion", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["constellations"][0]["record"]["name"], "Orion");
    let first = json["constellations"][0]["relevance"].as_f64().unwrap();
    let second = json["constellations"][1]["relevance"].as_f64().unwrap();
    assert!(first > second);
}
