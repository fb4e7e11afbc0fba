use assert_cmd::Command;
use predicates::prelude::*;

fn pmlint() -> Command {
    let mut cmd = Command::cargo_bin("pmlint").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_documented_collection_passes() {
    pmlint()
        .arg("tests/fixtures/documented.postman_collection.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_undocumented_folders_reported_grouped() {
    pmlint()
        .arg("tests/fixtures/undocumented.postman_collection.json")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1 occurrences of: Folder \"Auth\" requires description.",
        ))
        .stdout(predicate::str::contains("Name: Auth"))
        .stdout(predicate::str::contains(
            "1 occurrences of: Folder \"undefined\" requires description.",
        ))
        .stdout(predicate::str::contains("Path: collection.item.2"))
        .stdout(predicate::str::contains("Users").not())
        .stdout(predicate::str::contains("Found 0 errors, 2 warnings"));
}

#[test]
fn test_strict_mode_fails_on_warnings() {
    pmlint()
        .arg("tests/fixtures/undocumented.postman_collection.json")
        .arg("--strict")
        .assert()
        .failure();
}

#[test]
fn test_validate_subcommand() {
    pmlint()
        .arg("validate")
        .arg("tests/fixtures/documented.postman_collection.json")
        .arg("--strict")
        .assert()
        .success();
}

#[test]
fn test_malformed_collection_is_error() {
    pmlint()
        .arg("tests/fixtures/malformed.postman_collection.json")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Malformed collection: expected an `item` array at $",
        ));
}

#[test]
fn test_broken_json_reported_and_other_files_still_checked() {
    pmlint()
        .arg("tests/fixtures/broken.json")
        .arg("tests/fixtures/undocumented.postman_collection.json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to validate file"))
        .stdout(predicate::str::contains("Name: Auth"));
}

#[test]
fn test_format_json() {
    let output = pmlint()
        .arg("tests/fixtures/undocumented.postman_collection.json")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["files_checked"], 1);
    assert_eq!(json["summary"]["warnings"], 2);
    let diagnostics = json["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0]["rule"], "PM-FD-001");
    assert_eq!(diagnostics[0]["name"], "Auth");
    assert_eq!(
        diagnostics[0]["path"],
        serde_json::json!(["collection", "item", "0"])
    );
    assert_eq!(
        diagnostics[1]["message"],
        "Folder \"undefined\" requires description."
    );
}

#[test]
fn test_output_file_written() {
    let temp = tempfile::TempDir::new().unwrap();
    let report = temp.path().join("report.json");

    pmlint()
        .arg("tests/fixtures/undocumented.postman_collection.json")
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("occurrences of"));

    let content = std::fs::read_to_string(&report).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["summary"]["warnings"], 2);
}

#[test]
fn test_config_disables_rule() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = temp.path().join(".pmlint.toml");
    std::fs::write(&config, "[rules]\ndisabled_rules = [\"PM-FD-001\"]\n").unwrap();

    pmlint()
        .arg("tests/fixtures/undocumented.postman_collection.json")
        .arg("--strict")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_config_raises_level_to_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = temp.path().join(".pmlint.toml");
    std::fs::write(&config, "[rules]\nfolder_description_level = \"error\"\n").unwrap();

    pmlint()
        .arg("tests/fixtures/undocumented.postman_collection.json")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Found 2 errors, 0 warnings"));
}

#[test]
fn test_init_writes_config() {
    let temp = tempfile::TempDir::new().unwrap();
    let output = temp.path().join(".pmlint.toml");

    pmlint()
        .arg("init")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file"));

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("severity = \"warning\""));
    assert!(content.contains("[rules]"));
}

#[test]
fn test_no_paths_is_error() {
    pmlint()
        .assert()
        .failure()
        .stderr(predicate::str::contains("no collection files given"));
}

#[test]
fn test_rules_subcommand_lists_catalog() {
    pmlint()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("PM-FD-001"))
        .stdout(predicate::str::contains("Folder requires description"));
}
