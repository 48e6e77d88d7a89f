//! The `houndlore` binary end to end.

use std::process::{Command, Output};

fn houndlore(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_houndlore"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("HOUNDLORE_CONFIG")
        .env_remove("HOUNDLORE_DATA")
        .env_remove("HOUNDLORE_MAX_RESULTS")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run houndlore")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_search_json() {
    let output = houndlore(&["search", "black", "sea", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["query"], "black sea");
    assert_eq!(value["totalMatches"], 4);
    let results = value["results"].as_array().unwrap();
    assert!(results
        .iter()
        .any(|r| r["topic"]["key"] == "overview" && r["topic"]["category"] == "lore"));
}

#[test]
fn test_search_truncation_summary() {
    let output = houndlore(&["search", "hound"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Showing 5 of 21 results"));
}

#[test]
fn test_no_results_offers_suggestions() {
    let output = houndlore(&["search", "xyzzy"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("No information found for 'xyzzy'"));
    assert!(text.contains("HOUND types and roles"));
}

#[test]
fn test_short_query_is_a_user_error() {
    let output = houndlore(&["search", "a"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least 2 characters"));
}

#[test]
fn test_browse_parts() {
    let output = houndlore(&["browse", "parts", "sniper"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Sniper [roles/sniper]"));
}

#[test]
fn test_browse_unknown_group_fails() {
    let output = houndlore(&["browse", "weapons"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_suggest_lists_everything() {
    let output = houndlore(&["suggest", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["suggestions"].as_array().unwrap().len(), 30);
}

#[test]
fn test_show_topic() {
    let output = houndlore(&["show", "online-features", "territory_control"]);
    let text = stdout(&output);
    assert!(output.status.success(), "{text}");
}

#[test]
fn test_bad_data_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(
        &path,
        r#"{"version":1,"topics":[{"category":"lore","key":"x","title":"X"}]}"#,
    )
    .unwrap();
    let output = houndlore(&["--data", path.to_str().unwrap(), "categories"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("validation failed"));
}
