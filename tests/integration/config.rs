//! Config files on disk.

use houndlore::config::ColorMode;
use houndlore::{Category, Config, LoreError};
use std::fs;

#[test]
fn test_load_from_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("houndlore.toml");
    fs::write(
        &path,
        r#"
[search]
max_results = 3
min_query_chars = 4

[suggestions]
limit = 2

[display]
max_body_chars = 200
color = "always"

[knowledge_base]
path = "/srv/hounds.json"

[groups]
politics = ["nations", "organizations", "history"]
"#,
    )
    .unwrap();

    let config = Config::from_path(&path).unwrap();
    assert_eq!(config.search.max_results, 3);
    assert_eq!(config.search.min_query_chars, 4);
    assert_eq!(config.suggestions.limit, 2);
    assert_eq!(config.display.max_body_chars, 200);
    assert_eq!(config.display.color, ColorMode::Always);
    assert_eq!(
        config.knowledge_base.path.as_deref(),
        Some(std::path::Path::new("/srv/hounds.json"))
    );

    let politics = config.resolve_group("politics").unwrap();
    assert_eq!(politics.len(), 3);
    assert!(politics.contains(Category::History));
    assert!(config.groups().contains_key("strategy"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_path(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, LoreError::Config(_)));
}

#[test]
fn test_unknown_category_in_group_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[groups]\nweapons = [\"cannons\"]\n").unwrap();
    assert!(matches!(Config::from_path(&path), Err(LoreError::Config(_))));
}
