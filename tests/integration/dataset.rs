//! The shipped Chromehounds dataset, loaded and searched the way the CLI does.

use super::common::{assert_ranked, bundled_kb, ids};
use houndlore::{Category, KnowledgeBase, SearchEngine, TopicRecord, TITLE_MATCH_BONUS};

#[test]
fn test_every_category_is_populated() {
    let kb = bundled_kb();
    let counts = kb.categories();
    assert_eq!(counts.len(), Category::ALL.len());
    assert!(counts.iter().all(|(_, n)| *n > 0));
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), kb.len());
}

#[test]
fn test_black_sea_returns_overview() {
    let kb = bundled_kb();
    let results = SearchEngine::new(&kb).search("black sea").unwrap();
    assert!(results
        .hits
        .iter()
        .any(|hit| hit.topic.category() == Category::Lore && hit.topic.key() == "overview"));
    assert_ranked(&results);
}

#[test]
fn test_title_hits_lead() {
    let kb = bundled_kb();
    let engine = SearchEngine::new(&kb);
    for (query, category, key) in [
        ("sniper", Category::Roles, "sniper"),
        ("combas", Category::Communication, "combas"),
        ("morskoj", Category::Nations, "morskoj"),
        ("rafzekael", Category::Lore, "rafzekael"),
    ] {
        let results = engine.search(query).unwrap();
        let top = results.hits[0];
        assert_eq!((top.topic.category(), top.topic.key()), (category, key), "{query}");
        assert!(top.score >= TITLE_MATCH_BONUS, "{query}");
    }
}

#[test]
fn test_broad_query_is_truncated() {
    let kb = bundled_kb();
    let results = SearchEngine::new(&kb).search("armor").unwrap();
    assert_eq!(results.len(), 5);
    assert_eq!(results.total_matches, 10);
    assert_eq!(
        ids(&results)[0],
        (Category::Equipment, "assist_parts".to_string())
    );
}

#[test]
fn test_round_trip_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kb.json");
    let file = houndlore::kb::KnowledgeBaseFile {
        version: houndlore::kb::FORMAT_VERSION,
        topics: vec![
            TopicRecord::new(Category::Lore, "overview", "Overview", "Black Sea war.")
                .with_tag("keywords", &["Neroimus"]),
        ],
    };
    std::fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

    let kb = KnowledgeBase::from_path(&path).unwrap();
    assert_eq!(kb.len(), 1);
    let results = SearchEngine::new(&kb).search("neroimus").unwrap();
    assert_eq!(results.hits[0].score, 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = KnowledgeBase::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, houndlore::LoreError::Io(_)));
}

#[test]
fn test_malformed_json_is_serialization_error() {
    assert!(matches!(
        KnowledgeBase::from_json_str("{not json"),
        Err(houndlore::LoreError::Serialization(_))
    ));
}
