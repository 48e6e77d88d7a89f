//! Query edge cases: blank input, whitespace, case, misses.

use super::common::{bundled_kb, fixture_kb, ids};
use houndlore::{LoreError, SearchEngine};

#[test]
fn test_blank_queries_are_invalid() {
    let kb = fixture_kb();
    let engine = SearchEngine::new(&kb);
    for query in ["", "   ", "\t\n"] {
        let err = engine.search(query).unwrap_err();
        assert!(matches!(err, LoreError::InvalidQuery(_)), "{query:?}");
        assert!(err.is_user_error());
    }
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let kb = bundled_kb();
    let engine = SearchEngine::new(&kb);
    let padded = engine.search("  sniper  ").unwrap();
    let plain = engine.search("sniper").unwrap();
    assert_eq!(ids(&padded), ids(&plain));
    assert_eq!(padded.total_matches, plain.total_matches);
    assert_eq!(padded.hits[0].score, plain.hits[0].score);
}

#[test]
fn test_matching_is_case_insensitive() {
    let kb = fixture_kb();
    let engine = SearchEngine::new(&kb);
    let upper = engine.search("BLACK SEA").unwrap();
    let lower = engine.search("black sea").unwrap();
    assert_eq!(ids(&upper), ids(&lower));
    assert!(!upper.is_empty());
}

#[test]
fn test_no_match_is_an_empty_result() {
    let kb = bundled_kb();
    let results = SearchEngine::new(&kb).search("xyzzy").unwrap();
    assert!(results.is_empty());
    assert_eq!(results.total_matches, 0);
    assert!(!results.is_truncated());
}

#[test]
fn test_punctuation_is_part_of_the_token() {
    let kb = fixture_kb();
    // "armor;" only occurs in the damage types body
    let results = SearchEngine::new(&kb).search("armor;").unwrap();
    assert_eq!(results.total_matches, 1);
    assert_eq!(results.hits[0].topic.key(), "damage_types");
}

#[test]
fn test_black_sea_end_to_end() {
    let kb = fixture_kb();
    let results = SearchEngine::new(&kb).search("black sea").unwrap();
    let overview = results
        .hits
        .iter()
        .find(|hit| hit.topic.key() == "overview")
        .expect("overview should be returned");
    assert!(overview.score >= 1);
    assert_eq!(overview.topic.title(), "Chromehounds Overview");
}
