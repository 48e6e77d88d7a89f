//! Category-scoped search.

use super::common::{assert_ranked, bundled_kb, fixture_kb};
use houndlore::{Category, CategoryGroup, Config, LoreError, SearchEngine};

#[test]
fn test_parts_never_returns_lore() {
    let kb = fixture_kb();
    let parts = CategoryGroup::new([Category::Equipment, Category::Roles]);

    // The lore overview body mentions armor; it must still be excluded.
    let unscoped = SearchEngine::new(&kb).search("armor").unwrap();
    assert!(unscoped.topics().any(|t| t.category() == Category::Lore));

    let results = SearchEngine::new(&kb).search_within("armor", &parts).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.topics().all(|t| parts.contains(t.category())));
    assert_eq!(results.total_matches, 2);
}

#[test]
fn test_scoped_scores_match_global_scores() {
    let kb = fixture_kb();
    let engine = SearchEngine::new(&kb);
    let lore = CategoryGroup::new([Category::Lore]);

    let global = engine.search("armor").unwrap();
    let scoped = engine.search_within("armor", &lore).unwrap();
    for hit in &scoped.hits {
        let same = global
            .hits
            .iter()
            .find(|g| g.topic.key() == hit.topic.key())
            .expect("scoped hit should also be a global hit");
        assert_eq!(same.score, hit.score);
    }
    assert_ranked(&scoped);
}

#[test]
fn test_empty_group_is_invalid_even_for_valid_query() {
    let kb = fixture_kb();
    let err = SearchEngine::new(&kb)
        .search_within("armor", &CategoryGroup::default())
        .unwrap_err();
    assert!(matches!(err, LoreError::InvalidCategoryGroup(_)));
    assert!(!err.is_user_error());
}

#[test]
fn test_group_with_no_matches_is_empty() {
    let kb = fixture_kb();
    let legacy = CategoryGroup::new([Category::Legacy]);
    let results = SearchEngine::new(&kb).search_within("armor", &legacy).unwrap();
    assert!(results.is_empty());
    assert_eq!(results.total_matches, 0);
}

#[test]
fn test_default_groups_on_bundled_data() {
    let kb = bundled_kb();
    let config = Config::default();
    let engine = SearchEngine::new(&kb);

    for name in ["lore", "mechanics", "parts", "strategy"] {
        let group = config.resolve_group(name).unwrap();
        let results = engine.search_within("hound", &group).unwrap();
        assert!(
            results.topics().all(|t| group.contains(t.category())),
            "group {name} leaked a topic"
        );
    }

    let parts = config.resolve_group("parts").unwrap();
    let armor = engine.search_within("armor", &parts).unwrap();
    assert_eq!(armor.total_matches, 4);
}
