//! Repeated searches give identical answers.

use super::common::{bundled_kb, ids};
use houndlore::SearchEngine;

#[test]
fn test_search_is_deterministic() {
    let kb = bundled_kb();
    let engine = SearchEngine::new(&kb);
    for query in ["hound", "armor", "black sea", "combas", "territory war"] {
        let first = engine.search(query).unwrap();
        let second = engine.search(query).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap(),
            "{query}"
        );
    }
}

#[test]
fn test_hound_ranking_on_bundled_data() {
    let kb = bundled_kb();
    let results = SearchEngine::new(&kb).search("hound").unwrap();
    assert_eq!(results.total_matches, 21);
    let keys: Vec<String> = ids(&results)
        .into_iter()
        .map(|(category, key)| format!("{category}/{key}"))
        .collect();
    assert_eq!(
        keys,
        vec![
            "history/timeline",
            "lore/overview",
            "lore/world",
            "mechanics/customization",
            "lore/factions",
        ]
    );
}

#[test]
fn test_separate_engines_agree() {
    let kb = bundled_kb();
    let a = SearchEngine::new(&kb).search("morskoj").unwrap();
    let b = SearchEngine::new(&kb).search("morskoj").unwrap();
    assert_eq!(ids(&a), ids(&b));
    assert_eq!(a.hits[0].topic.key(), "morskoj");
}
