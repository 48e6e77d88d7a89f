//! Suggestion fallback.

use houndlore::{Category, SuggestionCatalog, DEFAULT_SUGGESTION_LIMIT};

#[test]
fn test_query_substring_of_entry() {
    let catalog = SuggestionCatalog::default();
    let hits = catalog.suggest(Some("combas"));
    assert!(hits.iter().any(|s| s.phrase == "COMBAS system"));
}

#[test]
fn test_category_keyword_substring_of_query() {
    let catalog = SuggestionCatalog::default();
    let hits = catalog.suggest(Some("communication systems and beyond"));
    let combas = hits
        .iter()
        .find(|s| s.phrase == "COMBAS system")
        .expect("COMBAS system should be suggested through its category");
    assert_eq!(combas.category, Category::Communication);
}

#[test]
fn test_no_query_returns_full_list() {
    let catalog = SuggestionCatalog::default();
    let all = catalog.suggest(None);
    assert_eq!(all.len(), catalog.entries().len());
    assert!(all.len() > DEFAULT_SUGGESTION_LIMIT);
    for (got, expected) in all.iter().zip(catalog.entries()) {
        assert_eq!(*got, expected);
    }
}

#[test]
fn test_filtered_list_keeps_authored_order_and_cap() {
    let catalog = SuggestionCatalog::default();
    let hits = catalog.suggest(Some("combat"));
    assert!(hits.len() <= DEFAULT_SUGGESTION_LIMIT);
    let positions: Vec<usize> = hits
        .iter()
        .map(|s| catalog.entries().iter().position(|e| e == *s).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_unrelated_query_has_no_suggestions() {
    assert!(SuggestionCatalog::default().suggest(Some("xyzzy")).is_empty());
}
