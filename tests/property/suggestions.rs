//! Suggestion invariants over arbitrary query text.

use houndlore::{normalize, SuggestionCatalog, DEFAULT_SUGGESTION_LIMIT};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_filtered_suggestions_are_capped_and_relevant(query in "[a-zA-Z ]{1,30}") {
        let catalog = SuggestionCatalog::default();
        let hits = catalog.suggest(Some(&query));
        if query.trim().is_empty() {
            prop_assert_eq!(hits.len(), catalog.entries().len());
        } else {
            prop_assert!(hits.len() <= DEFAULT_SUGGESTION_LIMIT);
            let folded = normalize(query.trim());
            for s in hits {
                prop_assert!(
                    normalize(&s.phrase).contains(&folded) || folded.contains(s.category.keyword())
                );
            }
        }
    }
}
