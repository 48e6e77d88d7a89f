// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at `search` and `search_within` on the
//! bundled dataset. Nothing may panic, blank input must be the only error,
//! and every answer must respect the cap, the group and the ranking order.

#![no_main]

use arbitrary::Arbitrary;
use houndlore::{Category, CategoryGroup, KnowledgeBase, LoreError, SearchEngine};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    group_mask: u16,
    limit: u8,
}

fuzz_target!(|input: Input| {
    static KB: std::sync::OnceLock<KnowledgeBase> = std::sync::OnceLock::new();
    let kb = KB.get_or_init(|| KnowledgeBase::bundled().expect("bundled dataset"));

    // Cap query length to avoid timeout
    let query: String = input.query.chars().take(200).collect();
    let engine = SearchEngine::new(kb).with_limit(input.limit as usize);

    let results = match engine.search(&query) {
        Ok(results) => results,
        Err(LoreError::InvalidQuery(_)) => {
            assert!(query.trim().is_empty(), "non-blank query rejected: {query:?}");
            return;
        }
        Err(other) => panic!("unexpected error: {other}"),
    };

    // INVARIANT 1: cap and count
    assert!(results.len() <= engine.limit());
    assert!(results.total_matches >= results.len());

    // INVARIANT 2: score desc, then category name, then key
    for pair in results.hits.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score
                || (a.score == b.score
                    && (a.topic.category().as_str(), a.topic.key())
                        < (b.topic.category().as_str(), b.topic.key())),
            "ranking violated for {query:?}"
        );
    }

    // INVARIANT 3: scoped results never leave the group
    let group: CategoryGroup = Category::ALL
        .into_iter()
        .enumerate()
        .filter(|(i, _)| input.group_mask & (1 << i) != 0)
        .map(|(_, category)| category)
        .collect();
    match engine.search_within(&query, &group) {
        Ok(scoped) => {
            assert!(!group.is_empty());
            assert!(scoped.topics().all(|t| group.contains(t.category())));
            assert!(scoped.total_matches <= results.total_matches);
        }
        Err(LoreError::InvalidCategoryGroup(_)) => assert!(group.is_empty()),
        Err(other) => panic!("unexpected scoped error: {other}"),
    }
});
