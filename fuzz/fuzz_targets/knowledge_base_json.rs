// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for knowledge base loading.
//!
//! Arbitrary bytes as a dataset file: loading either fails with an error or
//! produces a knowledge base whose topics all satisfy the record invariants.

#![no_main]

use houndlore::KnowledgeBase;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(kb) = KnowledgeBase::from_json_str(json) else {
        return;
    };

    for topic in kb.topics() {
        assert!(!topic.key().trim().is_empty());
        assert!(!topic.title().trim().is_empty());
        assert!(!topic.body().trim().is_empty());
        assert!(kb.get(topic.category(), topic.key()).is_some());
    }
});
