//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::kb::{KnowledgeBase, TopicRecord};
use crate::types::{Category, Topic};

/// Create a topic with a body and no tags.
///
/// Goes through record validation, so it panics on input a real load would reject.
pub fn make_topic(category: Category, key: &str, title: &str, body: &str) -> Topic {
    TopicRecord::new(category, key, title, body)
        .into_topic()
        .expect("test topic should be valid")
}

/// Create a topic with tag fields.
pub fn make_tagged_topic(
    category: Category,
    key: &str,
    title: &str,
    body: &str,
    tags: &[(&str, &[&str])],
) -> Topic {
    make_tagged_record(category, key, title, body, tags)
        .into_topic()
        .expect("test topic should be valid")
}

/// Create a record with tag fields.
pub fn make_tagged_record(
    category: Category,
    key: &str,
    title: &str,
    body: &str,
    tags: &[(&str, &[&str])],
) -> TopicRecord {
    tags.iter()
        .fold(TopicRecord::new(category, key, title, body), |record, (name, values)| {
            record.with_tag(name, values)
        })
}

/// Build a knowledge base from `(category, key, title, body)` tuples.
pub fn make_kb(topics: &[(Category, &str, &str, &str)]) -> KnowledgeBase {
    KnowledgeBase::from_records(
        topics
            .iter()
            .map(|(category, key, title, body)| TopicRecord::new(*category, key, title, body)),
    )
    .expect("test knowledge base should be valid")
}
