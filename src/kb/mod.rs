// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The knowledge base: every topic, validated once, read-only forever after.
//!
//! Construction is the only place topics come into existence, and it refuses
//! to finish if a single record is malformed. Once built, nothing mutates it,
//! so any number of threads can search it at the same time without locks.
//!
//! **Invariant**: `(category, key)` is unique; `index` maps it to a position in
//! `topics`, which keeps authored order for listings.

pub mod record;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{LoreError, Result, ValidationError};
use crate::types::{Category, CategoryGroup, Topic};

pub use record::{KnowledgeBaseFile, TopicRecord, FORMAT_VERSION};

/// The Chromehounds dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../../data/chromehounds.json");

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    topics: Vec<Topic>,
    index: HashMap<Category, HashMap<String, usize>>,
}

impl KnowledgeBase {
    /// Validate every record and build the knowledge base.
    ///
    /// Fails on the first invalid record. Order of `records` is kept for
    /// listings but has no effect on search ranking.
    pub fn from_records(records: impl IntoIterator<Item = TopicRecord>) -> Result<Self> {
        let mut topics = Vec::new();
        let mut index: HashMap<Category, HashMap<String, usize>> = HashMap::new();

        for record in records {
            let topic = record.into_topic()?;
            let keys = index.entry(topic.category()).or_default();
            if keys.contains_key(topic.key()) {
                return Err(ValidationError::DuplicateTopic {
                    category: topic.category(),
                    key: topic.key().to_string(),
                }
                .into());
            }
            keys.insert(topic.key().to_string(), topics.len());
            topics.push(topic);
        }

        let kb = Self { topics, index };
        info!(
            topics = kb.len(),
            categories = kb.index.len(),
            "knowledge base loaded"
        );
        Ok(kb)
    }

    /// Parse and validate a JSON dataset.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: KnowledgeBaseFile = serde_json::from_str(json)?;
        if file.version != FORMAT_VERSION {
            return Err(ValidationError::UnsupportedVersion {
                found: file.version,
                expected: FORMAT_VERSION,
            }
            .into());
        }
        Self::from_records(file.topics)
    }

    /// Load a JSON dataset from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading knowledge base");
        let raw = fs::read_to_string(path).map_err(|err| {
            LoreError::Io(std::io::Error::new(
                err.kind(),
                format!("read {}: {err}", path.display()),
            ))
        })?;
        Self::from_json_str(&raw)
    }

    /// The Chromehounds dataset shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// All topics in authored order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn get(&self, category: Category, key: &str) -> Option<&Topic> {
        self.index
            .get(&category)
            .and_then(|keys| keys.get(key))
            .map(|&idx| &self.topics[idx])
    }

    /// Topics of one category, authored order.
    pub fn topics_in(&self, category: Category) -> impl Iterator<Item = &Topic> + '_ {
        self.topics
            .iter()
            .filter(move |topic| topic.category() == category)
    }

    /// Topics of every category in `group`, authored order.
    pub fn topics_in_group<'a>(
        &'a self,
        group: &'a CategoryGroup,
    ) -> impl Iterator<Item = &'a Topic> + 'a {
        self.topics
            .iter()
            .filter(move |topic| group.contains(topic.category()))
    }

    /// Non-empty categories with their topic counts, in [`Category::ALL`] order.
    pub fn categories(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                self.index
                    .get(&category)
                    .map(|keys| (category, keys.len()))
            })
            .collect()
    }
}
