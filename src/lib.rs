//! Ranked keyword search over the Chromehounds knowledge base.
//!
//! Answers questions about a game's lore, mechanics, parts and strategy by
//! matching free text against a fixed, hand-authored set of topics, then
//! handing the best few back to whatever renders them (a chat bot, the bundled
//! CLI, a test).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  kb/        │────▶│  scoring/    │────▶│  search/     │
//! │ (records,   │     │ (score_topic,│     │ (SearchEngine│
//! │  validation)│     │ compare_hits)│     │  search,     │
//! └─────────────┘     └──────────────┘     │ search_within│
//!        │                                  └──────────────┘
//!        ▼
//! ┌─────────────┐     ┌──────────────┐
//! │  types.rs   │     │  suggest.rs  │  curated fallback, independent of the KB
//! │ (Topic,     │     │ (Suggestion- │
//! │  Category)  │     │  Catalog)    │
//! └─────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use houndlore::{KnowledgeBase, SearchEngine, SuggestionCatalog};
//!
//! let kb = KnowledgeBase::bundled()?;
//! let engine = SearchEngine::new(&kb);
//!
//! let results = engine.search("black sea")?;
//! if results.is_empty() {
//!     let fallback = SuggestionCatalog::default().suggest(Some("black sea"));
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod kb;
pub mod scoring;
pub mod search;
pub mod suggest;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::Config;
pub use error::{LoreError, Result, ValidationError};
pub use kb::{KnowledgeBase, TopicRecord};
pub use scoring::{score_topic, ScoreBreakdown, TAG_MATCH_BONUS, TITLE_MATCH_BONUS};
pub use search::{ParsedQuery, SearchEngine, DEFAULT_RESULT_LIMIT};
pub use suggest::{Suggestion, SuggestionCatalog, DEFAULT_SUGGESTION_LIMIT};
pub use types::{
    Category, CategoryGroup, Hit, SearchResults, TagField, Topic, UnknownCategory,
};
pub use utils::{count_occurrences, normalize, truncate_chars};
