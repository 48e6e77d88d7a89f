// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Command handlers.
//!
//! The library answers queries; this layer enforces the policies a chat or
//! terminal front end adds on top (minimum query length, falling back to
//! suggestions, body truncation) and renders the answer as text or JSON.

use serde_json::json;
use tracing::{debug, info};

use houndlore::{
    Category, Config, KnowledgeBase, LoreError, Result, SearchEngine, SearchResults, Suggestion,
    SuggestionCatalog, Topic,
};

use super::display::{self, Style};

/// Everything a command needs, loaded once at startup.
pub struct Context {
    pub config: Config,
    pub kb: KnowledgeBase,
    pub suggestions: SuggestionCatalog,
    pub style: Style,
}

impl Context {
    pub fn new(config: Config, kb: KnowledgeBase, style: Style) -> Self {
        let suggestions = SuggestionCatalog::default().with_limit(config.suggestions.limit);
        Self {
            config,
            kb,
            suggestions,
            style,
        }
    }

    fn engine(&self) -> SearchEngine<'_> {
        SearchEngine::new(&self.kb).with_limit(self.config.search.max_results)
    }

    fn max_body_chars(&self) -> usize {
        self.config.display.max_body_chars
    }

    /// Reject queries shorter than the configured minimum.
    fn check_query_length<'q>(&self, query: &'q str) -> Result<&'q str> {
        let query = query.trim();
        let min = self.config.search.min_query_chars;
        if query.chars().count() < min {
            return Err(LoreError::InvalidQuery(format!(
                "please provide a search term with at least {min} characters"
            )));
        }
        Ok(query)
    }
}

fn topic_json(topic: &Topic) -> serde_json::Value {
    let tags: serde_json::Map<String, serde_json::Value> = topic
        .tags()
        .iter()
        .map(|field| (field.name.clone(), json!(field.values)))
        .collect();
    json!({
        "category": topic.category(),
        "key": topic.key(),
        "title": topic.title(),
        "body": topic.body(),
        "tags": tags,
    })
}

fn results_json(query: &str, results: &SearchResults<'_>, suggestions: &[&Suggestion]) -> serde_json::Value {
    json!({
        "query": query,
        "totalMatches": results.total_matches,
        "results": results.hits,
        "suggestions": suggestions,
    })
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

pub fn run_search(ctx: &Context, query: &str, as_json: bool) -> Result<()> {
    let query = ctx.check_query_length(query)?;
    let results = ctx.engine().search(query)?;
    info!(query, total_matches = results.total_matches, "search");

    let suggestions = if results.is_empty() {
        ctx.suggestions.suggest(Some(query))
    } else {
        Vec::new()
    };

    if as_json {
        return print_json(&results_json(query, &results, &suggestions));
    }

    if results.is_empty() {
        let heading = format!("No information found for '{query}'. Try these suggestions:");
        let fallback = if suggestions.is_empty() {
            ctx.suggestions.suggest(None)
        } else {
            suggestions
        };
        print!("{}", display::render_suggestions(ctx.style, &heading, &fallback));
        return Ok(());
    }

    print!("{}", display::render_results(ctx.style, &results, ctx.max_body_chars()));
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// BROWSE
// ═══════════════════════════════════════════════════════════════════════════

pub fn run_browse(ctx: &Context, group_name: &str, topic: &str, as_json: bool) -> Result<()> {
    let group = ctx.config.resolve_group(group_name)?;

    if topic.trim().is_empty() {
        let topics: Vec<&Topic> = group.iter().flat_map(|c| ctx.kb.topics_in(c)).collect();
        debug!(group = group_name, topics = topics.len(), "browse index");
        if as_json {
            let listing: Vec<_> = topics.iter().map(|t| topic_json(t)).collect();
            return print_json(&json!({ "group": group_name, "topics": listing }));
        }
        print!("{}", display::render_topic_index(ctx.style, topics));
        return Ok(());
    }

    let topic = ctx.check_query_length(topic)?;
    let results = ctx.engine().search_within(topic, &group)?;
    info!(group = group_name, query = topic, total_matches = results.total_matches, "browse");

    if as_json {
        let suggestions = if results.is_empty() {
            ctx.suggestions.suggest(Some(topic))
        } else {
            Vec::new()
        };
        return print_json(&results_json(topic, &results, &suggestions));
    }

    let Some(best) = results.hits.first() else {
        let heading = format!("No {group_name} information found for '{topic}'. Try:");
        let mut suggestions = ctx.suggestions.suggest(Some(topic));
        if suggestions.is_empty() {
            suggestions = ctx.suggestions.suggest(Some(group_name));
        }
        print!("{}", display::render_suggestions(ctx.style, &heading, &suggestions));
        return Ok(());
    };

    print!("{}", display::render_topic(ctx.style, best.topic, ctx.max_body_chars()));
    if results.total_matches > 1 {
        println!(
            "\n{} more match(es) in {group_name}; `houndlore search {topic}` shows them all.",
            results.total_matches - 1
        );
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// SUGGEST / SHOW / CATEGORIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn run_suggest(ctx: &Context, query: &str, as_json: bool) -> Result<()> {
    let query = Some(query.trim()).filter(|q| !q.is_empty());
    let suggestions = ctx.suggestions.suggest(query);

    if as_json {
        return print_json(&json!({ "query": query, "suggestions": suggestions }));
    }
    if suggestions.is_empty() {
        println!("No suggestions match '{}'.", query.unwrap_or_default());
        return Ok(());
    }
    print!(
        "{}",
        display::render_suggestions(ctx.style, "Try asking about:", &suggestions)
    );
    Ok(())
}

pub fn run_show(ctx: &Context, category: &str, key: &str, as_json: bool) -> Result<()> {
    let category: Category = category
        .parse()
        .map_err(|err: houndlore::UnknownCategory| LoreError::InvalidQuery(err.to_string()))?;
    let topic = ctx.kb.get(category, key.trim()).ok_or_else(|| {
        LoreError::InvalidQuery(format!("no topic '{category}/{}'", key.trim()))
    })?;

    if as_json {
        return print_json(&topic_json(topic));
    }
    print!("{}", display::render_topic(ctx.style, topic, ctx.max_body_chars()));
    let tags = display::render_tags(ctx.style, topic);
    if !tags.is_empty() {
        print!("\n{}", tags);
    }
    Ok(())
}

pub fn run_categories(ctx: &Context, as_json: bool) -> Result<()> {
    let groups = ctx.config.groups();
    let rows: Vec<(Category, usize, Vec<&str>)> = ctx
        .kb
        .categories()
        .into_iter()
        .map(|(category, count)| {
            let member_of = groups
                .iter()
                .filter(|(_, members)| members.contains(&category))
                .map(|(name, _)| name.as_str())
                .collect();
            (category, count, member_of)
        })
        .collect();

    if as_json {
        let listing: Vec<_> = rows
            .iter()
            .map(|(category, count, member_of)| {
                json!({ "category": category, "topics": count, "groups": member_of })
            })
            .collect();
        return print_json(&json!({ "categories": listing, "totalTopics": ctx.kb.len() }));
    }

    for (category, count, member_of) in &rows {
        println!(
            "{} {:>3}  {}",
            display::pad_right(category.as_str(), 18),
            count,
            member_of.join(", ")
        );
    }
    println!("{} topics", ctx.kb.len());
    Ok(())
}
