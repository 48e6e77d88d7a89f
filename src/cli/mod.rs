// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the houndlore command-line interface.
//!
//! `search` ranks the whole knowledge base, `browse` looks inside one named
//! group (`lore`, `mechanics`, `parts`, `strategy` or a configured one),
//! `suggest` lists the curated starting points, `show` prints a single topic
//! and `categories` summarises what the dataset covers.

pub mod commands;
pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

const SEARCH_TIPS: &str = "\
Search tips:
  Words are matched independently and case-insensitively: `houndlore search black sea`
  A phrase that appears in a topic title ranks that topic first.
  Use `houndlore browse parts radar` to stay inside one group.
  Run `houndlore suggest` when you don't know where to start.";

#[derive(Parser)]
#[command(
    name = "houndlore",
    about = "Search the Chromehounds knowledge base",
    version,
    after_help = SEARCH_TIPS
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML config file (defaults to $HOUNDLORE_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Knowledge base JSON file to load instead of the bundled dataset
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank every topic against a query
    Search {
        /// Search terms
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List a group's topics, or search inside it
    Browse {
        /// Group name (lore, mechanics, parts, strategy, or one from the config)
        group: String,

        /// Optional topic to look up inside the group
        topic: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show curated suggestions, optionally filtered by a query
    Suggest {
        query: Vec<String>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one topic in full
    Show {
        /// Category, e.g. `roles` or `online-features`
        category: String,

        /// Topic key within the category, e.g. `sniper`
        key: String,

        /// Print the topic as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories and their topic counts
    Categories {
        /// Print categories as JSON
        #[arg(long)]
        json: bool,
    },
}
