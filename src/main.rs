// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use houndlore::{Config, KnowledgeBase, LoreError, Result};

mod cli;
use cli::commands::{self, Context};
use cli::display::Style;
use cli::{Cli, Commands};

fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn,houndlore=info",
            1 => "info,houndlore=debug",
            2 => "debug,houndlore=trace",
            _ => "trace",
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// `--data` wins over the config (and `HOUNDLORE_DATA`), which wins over the bundled dataset.
fn load_knowledge_base(cli: &Cli, config: &Config) -> Result<KnowledgeBase> {
    match cli.data.as_ref().or(config.knowledge_base.path.as_ref()) {
        Some(path) => {
            debug!(path = %path.display(), "loading knowledge base");
            KnowledgeBase::from_path(path)
        }
        None => KnowledgeBase::bundled(),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let kb = load_knowledge_base(&cli, &config)?;
    let style = Style::detect(config.display.color);
    let ctx = Context::new(config, kb, style);

    match cli.command {
        Commands::Search { query, json } => commands::run_search(&ctx, &query.join(" "), json),
        Commands::Browse { group, topic, json } => {
            commands::run_browse(&ctx, &group, &topic.join(" "), json)
        }
        Commands::Suggest { query, json } => commands::run_suggest(&ctx, &query.join(" "), json),
        Commands::Show {
            category,
            key,
            json,
        } => commands::run_show(&ctx, &category, &key, json),
        Commands::Categories { json } => commands::run_categories(&ctx, json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_user_error() => {
            eprintln!("❌ {}", err);
            ExitCode::from(2)
        }
        Err(err @ LoreError::Validation(_)) => {
            error!(error = %err, "refusing to serve a broken knowledge base");
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}
