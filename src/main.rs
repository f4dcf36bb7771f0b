// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calorie Tracker headless host
//!
//! Reads form events as JSON lines on stdin and writes one state snapshot
//! per event to stdout. Logs go to stderr.

use anyhow::Context;
use calorie_tracker::{
    config::{Config, LogFormat},
    models::CategoryCatalog,
    services::{FormEvent, Tracker},
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;

    init_logging(config.log_format);
    tracing::info!("Starting calorie tracker");

    let categories = match &config.categories_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading categories");
            CategoryCatalog::load_from_file(path).context("Failed to load categories")?
        }
        None => CategoryCatalog::default(),
    };

    let mut tracker = Tracker::new(categories);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let line_no = index + 1;
        match FormEvent::parse(&line).and_then(|event| tracker.handle(event)) {
            Ok(()) => {}
            Err(err) => tracing::warn!(line = line_no, error = %err, "Event rejected"),
        }

        serde_json::to_writer(&mut stdout, &tracker.snapshot())?;
        writeln!(stdout)?;
    }

    tracing::info!(
        activities = tracker.state().activities.len(),
        "Input finished"
    );
    Ok(())
}

/// Initialize logging to stderr, JSON or pretty.
fn init_logging(format: LogFormat) {
    let filter = EnvFilter::from_default_env()
        .add_directive("calorie_tracker=debug".parse().expect("valid directive"))
        .add_directive("info".parse().expect("valid directive"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(io::stderr),
            )
            .init(),
    }
}
