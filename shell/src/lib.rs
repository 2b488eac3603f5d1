//! Sloth Browser - headless shell
//!
//! Reads one JSON request per line on stdin and answers with one JSON
//! response per line on stdout. The browser core owns all state; the
//! shell only parses, dispatches and pumps renderer notifications.

mod commands;
mod renderer;
mod state;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use sloth_core::Config;
use state::AppState;

pub fn run() -> anyhow::Result<()> {
    // Initialize logging
    sloth_core::init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(Path::new(&path))
            .with_context(|| format!("failed to load config from {path}"))?,
        None => Config::from_env_or_default()?,
    };

    let mut state = AppState::new(config);
    tracing::info!(
        homepage = %state.browser().config().homepage,
        tabs = state.browser().tab_count(),
        "Sloth shell started"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = commands::handle_line(&mut state, &line)?;
        writeln!(stdout, "{response}")?;
        stdout.flush()?;
    }

    tracing::info!("Sloth shell exiting");

    Ok(())
}
