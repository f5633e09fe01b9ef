// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! behsse - syntax highlighter for TSX snippets and package-manager commands
//!
//! ## Usage
//!
//! ```text
//! behsse highlight src/button.tsx          # colored terminal output
//! behsse highlight -f html -n button.tsx   # numbered HTML
//! behsse tokens --summary button.tsx       # token counts per kind
//! echo 'pnpm add zod' | behsse             # stdin is highlighted
//! behsse                                   # interactive REPL
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod repl;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::{Cli, Commands, HighlightArgs};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with highlighted output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Highlight(args)) => commands::highlight::run(&args, &config).await,
        Some(Commands::Tokens(args)) => commands::tokens::run(&args, &config).await,
        Some(Commands::Repl) => run_repl(&config),
        None if std::io::stdin().is_terminal() => run_repl(&config),
        None => commands::highlight::run(&HighlightArgs::default(), &config).await,
    }
}

fn run_repl(config: &Config) -> Result<()> {
    let mut repl = repl::Repl::new(config)?;
    repl.run()
}
