// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the behsse CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for behsse operations.
pub type Result<T> = std::result::Result<T, BehsseError>;

/// Main error type for the behsse CLI.
#[derive(Error, Debug)]
pub enum BehsseError {
    /// A source file could not be read
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid TOML or has the wrong shape
    #[error("invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad theme, kind or format name
    #[error("{0}")]
    Highlight(#[from] behsse_highlight::Error),

    /// Line editor failure in the REPL
    #[error("REPL error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// A background task panicked or was cancelled
    #[error("task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
