// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for behsse-highlight.
//!
//! Tokenizing never fails; these errors come from parsing theme and kind
//! names supplied by users.

use thiserror::Error;

/// Result type for behsse-highlight operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while interpreting user-supplied names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A token kind name that is not part of the closed set
    #[error("unknown token kind: {0}")]
    UnknownKind(String),

    /// A color name the theme does not recognise
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// An output format name that is not `ansi`, `html` or `json`
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
}
