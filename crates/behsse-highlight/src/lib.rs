// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # behsse-highlight
//!
//! The syntax highlighter behind the BehsseUI documentation snippets.
//!
//! ## Overview
//!
//! This crate provides:
//! - A heuristic TypeScript/JSX tokenizer that never fails and always
//!   partitions its input exactly (`lexer`)
//! - Line-ending normalization and line grouping (`lines`)
//! - ANSI, HTML and JSON renderers with configurable themes (`render`)
//! - Per-kind token statistics (`stats`)
//!
//! ## Quick Start
//!
//! ```rust
//! use behsse_highlight::{highlight, OutputFormat, RenderOptions, Theme};
//!
//! let html = highlight(
//!     "<Button variant=\"ghost\">Save</Button>",
//!     OutputFormat::Html,
//!     &Theme::default(),
//!     &RenderOptions::default(),
//! );
//! assert!(html.contains("<span class=\"token jsx-attribute\">variant</span>"));
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod lexer;
pub mod lines;
pub mod render;
pub mod stats;

// Re-exports for convenience
pub use error::{Error, Result};
pub use lexer::{tokenize, Scanner, Span, Token, TokenKind};
pub use render::{OutputFormat, RenderOptions, Renderer, Theme};
pub use stats::KindCounts;

use tracing::debug;

/// Normalizes line endings, tokenizes and renders `source` in one call.
pub fn highlight(
    source: &str,
    format: OutputFormat,
    theme: &Theme,
    options: &RenderOptions,
) -> String {
    let source = lines::normalize_line_endings(source);
    let tokens = tokenize(&source);
    format.renderer(theme).render(&tokens, options)
}

/// Highlights many sources, returning the outputs in input order.
///
/// With the `parallel` feature the work is spread over the rayon pool.
pub fn highlight_all<S>(
    sources: &[S],
    format: OutputFormat,
    theme: &Theme,
    options: &RenderOptions,
) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    debug!(count = sources.len(), %format, "highlighting sources");
    let renderer = format.renderer(theme);
    let render_one = |source: &S| {
        let source = lines::normalize_line_endings(source.as_ref());
        renderer.render(&tokenize(&source), options)
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        sources.par_iter().map(render_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        sources.iter().map(render_one).collect()
    }
}
