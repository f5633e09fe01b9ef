// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical analysis (tokenization) for documentation snippets.
//!
//! The lexer is a heuristic, single-pass scanner for TypeScript with JSX.
//! It does not validate anything: it classifies every byte of its input into
//! a typed span for highlighting.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `Span` and `TokenKind` definitions
//! - `mode.rs` - The lexical modes (code, JSX tag, JSX content, import braces)
//! - `lookahead.rs` - Read-only peeks used for disambiguation
//! - `keywords.rs` - Keyword, built-in type and package-manager tables
//!
//! ## Usage
//!
//! ```rust
//! use behsse_highlight::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("const answer = 42;");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens.iter().map(|t| t.text).collect::<String>(), "const answer = 42;");
//! ```

pub mod keywords;
pub mod lookahead;
mod mode;
mod scanner;
mod token;

pub use mode::Mode;
pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};

use tracing::debug;

/// Tokenizes `source` completely.
///
/// The concatenated `text` of the returned tokens is always exactly
/// `source`, and every token is at least one byte long.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let tokens: Vec<Token<'_>> = Scanner::new(source).collect();
    debug!(bytes = source.len(), tokens = tokens.len(), "tokenized snippet");
    tokens
}
