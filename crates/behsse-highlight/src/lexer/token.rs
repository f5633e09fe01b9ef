// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token definitions for the snippet lexer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A token produced by the lexer.
///
/// `text` borrows the exact slice of the input the token was scanned from,
/// so concatenating the texts of a token list reproduces the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text covered by the token
    pub text: &'a str,
    /// The span in the source code
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Returns true for whitespace tokens.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

/// The closed set of token classifications.
///
/// The kebab-case names (`type-keyword`, `jsx-text`, ...) are the stable
/// external form used by renderers, JSON output and theme files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// A single space, tab, CR or LF
    Whitespace,
    /// `// line` or `/* block */` comment
    Comment,
    /// Quoted or template string, delimiters included
    String,
    /// Numeric literal
    Number,
    Keyword,
    /// `type` in an import/export position
    TypeKeyword,
    /// Built-in type name such as `string` or `Promise`
    Type,
    /// Capitalized identifier
    ClassName,
    Variable,
    /// Function call, declaration or arrow-function binding
    Function,
    Operator,
    Punctuation,
    /// `{` / `}` delimiting an import clause
    Brace,
    /// Component tag name (`<Button>`)
    JsxTag,
    /// Intrinsic element tag name (`<div>`)
    HtmlTag,
    JsxAttribute,
    /// Bare words between JSX tags
    JsxText,
    /// `import`, `export` and `from`
    ImportExport,
    /// A name inside an import clause's braces
    ImportName,
    /// A whole package-manager command line
    CliCommand,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 20] = [
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Keyword,
        TokenKind::TypeKeyword,
        TokenKind::Type,
        TokenKind::ClassName,
        TokenKind::Variable,
        TokenKind::Function,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Brace,
        TokenKind::JsxTag,
        TokenKind::HtmlTag,
        TokenKind::JsxAttribute,
        TokenKind::JsxText,
        TokenKind::ImportExport,
        TokenKind::ImportName,
        TokenKind::CliCommand,
    ];

    /// Returns the kebab-case name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::TypeKeyword => "type-keyword",
            TokenKind::Type => "type",
            TokenKind::ClassName => "class-name",
            TokenKind::Variable => "variable",
            TokenKind::Function => "function",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Brace => "brace",
            TokenKind::JsxTag => "jsx-tag",
            TokenKind::HtmlTag => "html-tag",
            TokenKind::JsxAttribute => "jsx-attribute",
            TokenKind::JsxText => "jsx-text",
            TokenKind::ImportExport => "import-export",
            TokenKind::ImportName => "import-name",
            TokenKind::CliCommand => "cli-command",
        }
    }

    /// Returns true if this kind is one of the keyword-like classes.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword | TokenKind::TypeKeyword | TokenKind::ImportExport
        )
    }

    /// Returns true if this kind only occurs inside JSX markup.
    pub fn is_jsx(&self) -> bool {
        matches!(
            self,
            TokenKind::JsxTag | TokenKind::HtmlTag | TokenKind::JsxAttribute | TokenKind::JsxText
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| crate::Error::UnknownKind(s.to_string()))
    }
}
