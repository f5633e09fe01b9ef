// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The scanner that produces tokens from snippet text.

use std::collections::VecDeque;

use tracing::trace;

use super::keywords::{is_builtin_type, is_cli_command, is_keyword, is_module_keyword};
use super::lookahead::{self, identifier_end, is_arrow_binding, is_whitespace};
use super::mode::Mode;
use super::{Span, Token, TokenKind};

/// A scanner that tokenizes TypeScript/JSX snippets.
///
/// Every byte of the source ends up in exactly one token, so the scanner can
/// never fail. Unterminated strings and comments run to the end of the
/// input, and unknown characters become one-character punctuation.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    mode: Mode,
    /// Tokens scanned but not yet handed out. Tag openers produce up to
    /// three tokens in one step.
    queued: VecDeque<Token<'a>>,
    /// The most recent non-whitespace token.
    last_significant: Option<Token<'a>>,
    /// An `import` was seen and no `;` or string has ended its clause yet.
    import_pending: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            mode: Mode::default(),
            queued: VecDeque::new(),
            last_significant: None,
            import_pending: false,
        }
    }

    /// Returns the current lexical mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.queued.is_empty() && self.pos < self.source.len() {
            if self.pos == 0 && is_cli_command(self.source) {
                trace!("cli command short-circuit");
                self.emit(TokenKind::CliCommand, self.source.len());
            } else {
                self.scan();
            }
        }
        self.queued.pop_front()
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.source.as_bytes().get(pos).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.byte_at(self.pos + 1)
    }

    fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            trace!(from = ?self.mode, to = ?mode, pos = self.pos, "mode transition");
            self.mode = mode;
        }
    }

    /// Queues a token covering `self.pos..end` and moves past it.
    fn emit(&mut self, kind: TokenKind, end: usize) {
        let start = self.pos;
        let token = Token::new(kind, &self.source[start..end], Span::new(start, end));
        self.pos = end;

        match kind {
            TokenKind::Whitespace => {}
            TokenKind::String => self.import_pending = false,
            TokenKind::Punctuation if token.text == ";" => self.import_pending = false,
            TokenKind::ImportExport if token.text == "import" => self.import_pending = true,
            _ => {}
        }
        if kind != TokenKind::Whitespace {
            self.last_significant = Some(token);
        }
        self.queued.push_back(token);
    }

    /// Scans one construct at `self.pos`, queueing at least one token.
    fn scan(&mut self) {
        let Some(b) = self.byte_at(self.pos) else {
            return;
        };
        let next = self.peek_next();

        match (b, next) {
            _ if is_whitespace(b) => self.emit(TokenKind::Whitespace, self.pos + 1),
            (b'/', Some(b'/')) => self.scan_line_comment(),
            (b'/', Some(b'*')) => self.scan_block_comment(),
            (b'\'' | b'"' | b'`', _) => self.scan_string(b as char),
            _ if b.is_ascii_digit() => self.scan_number(),
            (b'<', Some(n)) if n.is_ascii_alphabetic() => self.scan_opening_tag(),
            (b'<', Some(b'/')) => self.scan_closing_tag(),
            (b'/', Some(b'>')) => self.scan_self_close(),
            (b'>', _) if self.mode.in_tag() => {
                self.emit(TokenKind::Punctuation, self.pos + 1);
                self.set_mode(self.mode.close_tag());
            }
            _ if is_operator(b) => self.scan_operator(b, next),
            _ if is_punctuation(b) => self.scan_punctuation(b),
            _ if lookahead::is_ident_start(b) => self.scan_identifier(),
            _ => {
                let width = self.source[self.pos..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.emit(TokenKind::Punctuation, self.pos + width);
            }
        }
    }

    fn scan_line_comment(&mut self) {
        let end = self.source[self.pos..]
            .find('\n')
            .map_or(self.source.len(), |i| self.pos + i);
        self.emit(TokenKind::Comment, end);
    }

    fn scan_block_comment(&mut self) {
        let body = self.pos + 2;
        let end = self.source[body..]
            .find("*/")
            .map_or(self.source.len(), |i| body + i + 2);
        self.emit(TokenKind::Comment, end);
    }

    fn scan_string(&mut self, quote: char) {
        let body = self.pos + 1;
        let mut end = self.source.len();
        let mut chars = self.source[body..].char_indices();
        while let Some((i, ch)) = chars.next() {
            if ch == '\\' {
                // The escaped character belongs to the string whatever it is.
                chars.next();
            } else if ch == quote {
                end = body + i + 1;
                break;
            }
        }
        self.emit(TokenKind::String, end);
    }

    fn scan_number(&mut self) {
        let mut end = self.pos + 1;
        while let Some(b) = self.byte_at(end) {
            if b.is_ascii_digit() || b == b'.' || b == b'_' {
                end += 1;
            } else {
                break;
            }
        }
        self.emit(TokenKind::Number, end);
    }

    /// Scans the alphanumeric tag name at `self.pos`, if any.
    fn scan_tag_name(&mut self) {
        let mut end = self.pos;
        while self.byte_at(end).is_some_and(|b| b.is_ascii_alphanumeric()) {
            end += 1;
        }
        if end == self.pos {
            return;
        }
        let kind = if self.source.as_bytes()[self.pos].is_ascii_uppercase() {
            TokenKind::JsxTag
        } else {
            TokenKind::HtmlTag
        };
        self.emit(kind, end);
    }

    /// `<Name`
    fn scan_opening_tag(&mut self) {
        self.emit(TokenKind::Punctuation, self.pos + 1);
        self.set_mode(self.mode.enter_tag(false));
        self.scan_tag_name();
    }

    /// `</` optionally followed by a tag name.
    fn scan_closing_tag(&mut self) {
        self.emit(TokenKind::Punctuation, self.pos + 1);
        self.emit(TokenKind::Punctuation, self.pos + 1);
        self.set_mode(self.mode.leave_content());
        if self.byte_at(self.pos).is_some_and(|b| b.is_ascii_alphabetic()) {
            self.set_mode(self.mode.enter_tag(true));
            self.scan_tag_name();
        }
    }

    /// `/>`
    fn scan_self_close(&mut self) {
        self.emit(TokenKind::Punctuation, self.pos + 1);
        self.emit(TokenKind::Punctuation, self.pos + 1);
        self.set_mode(self.mode.self_close());
    }

    fn scan_operator(&mut self, b: u8, next: Option<u8>) {
        if b == b'=' && self.mode.in_tag() {
            self.emit(TokenKind::Punctuation, self.pos + 1);
            return;
        }
        let doubled = next == Some(b) && matches!(b, b'=' | b'<' | b'>' | b'&' | b'|');
        let width = if doubled { 2 } else { 1 };
        self.emit(TokenKind::Operator, self.pos + width);
    }

    fn scan_punctuation(&mut self, b: u8) {
        let end = self.pos + 1;
        match b {
            b';' => {
                self.emit(TokenKind::Punctuation, end);
                self.set_mode(self.mode.end_statement());
            }
            b'{' => {
                let opens_import = self.mode == Mode::Code && self.import_pending;
                let kind = if opens_import {
                    TokenKind::Brace
                } else {
                    TokenKind::Punctuation
                };
                self.emit(kind, end);
                self.set_mode(self.mode.open_brace(opens_import));
            }
            b'}' => {
                let kind = if self.mode.in_import_braces() {
                    TokenKind::Brace
                } else {
                    TokenKind::Punctuation
                };
                self.emit(kind, end);
                self.set_mode(self.mode.close_brace());
            }
            _ => self.emit(TokenKind::Punctuation, end),
        }
    }

    fn scan_identifier(&mut self) {
        let end = identifier_end(self.source, self.pos).unwrap_or(self.pos + 1);
        let kind = self.classify_word(&self.source[self.pos..end], end);
        self.emit(kind, end);
    }

    /// Classifies the identifier `word`, which ends at byte offset `end`.
    fn classify_word(&self, word: &str, end: usize) -> TokenKind {
        if self.mode.in_content() {
            return TokenKind::JsxText;
        }
        if self.mode.in_tag() && lookahead::followed_by_equals(self.source, end) {
            return TokenKind::JsxAttribute;
        }
        if self.mode.in_import_braces() {
            return if word == "type" {
                TokenKind::TypeKeyword
            } else {
                TokenKind::ImportName
            };
        }
        if self.byte_at(end) == Some(b'(') {
            return TokenKind::Function;
        }
        if is_keyword(word) {
            return if is_module_keyword(word) {
                TokenKind::ImportExport
            } else if word == "type" && self.follows_module_keyword() {
                TokenKind::TypeKeyword
            } else {
                TokenKind::Keyword
            };
        }
        if is_builtin_type(word) {
            return TokenKind::Type;
        }
        if word.as_bytes()[0].is_ascii_uppercase() {
            return TokenKind::ClassName;
        }
        if is_arrow_binding(self.source, end) {
            TokenKind::Function
        } else {
            TokenKind::Variable
        }
    }

    /// True if the previous significant token is `import` or `export`.
    fn follows_module_keyword(&self) -> bool {
        self.last_significant
            .is_some_and(|token| matches!(token.text, "import" | "export"))
    }
}

fn is_operator(b: u8) -> bool {
    matches!(
        b,
        b'+' | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'='
            | b'<'
            | b'>'
            | b'!'
            | b'&'
            | b'|'
            | b'^'
            | b'~'
            | b'?'
            | b':'
    )
}

fn is_punctuation(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'[' | b']' | b'{' | b'}' | b',' | b';' | b'.'
    )
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
