// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Line handling around the tokenizer: line-ending normalization before
//! scanning and grouping tokens into numbered lines afterwards.

use std::borrow::Cow;

use crate::lexer::{Span, Token};

/// Converts `\r\n` and lone `\r` line endings to `\n`.
///
/// Returns the input unchanged (and unallocated) when it has no `\r`.
pub fn normalize_line_endings(source: &str) -> Cow<'_, str> {
    if !source.contains('\r') {
        return Cow::Borrowed(source);
    }
    Cow::Owned(source.replace("\r\n", "\n").replace('\r', "\n"))
}

/// One numbered line of tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number
    pub number: usize,
    /// Tokens (or pieces of multi-line tokens) on this line, without the
    /// terminating newline
    pub segments: Vec<Token<'a>>,
}

impl Line<'_> {
    /// The text of this line.
    pub fn text(&self) -> String {
        self.segments.iter().map(|t| t.text).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Groups tokens into lines, splitting tokens that span a newline.
///
/// There is always at least one line. Joining the lines' text with `\n`
/// gives back the tokenized source.
pub fn split_lines<'a>(tokens: &[Token<'a>]) -> Vec<Line<'a>> {
    let mut lines = vec![Line {
        number: 1,
        segments: Vec::new(),
    }];

    for token in tokens {
        let mut offset = token.span.start;
        for (i, piece) in token.text.split('\n').enumerate() {
            if i > 0 {
                offset += 1;
                let number = lines.len() + 1;
                lines.push(Line {
                    number,
                    segments: Vec::new(),
                });
            }
            if !piece.is_empty() {
                let span = Span::new(offset, offset + piece.len());
                if let Some(line) = lines.last_mut() {
                    line.segments.push(Token::new(token.kind, piece, span));
                }
            }
            offset += piece.len();
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{tokenize, TokenKind};

    fn join(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_normalize_borrows_when_clean() {
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_crlf_and_cr() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_line_endings("\r\r\n"), "\n\n");
    }

    #[test]
    fn test_empty_source_has_one_line() {
        let lines = split_lines(&tokenize(""));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let lines = split_lines(&tokenize("a\nb\n"));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(), "a");
        assert_eq!(lines[1].text(), "b");
        assert!(lines[2].is_empty());
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_multiline_comment_is_split() {
        let source = "x /* one\ntwo */ y";
        let lines = split_lines(&tokenize(source));
        assert_eq!(lines.len(), 2);

        let first = lines[0].segments.last().unwrap();
        assert_eq!(first.kind, TokenKind::Comment);
        assert_eq!(first.text, "/* one");

        let second = lines[1].segments.first().unwrap();
        assert_eq!(second.kind, TokenKind::Comment);
        assert_eq!(second.text, "two */");
        assert_eq!(&source[second.span.start..second.span.end], "two */");
    }

    #[test]
    fn test_blank_lines_inside_string() {
        let source = "`a\n\nb`";
        let lines = split_lines(&tokenize(source));
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
        assert_eq!(join(&lines), source);
    }

    #[test]
    fn test_join_reproduces_source() {
        let source = "import { a } from 'a'\n\n<div>\n  {a}\n</div>\n";
        assert_eq!(join(&split_lines(&tokenize(source))), source);
    }
}
