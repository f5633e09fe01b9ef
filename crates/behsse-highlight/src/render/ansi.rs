// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Terminal rendering.

use owo_colors::OwoColorize;

use super::{gutter_width, RenderOptions, Renderer, Theme};
use crate::lexer::Token;
use crate::lines::split_lines;

/// Paints tokens with ANSI escape sequences.
///
/// Each line is painted on its own, so a multi-line comment never leaves a
/// style open across the line-number gutter.
#[derive(Debug, Clone, Default)]
pub struct AnsiRenderer {
    theme: Theme,
}

impl AnsiRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Paints a single line's tokens, without a trailing newline.
    pub fn paint_line(&self, segments: &[Token<'_>], color: bool) -> String {
        let mut out = String::new();
        for token in segments {
            let style = self.theme.style(token.kind);
            if !color || style.is_plain() || token.is_whitespace() {
                out.push_str(token.text);
            } else {
                out.push_str(&token.text.style(style.to_owo()).to_string());
            }
        }
        out
    }
}

impl Renderer for AnsiRenderer {
    fn render(&self, tokens: &[Token<'_>], options: &RenderOptions) -> String {
        let lines = split_lines(tokens);
        let width = gutter_width(lines.len());

        lines
            .iter()
            .map(|line| {
                let body = self.paint_line(&line.segments, options.color);
                if !options.line_numbers {
                    return body;
                }
                let gutter = format!("{:>width$} │", line.number);
                let gutter = if options.color {
                    gutter.dimmed().to_string()
                } else {
                    gutter
                };
                if body.is_empty() {
                    gutter
                } else {
                    format!("{gutter} {body}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::render::{Color, Style};

    fn plain() -> RenderOptions {
        RenderOptions {
            line_numbers: false,
            color: false,
        }
    }

    #[test]
    fn test_no_color_is_identity() {
        let source = "const a = <b>c</b>;\n// d\n";
        let out = AnsiRenderer::default().render(&tokenize(source), &plain());
        assert_eq!(out, source);
    }

    #[test]
    fn test_keyword_is_painted() {
        let out = AnsiRenderer::default().render(&tokenize("const x"), &RenderOptions::default());
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("const"));
        assert!(out.ends_with(" x"));
    }

    #[test]
    fn test_plain_style_is_not_painted() {
        let mut theme = Theme::default();
        theme.set(crate::lexer::TokenKind::Keyword, Style::fg(Color::Default));
        let out = AnsiRenderer::new(theme).render(&tokenize("const"), &RenderOptions::default());
        assert_eq!(out, "const");
    }

    #[test]
    fn test_line_numbers() {
        let source = "a\nb\n";
        let options = RenderOptions {
            line_numbers: true,
            color: false,
        };
        let out = AnsiRenderer::default().render(&tokenize(source), &options);
        assert_eq!(out, "1 │ a\n2 │ b\n3 │");
    }

    #[test]
    fn test_line_number_gutter_is_aligned() {
        let source = "x\n".repeat(10);
        let options = RenderOptions {
            line_numbers: true,
            color: false,
        };
        let out = AnsiRenderer::default().render(&tokenize(&source), &options);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " 1 │ x");
        assert_eq!(lines[9], "10 │ x");
        assert_eq!(lines[10], "11 │");
    }
}
