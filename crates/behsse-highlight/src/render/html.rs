// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! HTML rendering with one CSS class per token kind.

use std::fmt::Write;

use super::{gutter_width, RenderOptions, Renderer};
use crate::lexer::Token;
use crate::lines::split_lines;

/// Writes `<pre class="behsse"><code>...</code></pre>`.
///
/// Non-whitespace tokens become `<span class="token {kind}">`. Styling is
/// left to the page's stylesheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, tokens: &[Token<'_>], options: &RenderOptions) -> String {
        let lines = split_lines(tokens);
        let width = gutter_width(lines.len());

        let mut out = String::from("<pre class=\"behsse\"><code>");
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if options.line_numbers {
                let _ = write!(
                    out,
                    "<span class=\"line\"><span class=\"line-number\">{:>width$}</span>",
                    line.number
                );
            }
            for token in &line.segments {
                if token.is_whitespace() {
                    out.push_str(token.text);
                } else {
                    let _ = write!(
                        out,
                        "<span class=\"token {}\">{}</span>",
                        token.kind,
                        escape(token.text)
                    );
                }
            }
            if options.line_numbers {
                out.push_str("</span>");
            }
        }
        out.push_str("</code></pre>");
        out
    }
}

/// Escapes text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_spans_per_token() {
        let out = HtmlRenderer.render(&tokenize("<Foo />"), &RenderOptions::default());
        assert_eq!(
            out,
            "<pre class=\"behsse\"><code>\
             <span class=\"token punctuation\">&lt;</span>\
             <span class=\"token jsx-tag\">Foo</span> \
             <span class=\"token punctuation\">/</span>\
             <span class=\"token punctuation\">&gt;</span>\
             </code></pre>"
        );
    }

    #[test]
    fn test_multiline_token_is_split() {
        let out = HtmlRenderer.render(&tokenize("/* a\nb */"), &RenderOptions::default());
        assert!(out.contains("<span class=\"token comment\">/* a</span>\n<span class=\"token comment\">b */</span>"));
    }

    #[test]
    fn test_line_numbers() {
        let options = RenderOptions {
            line_numbers: true,
            color: true,
        };
        let out = HtmlRenderer.render(&tokenize("a\nb"), &options);
        assert!(out.contains("<span class=\"line\"><span class=\"line-number\">1</span>"));
        assert!(out.contains("<span class=\"line-number\">2</span><span class=\"token variable\">b</span></span>"));
    }
}
