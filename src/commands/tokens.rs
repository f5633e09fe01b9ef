// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! `behsse tokens`

use std::fmt::Write as _;

use behsse_highlight::lines::normalize_line_endings;
use behsse_highlight::{tokenize, KindCounts, Theme, Token, TokenKind};
use owo_colors::OwoColorize;
use tokio::io::AsyncWriteExt;

use super::read_source;
use crate::cli::TokensArgs;
use crate::config::Config;
use crate::error::Result;

const KIND_WIDTH: usize = 14;

/// Run the tokens command.
pub async fn run(args: &TokensArgs, config: &Config) -> Result<()> {
    let source = read_source(args.file.clone()).await?;
    let text = normalize_line_endings(&source.text);
    let tokens = tokenize(&text);

    let output = if args.summary {
        summary_table(&KindCounts::from_tokens(&tokens), &config.theme, config.color)
    } else {
        token_table(&tokens, &config.theme, config.color, args.whitespace)
    };

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

fn kind_label(kind: TokenKind, theme: &Theme, color: bool) -> String {
    let label = format!("{:<KIND_WIDTH$}", kind.as_str());
    if color {
        theme.style(kind).to_owo().style(label).to_string()
    } else {
        label
    }
}

/// One row per token: byte range, kind and quoted text.
pub fn token_table(tokens: &[Token<'_>], theme: &Theme, color: bool, whitespace: bool) -> String {
    let mut out = String::new();
    for token in tokens.iter().filter(|t| whitespace || !t.is_whitespace()) {
        let range = format!("{}..{}", token.span.start, token.span.end);
        let _ = writeln!(
            out,
            "{:>12}  {} {:?}",
            range,
            kind_label(token.kind, theme, color),
            token.text
        );
    }
    out
}

/// One row per token kind that occurs, then the total.
pub fn summary_table(counts: &KindCounts, theme: &Theme, color: bool) -> String {
    let mut out = String::new();
    for (kind, count) in counts.sorted() {
        let _ = writeln!(out, "{} {:>6}", kind_label(kind, theme, color), count);
    }
    let total = format!("{:<KIND_WIDTH$}", "total");
    let total = if color {
        total.bold().to_string()
    } else {
        total
    };
    let _ = writeln!(out, "{} {:>6}", total, counts.total());
    out
}
