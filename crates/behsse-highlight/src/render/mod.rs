// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Turning token streams into display output.
//!
//! ## Structure
//!
//! - `ansi.rs` - Terminal output painted with a [`Theme`]
//! - `html.rs` - `<span class="token ...">` markup for the docs site
//! - `json.rs` - Machine-readable token dumps
//! - `theme.rs` - Per-kind terminal styles

mod ansi;
mod html;
mod json;
mod theme;

pub use ansi::AnsiRenderer;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use theme::{Color, Style, Theme};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::lexer::Token;

/// Options shared by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix each line with its number
    pub line_numbers: bool,
    /// Emit color escapes (ANSI only)
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: false,
            color: true,
        }
    }
}

/// Renders a token stream into a string.
pub trait Renderer: Send + Sync {
    fn render(&self, tokens: &[Token<'_>], options: &RenderOptions) -> String;
}

/// The output formats the CLI can produce.
///
/// Deserializes through `FromStr`, so config files accept the same names as
/// the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    #[default]
    Ansi,
    Html,
    Json,
}

impl OutputFormat {
    /// Returns a renderer for this format. Only ANSI output uses the theme.
    pub fn renderer(self, theme: &Theme) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Ansi => Box::new(AnsiRenderer::new(theme.clone())),
            OutputFormat::Html => Box::new(HtmlRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Ansi => "ansi",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ansi" | "term" | "terminal" => Ok(OutputFormat::Ansi),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Number of digits needed for the largest line number.
pub(crate) fn gutter_width(line_count: usize) -> usize {
    line_count.max(1).to_string().len()
}
