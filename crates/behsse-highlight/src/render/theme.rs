// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Terminal color themes keyed by token kind.
//!
//! Styles are written as a color name followed by optional modifiers, e.g.
//! `"magenta bold"` or `"bright-black italic"`. A theme table maps kind
//! names to such strings:
//!
//! ```toml
//! [theme]
//! keyword = "blue bold"
//! jsx-text = "default"
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use owo_colors::AnsiColors;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::lexer::TokenKind;

/// A terminal foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Leave the terminal's foreground color alone
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    fn ansi(self) -> Option<AnsiColors> {
        let color = match self {
            Color::Default => return None,
            Color::Black => AnsiColors::Black,
            Color::Red => AnsiColors::Red,
            Color::Green => AnsiColors::Green,
            Color::Yellow => AnsiColors::Yellow,
            Color::Blue => AnsiColors::Blue,
            Color::Magenta => AnsiColors::Magenta,
            Color::Cyan => AnsiColors::Cyan,
            Color::White => AnsiColors::White,
            Color::BrightBlack => AnsiColors::BrightBlack,
            Color::BrightRed => AnsiColors::BrightRed,
            Color::BrightGreen => AnsiColors::BrightGreen,
            Color::BrightYellow => AnsiColors::BrightYellow,
            Color::BrightBlue => AnsiColors::BrightBlue,
            Color::BrightMagenta => AnsiColors::BrightMagenta,
            Color::BrightCyan => AnsiColors::BrightCyan,
            Color::BrightWhite => AnsiColors::BrightWhite,
        };
        Some(color)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let color = match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "default" | "none" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" | "purple" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "gray" | "grey" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return Err(Error::UnknownColor(s.to_string())),
        };
        Ok(color)
    }
}

/// How one token kind is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
    pub dim: bool,
}

impl Style {
    /// A style with only a foreground color.
    pub const fn fg(color: Color) -> Self {
        Self {
            color,
            bold: false,
            italic: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn plain() -> Self {
        Self::fg(Color::Default)
    }

    /// True if painting with this style would not change the text.
    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }

    /// Converts to an owo-colors style.
    pub fn to_owo(self) -> owo_colors::Style {
        let mut style = owo_colors::Style::new();
        if let Some(color) = self.color.ansi() {
            style = style.color(color);
        }
        if self.bold {
            style = style.bold();
        }
        if self.italic {
            style = style.italic();
        }
        if self.dim {
            style = style.dimmed();
        }
        style
    }
}

impl FromStr for Style {
    type Err = Error;

    /// Parses `"<color> [bold] [italic] [dim]"`.
    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let mut style = match words.next() {
            Some(color) => Style::fg(color.parse()?),
            None => return Err(Error::UnknownColor(s.to_string())),
        };
        for modifier in words {
            match modifier {
                "bold" => style.bold = true,
                "italic" => style.italic = true,
                "dim" | "dimmed" => style.dim = true,
                other => return Err(Error::UnknownColor(other.to_string())),
            }
        }
        Ok(style)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.color)?;
        for (on, name) in [(self.bold, "bold"), (self.italic, "italic"), (self.dim, "dim")] {
            if on {
                write!(f, " {name}")?;
            }
        }
        Ok(())
    }
}

/// A style per token kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    styles: FxHashMap<TokenKind, Style>,
}

impl Theme {
    /// Returns the style for `kind`, plain if the theme has none.
    pub fn style(&self, kind: TokenKind) -> Style {
        self.styles.get(&kind).copied().unwrap_or(Style::plain())
    }

    /// Replaces the style for `kind`.
    pub fn set(&mut self, kind: TokenKind, style: Style) {
        self.styles.insert(kind, style);
    }

    /// Applies `kind name -> style string` overrides on top of this theme.
    pub fn with_overrides<K, V>(mut self, overrides: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (kind, style) in overrides {
            let kind: TokenKind = kind.as_ref().parse()?;
            self.set(kind, style.as_ref().parse()?);
        }
        Ok(self)
    }
}

impl Default for Theme {
    fn default() -> Self {
        let styles = [
            (TokenKind::Comment, Style::fg(Color::BrightBlack).italic()),
            (TokenKind::String, Style::fg(Color::Green)),
            (TokenKind::Number, Style::fg(Color::Yellow)),
            (TokenKind::Keyword, Style::fg(Color::Magenta).bold()),
            (TokenKind::TypeKeyword, Style::fg(Color::Magenta)),
            (TokenKind::Type, Style::fg(Color::Cyan)),
            (TokenKind::ClassName, Style::fg(Color::BrightYellow)),
            (TokenKind::Function, Style::fg(Color::Blue)),
            (TokenKind::Operator, Style::fg(Color::Cyan)),
            (TokenKind::Brace, Style::fg(Color::Yellow)),
            (TokenKind::JsxTag, Style::fg(Color::BrightRed)),
            (TokenKind::HtmlTag, Style::fg(Color::Red)),
            (TokenKind::JsxAttribute, Style::fg(Color::BrightYellow).italic()),
            (TokenKind::ImportExport, Style::fg(Color::Magenta).bold()),
            (TokenKind::ImportName, Style::fg(Color::BrightWhite)),
            (TokenKind::CliCommand, Style::fg(Color::BrightGreen)),
        ]
        .into_iter()
        .collect();

        Self { styles }
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
        Theme::default()
            .with_overrides(overrides)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("Bright_Blue".parse::<Color>().unwrap(), Color::BrightBlue);
        assert_eq!("grey".parse::<Color>().unwrap(), Color::BrightBlack);
        assert!(matches!(
            "chartreuse".parse::<Color>(),
            Err(Error::UnknownColor(c)) if c == "chartreuse"
        ));
    }

    #[test]
    fn test_style_parse() {
        let style: Style = "magenta bold italic".parse().unwrap();
        assert_eq!(style.color, Color::Magenta);
        assert!(style.bold && style.italic && !style.dim);
        assert!("".parse::<Style>().is_err());
        assert!("red blinking".parse::<Style>().is_err());
    }

    #[test]
    fn test_style_display() {
        let style = Style::fg(Color::Cyan).bold();
        assert_eq!(style.to_string(), "Cyan bold");
    }

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.style(TokenKind::Keyword), Style::fg(Color::Magenta).bold());
        assert!(theme.style(TokenKind::Whitespace).is_plain());
        assert!(theme.style(TokenKind::JsxText).is_plain());
    }

    #[test]
    fn test_overrides() {
        let theme = Theme::default()
            .with_overrides([("keyword", "blue"), ("jsx-text", "white dim")])
            .unwrap();
        assert_eq!(theme.style(TokenKind::Keyword), Style::fg(Color::Blue));
        assert!(theme.style(TokenKind::JsxText).dim);
        assert_eq!(theme.style(TokenKind::String), Style::fg(Color::Green));
    }

    #[test]
    fn test_override_unknown_kind() {
        let err = Theme::default()
            .with_overrides([("keywords", "blue")])
            .unwrap_err();
        assert_eq!(err, Error::UnknownKind("keywords".to_string()));
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: Theme,
        }

        let wrapper: Wrapper = toml::from_str(
            r#"
            [theme]
            comment = "bright-black"
            class-name = "cyan bold"
            "#,
        )
        .unwrap();
        assert_eq!(wrapper.theme.style(TokenKind::Comment), Style::fg(Color::BrightBlack));
        assert_eq!(wrapper.theme.style(TokenKind::ClassName), Style::fg(Color::Cyan).bold());
    }

    #[test]
    fn test_deserialize_rejects_bad_color() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            #[allow(dead_code)]
            theme: Theme,
        }

        let result: std::result::Result<Wrapper, _> = toml::from_str("[theme]\nstring = \"teal\"");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("unknown color: teal"), "{message}");
    }
}
