// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! JSON token dumps.

use serde::Serialize;
use serde_json::Value;

use super::{RenderOptions, Renderer};
use crate::lexer::{Token, TokenKind};

/// The serialized shape of one token.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: TokenKind,
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        Self {
            kind: token.kind,
            text: token.text,
            start: token.span.start,
            end: token.span.end,
        }
    }
}

/// Writes the token list as a pretty-printed JSON array. Line numbers do
/// not apply; every record carries its byte offsets instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Converts tokens into a JSON value.
    pub fn to_value(tokens: &[Token<'_>]) -> Value {
        let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
        serde_json::to_value(records).unwrap_or(Value::Array(Vec::new()))
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, tokens: &[Token<'_>], _options: &RenderOptions) -> String {
        format!("{:#}", Self::to_value(tokens))
    }
}
