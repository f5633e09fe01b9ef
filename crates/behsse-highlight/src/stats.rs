// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Per-kind token counts.

use rustc_hash::FxHashMap;

use crate::lexer::{Token, TokenKind};

/// How many tokens of each kind a snippet produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindCounts {
    counts: FxHashMap<TokenKind, usize>,
}

impl KindCounts {
    pub fn from_tokens(tokens: &[Token<'_>]) -> Self {
        let mut counts = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.kind).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for one kind (zero if absent).
    pub fn get(&self, kind: TokenKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of tokens counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero counts in `TokenKind` declaration order.
    pub fn sorted(&self) -> Vec<(TokenKind, usize)> {
        TokenKind::ALL
            .iter()
            .map(|&kind| (kind, self.get(kind)))
            .filter(|&(_, count)| count > 0)
            .collect()
    }
}
