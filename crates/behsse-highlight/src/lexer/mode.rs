// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical modes of the scanner.
//!
//! The scanner is always in exactly one mode. Each transition is a method
//! named after the syntax that triggers it, so the state machine reads as a
//! table:
//!
//! | Trigger | From | To |
//! |---------|------|----|
//! | `<Name` | any | `Tag { closing: false }` |
//! | `</` | `Content` | `Code` |
//! | `</Name` | any | `Tag { closing: true }` |
//! | `/>` | `Tag` | `Code` |
//! | `>` | `Tag { closing: false }` | `Content` |
//! | `>` | `Tag { closing: true }` | `Code` |
//! | `;` | `Content` | `Code` |
//! | `{` after `import` | `Code` | `ImportBraces` |
//! | `}` | `ImportBraces` | `Code` |
//!
//! Braces inside a tag do not nest: the first `>` ends the tag, even one
//! that is part of an `=>` in an attribute expression.

/// The scanner's current lexical context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Ordinary TypeScript code.
    #[default]
    Code,
    /// Inside `<Name ...` up to its `>` or `/>`.
    Tag {
        /// The tag began with `</`.
        closing: bool,
    },
    /// Between an opening tag's `>` and the next `<`.
    Content,
    /// Between the braces of an `import { ... }` clause.
    ImportBraces,
}

impl Mode {
    pub fn in_tag(self) -> bool {
        matches!(self, Mode::Tag { .. })
    }

    pub fn in_content(self) -> bool {
        self == Mode::Content
    }

    pub fn in_import_braces(self) -> bool {
        self == Mode::ImportBraces
    }

    /// `<Name` or `</Name` was scanned.
    pub fn enter_tag(self, closing: bool) -> Mode {
        Mode::Tag { closing }
    }

    /// `</` was scanned.
    pub fn leave_content(self) -> Mode {
        match self {
            Mode::Content => Mode::Code,
            other => other,
        }
    }

    /// `/>` was scanned.
    pub fn self_close(self) -> Mode {
        match self {
            Mode::Tag { .. } => Mode::Code,
            other => other,
        }
    }

    /// `>` was scanned while `in_tag` holds.
    pub fn close_tag(self) -> Mode {
        match self {
            Mode::Tag { closing: false } => Mode::Content,
            Mode::Tag { closing: true } => Mode::Code,
            other => other,
        }
    }

    /// `;` was scanned.
    pub fn end_statement(self) -> Mode {
        self.leave_content()
    }

    /// `{` was scanned. `import_pending` is true when the brace opens an
    /// import clause.
    pub fn open_brace(self, import_pending: bool) -> Mode {
        match self {
            Mode::Code if import_pending => Mode::ImportBraces,
            other => other,
        }
    }

    /// `}` was scanned.
    pub fn close_brace(self) -> Mode {
        match self {
            Mode::ImportBraces => Mode::Code,
            other => other,
        }
    }
}
