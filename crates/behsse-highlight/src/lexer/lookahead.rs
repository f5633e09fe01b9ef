// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Read-only lookahead over the source.
//!
//! Every function here takes the source and a byte offset and returns a new
//! offset (or a yes/no answer). None of them touch scanner state, so a failed
//! match costs nothing to roll back.

/// Whitespace as the lexer sees it.
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Checks if a byte can start an identifier.
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

/// Checks if a byte can continue an identifier. Hyphens are allowed so that
/// attribute names like `aria-label` scan as one word.
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$' | b'-')
}

/// Returns the offset of the first non-whitespace byte at or after `pos`.
pub fn skip_whitespace(source: &str, pos: usize) -> usize {
    let bytes = source.as_bytes();
    let mut pos = pos;
    while pos < bytes.len() && is_whitespace(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Returns the end offset of the identifier starting at `pos`, or `None` if
/// no identifier starts there.
pub fn identifier_end(source: &str, pos: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    if !bytes.get(pos).copied().is_some_and(is_ident_start) {
        return None;
    }
    let mut end = pos + 1;
    while end < bytes.len() && is_ident_continue(bytes[end]) {
        end += 1;
    }
    Some(end)
}

/// True if the next non-whitespace byte at or after `pos` is `=`.
pub fn followed_by_equals(source: &str, pos: usize) -> bool {
    source.as_bytes().get(skip_whitespace(source, pos)) == Some(&b'=')
}

/// Returns the offset just past the `)` matching the `(` at `pos`.
///
/// Only parentheses are counted. Strings and comments inside the list are
/// not recognised, so `")"` inside a default value unbalances the count.
fn balanced_parens_end(source: &str, pos: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    if bytes.get(pos) != Some(&b'(') {
        return None;
    }
    let mut depth = 0usize;
    for (offset, &b) in bytes[pos..].iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// True if `=>` starts at the first non-whitespace byte at or after `pos`.
fn arrow_at(source: &str, pos: usize) -> bool {
    source[skip_whitespace(source, pos)..].starts_with("=>")
}

/// Detects an arrow-function binding after an identifier ending at `pos`.
///
/// Matches `= (params) =>` and `= param =>`, with any whitespace between
/// the pieces.
pub fn is_arrow_binding(source: &str, pos: usize) -> bool {
    let eq = skip_whitespace(source, pos);
    if source.as_bytes().get(eq) != Some(&b'=') {
        return false;
    }
    let value = skip_whitespace(source, eq + 1);
    if let Some(end) = balanced_parens_end(source, value) {
        return arrow_at(source, end);
    }
    match identifier_end(source, value) {
        Some(end) => arrow_at(source, end),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace() {
        assert_eq!(skip_whitespace("a \t\n b", 1), 5);
        assert_eq!(skip_whitespace("abc", 1), 1);
        assert_eq!(skip_whitespace("a  ", 1), 3);
    }

    #[test]
    fn test_identifier_end() {
        assert_eq!(identifier_end("aria-label=", 0), Some(10));
        assert_eq!(identifier_end("$el.x", 0), Some(3));
        assert_eq!(identifier_end("1abc", 0), None);
        assert_eq!(identifier_end("", 0), None);
    }

    #[test]
    fn test_followed_by_equals() {
        assert!(followed_by_equals("x = 1", 1));
        assert!(followed_by_equals("x=1", 1));
        assert!(!followed_by_equals("x + 1", 1));
        assert!(!followed_by_equals("x", 1));
    }

    #[test]
    fn test_arrow_with_parens() {
        assert!(is_arrow_binding("foo = () => {}", 3));
        assert!(is_arrow_binding("foo = (a, (b)) =>", 3));
        assert!(is_arrow_binding("foo=(a)=>a", 3));
        assert!(is_arrow_binding("foo =\n  (\n a\n )\n  => a", 3));
    }

    #[test]
    fn test_arrow_with_bare_parameter() {
        assert!(is_arrow_binding("double = n => n * 2", 6));
        assert!(!is_arrow_binding("double = n * 2", 6));
    }

    #[test]
    fn test_not_arrow() {
        assert!(!is_arrow_binding("foo = 5", 3));
        assert!(!is_arrow_binding("foo = (1 + 2)", 3));
        assert!(!is_arrow_binding("foo == bar", 3));
        assert!(!is_arrow_binding("foo", 3));
        assert!(!is_arrow_binding("foo = (a", 3));
    }

    #[test]
    fn test_string_in_parameters_unbalances() {
        assert!(!is_arrow_binding(r#"f = (s = ")") => s"#, 1));
    }
}
