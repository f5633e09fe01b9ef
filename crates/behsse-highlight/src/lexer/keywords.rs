// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Fixed word tables used to classify identifiers.

/// Reserved words highlighted as keywords.
pub const KEYWORDS: &[&str] = &[
    "const",
    "let",
    "var",
    "function",
    "return",
    "if",
    "else",
    "for",
    "while",
    "do",
    "switch",
    "case",
    "break",
    "continue",
    "default",
    "try",
    "catch",
    "finally",
    "throw",
    "new",
    "typeof",
    "instanceof",
    "delete",
    "void",
    "async",
    "await",
    "class",
    "extends",
    "super",
    "this",
    "static",
    "public",
    "private",
    "protected",
    "readonly",
    "abstract",
    "interface",
    "enum",
    "namespace",
    "module",
    "declare",
    "export",
    "import",
    "from",
    "as",
    "implements",
    "in",
    "of",
    "yield",
    "null",
    "undefined",
    "true",
    "false",
    "type",
];

/// Built-in TypeScript type names.
pub const BUILTIN_TYPES: &[&str] = &[
    "string",
    "number",
    "boolean",
    "any",
    "unknown",
    "never",
    "void",
    "Array",
    "Promise",
    "Record",
    "Partial",
    "Required",
    "Readonly",
    "Pick",
    "Omit",
    "Exclude",
    "Extract",
    "NonNullable",
    "Parameters",
    "ReturnType",
    "InstanceType",
    "ThisType",
];

/// Package managers and runners whose command lines are shown verbatim.
pub const CLI_RUNNERS: &[&str] = &["pnpm", "npm", "npx", "yarn", "bun", "bunx"];

/// Returns true if `word` is in the keyword table.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns true if `word` is a built-in type name.
pub fn is_builtin_type(word: &str) -> bool {
    BUILTIN_TYPES.contains(&word)
}

/// Returns true for the module keywords `import`, `export` and `from`.
pub fn is_module_keyword(word: &str) -> bool {
    matches!(word, "import" | "export" | "from")
}

/// Returns true if the first whitespace-delimited word of `source` names a
/// package manager or runner.
pub fn is_cli_command(source: &str) -> bool {
    source
        .split_whitespace()
        .next()
        .is_some_and(|word| CLI_RUNNERS.contains(&word))
}
