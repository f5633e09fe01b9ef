//! Tokenizer contract tests
//!
//! Checks the documented guarantees of `tokenize` against snippets of the
//! kind that appear in the BehsseUI docs.

use behsse_highlight::{tokenize, Token, TokenKind};

fn texts_of(tokens: &[Token<'_>], kind: TokenKind) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.text.to_string())
        .collect()
}

fn concat(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

const COMPONENT: &str = r#"import * as React from "react"
import { cva, type VariantProps } from "class-variance-authority"

import { cn } from "@/lib/utils"

/* Shared button styles */
const buttonVariants = cva("inline-flex items-center", {
  variants: {
    size: { sm: "h-8", lg: "h-10" },
  },
})

export interface ButtonProps
  extends React.ButtonHTMLAttributes<HTMLButtonElement>,
    VariantProps<typeof buttonVariants> {
  asChild?: boolean
}

const Button = React.forwardRef<HTMLButtonElement, ButtonProps>(
  ({ className, size, ...props }, ref) => {
    return (
      <button
        className={cn(buttonVariants({ size, className }))}
        ref={ref}
        {...props}
      />
    )
  }
)
Button.displayName = "Button"

export { Button, buttonVariants }
"#;

#[test]
fn test_round_trip_on_component_source() {
    let tokens = tokenize(COMPONENT);
    assert_eq!(concat(&tokens), COMPONENT);
    assert!(tokens.iter().all(|t| !t.text.is_empty()));
}

#[test]
fn test_component_source_classification() {
    let tokens = tokenize(COMPONENT);
    let import_names = texts_of(&tokens, TokenKind::ImportName);
    assert!(import_names.contains(&"cva".to_string()));
    assert!(import_names.contains(&"VariantProps".to_string()));
    assert!(import_names.contains(&"cn".to_string()));
    assert_eq!(texts_of(&tokens, TokenKind::TypeKeyword), vec!["type"]);
    assert!(texts_of(&tokens, TokenKind::HtmlTag).contains(&"button".to_string()));
    assert!(texts_of(&tokens, TokenKind::JsxAttribute).contains(&"className".to_string()));
    assert!(texts_of(&tokens, TokenKind::Comment).contains(&"/* Shared button styles */".to_string()));
    assert!(texts_of(&tokens, TokenKind::Function).contains(&"cva".to_string()));
}

#[test]
fn test_cli_short_circuit_for_every_runner() {
    for source in [
        "npm install foo",
        "npx behsse@latest init",
        "pnpm add @behsse/ui",
        "yarn add clsx",
        "bun add clsx",
        "bunx behsse add button",
    ] {
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 1, "{source}");
        assert_eq!(tokens[0].kind, TokenKind::CliCommand);
        assert_eq!(tokens[0].text, source);
    }
}

#[test]
fn test_arrow_function_vs_variable() {
    let tokens = tokenize("const foo = () => {}");
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Function && t.text == "foo"));

    let tokens = tokenize("const foo = 5");
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Variable && t.text == "foo"));
}

#[test]
fn test_jsx_text_vs_identifier() {
    let tokens = tokenize("<Foo>bar</Foo>");
    assert_eq!(texts_of(&tokens, TokenKind::JsxTag), vec!["Foo", "Foo"]);
    assert_eq!(texts_of(&tokens, TokenKind::JsxText), vec!["bar"]);
    assert!(
        tokens
            .iter()
            .filter(|t| t.text == "bar")
            .all(|t| t.kind == TokenKind::JsxText)
    );
}

#[test]
fn test_import_brace_classification() {
    let tokens = tokenize("import { type Foo, Bar } from 'x'");
    assert_eq!(texts_of(&tokens, TokenKind::TypeKeyword), vec!["type"]);
    assert_eq!(texts_of(&tokens, TokenKind::ImportName), vec!["Foo", "Bar"]);
    assert_eq!(texts_of(&tokens, TokenKind::ImportExport), vec!["import", "from"]);
    assert_eq!(texts_of(&tokens, TokenKind::Brace), vec!["{", "}"]);
}

#[test]
fn test_string_and_comment_balance() {
    let tokens = tokenize("'it\\'s' // trailing");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::String, TokenKind::Whitespace, TokenKind::Comment]
    );
    assert_eq!(tokens[0].text, "'it\\'s'");
    assert_eq!(tokens[2].text, "// trailing");
}

#[test]
fn test_prefix_classification_is_stable() {
    let prefix = "import { useState } from \"react\";\nconst count = 1;\n";
    let program = format!("{prefix}export default function Counter() {{\n  return <p>{{count}}</p>\n}}\n");

    let prefix_tokens = tokenize(prefix);
    let program_tokens = tokenize(&program);
    let prefix_kinds: Vec<_> = prefix_tokens.iter().map(|t| (t.kind, t.text)).collect();
    let program_kinds: Vec<_> = program_tokens
        .iter()
        .take(prefix_tokens.len())
        .map(|t| (t.kind, t.text))
        .collect();
    assert_eq!(prefix_kinds, program_kinds);
}

#[test]
fn test_unterminated_constructs_never_fail() {
    for source in ["'open", "\"open\\", "`tpl ${", "/* open", "<Foo bar=", "</", "{{{", "=>"] {
        let tokens = tokenize(source);
        assert_eq!(concat(&tokens), source);
    }
}
