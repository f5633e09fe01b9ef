// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! CLI argument parsing for behsse.

use std::path::PathBuf;

use behsse_highlight::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// behsse - syntax highlighting for TSX snippets and shell commands
#[derive(Parser, Debug)]
#[command(name = "behsse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read configuration from this file as well
    #[arg(long, global = true, env = "BEHSSE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Highlight files (or stdin) to the terminal, HTML or JSON
    #[command(alias = "hl")]
    Highlight(HighlightArgs),

    /// List the tokens of a snippet
    #[command(alias = "tok")]
    Tokens(TokensArgs),

    /// Start the interactive REPL
    Repl,
}

#[derive(Args, Debug, Default, Clone)]
pub struct HighlightArgs {
    /// Files to highlight; reads stdin when none are given or for `-`
    pub files: Vec<PathBuf>,

    /// Output format: ansi, html or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Number each line
    #[arg(short = 'n', long)]
    pub line_numbers: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct TokensArgs {
    /// File to tokenize; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Print a count per token kind instead of the token list
    #[arg(short, long)]
    pub summary: bool,

    /// Include whitespace tokens in the list
    #[arg(short, long)]
    pub whitespace: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["behsse"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_highlight_args() {
        let cli = Cli::try_parse_from([
            "behsse", "hl", "-f", "html", "-n", "a.tsx", "b.tsx", "--verbose",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Some(Commands::Highlight(args)) = cli.command else {
            panic!("expected highlight");
        };
        assert_eq!(args.format, Some(OutputFormat::Html));
        assert!(args.line_numbers);
        assert_eq!(args.files, vec![PathBuf::from("a.tsx"), PathBuf::from("b.tsx")]);
    }

    #[test]
    fn test_format_aliases() {
        let cli = Cli::try_parse_from(["behsse", "highlight", "--format", "terminal"]).unwrap();
        let Some(Commands::Highlight(args)) = cli.command else {
            panic!("expected highlight");
        };
        assert_eq!(args.format, Some(OutputFormat::Ansi));
    }

    #[test]
    fn test_bad_format_is_rejected() {
        assert!(Cli::try_parse_from(["behsse", "highlight", "--format", "pdf"]).is_err());
    }

    #[test]
    fn test_tokens_args() {
        let cli = Cli::try_parse_from(["behsse", "tok", "--summary", "x.ts"]).unwrap();
        let Some(Commands::Tokens(args)) = cli.command else {
            panic!("expected tokens");
        };
        assert!(args.summary);
        assert!(!args.whitespace);
        assert_eq!(args.file, Some(PathBuf::from("x.ts")));
    }
}
