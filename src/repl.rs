// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL: type a snippet, see it highlighted as you type and
//! get its token table back.

use std::borrow::Cow;
use std::path::PathBuf;

use behsse_highlight::lexer::keywords::{BUILTIN_TYPES, CLI_RUNNERS, KEYWORDS};
use behsse_highlight::render::AnsiRenderer;
use behsse_highlight::{
    highlight, tokenize, OutputFormat, RenderOptions, Renderer, Theme, TokenKind,
};
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config as EditorConfig, Editor, Helper};
use tracing::debug;

use crate::commands::tokens::token_table;
use crate::config::Config;
use crate::error::Result;

const HISTORY_FILE: &str = ".behsse_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// Dot commands understood by the REPL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
}

impl ReplCommand {
    pub const ALL: [ReplCommand; 5] = [
        ReplCommand::Help,
        ReplCommand::Exit,
        ReplCommand::Clear,
        ReplCommand::Version,
        ReplCommand::Load,
    ];

    /// Splits `.name [arg]` into a command and its trimmed argument.
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim().strip_prefix('.')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };

        let cmd = match name.to_ascii_lowercase().as_str() {
            "help" | "h" | "?" => ReplCommand::Help,
            "exit" | "quit" | "q" => ReplCommand::Exit,
            "clear" | "cls" => ReplCommand::Clear,
            "version" | "v" => ReplCommand::Version,
            "load" | "l" => ReplCommand::Load,
            _ => return None,
        };
        Some((cmd, arg))
    }

    pub fn name(self) -> &'static str {
        match self {
            ReplCommand::Help => ".help",
            ReplCommand::Exit => ".exit",
            ReplCommand::Clear => ".clear",
            ReplCommand::Version => ".version",
            ReplCommand::Load => ".load",
        }
    }

    fn summary(self) -> &'static str {
        match self {
            ReplCommand::Help => "list these commands",
            ReplCommand::Exit => "leave (Ctrl+D works too)",
            ReplCommand::Clear => "wipe the terminal",
            ReplCommand::Version => "print the behsse version",
            ReplCommand::Load => "<file>  show a file highlighted with line numbers",
        }
    }
}

/// rustyline helper: live highlighting, completion, hints and validation
struct BehsseHelper {
    /// Keywords, built-in types, runners and dot commands, sorted
    words: Vec<String>,
    renderer: AnsiRenderer,
    color: bool,
}

impl BehsseHelper {
    fn new(theme: Theme, color: bool) -> Self {
        let mut words: Vec<String> = KEYWORDS
            .iter()
            .chain(BUILTIN_TYPES)
            .chain(CLI_RUNNERS)
            .copied()
            .chain(ReplCommand::ALL.iter().map(|cmd| cmd.name()))
            .map(String::from)
            .collect();
        words.sort();
        words.dedup();

        Self {
            words,
            renderer: AnsiRenderer::new(theme),
            color,
        }
    }

    fn matches<'w>(&'w self, word: &'w str) -> impl Iterator<Item = &'w String> + 'w {
        self.words.iter().filter(move |w| w.starts_with(word))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Byte offset where the word ending at `pos` starts. Always a char boundary.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(0, |(i, c)| i + c.len_utf8())
}

impl Completer for BehsseHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[word_start(line, pos)..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches = self
            .matches(word)
            .map(|w| Pair {
                display: w.clone(),
                replacement: w[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for BehsseHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        self.matches(word)
            .find(|w| w.len() > word.len())
            .map(|w| w[word.len()..].to_string().dimmed().to_string())
    }
}

impl Highlighter for BehsseHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.color || line.is_empty() {
            return Cow::Borrowed(line);
        }
        let options = RenderOptions {
            line_numbers: false,
            color: true,
        };
        Cow::Owned(self.renderer.render(&tokenize(line), &options))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.color
    }
}

impl Validator for BehsseHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        let input = ctx.input();
        let done = ReplCommand::parse(input).is_some()
            || (is_complete(input) && !input.trim_end().ends_with('\\'));
        Ok(if done {
            ValidationResult::Valid(None)
        } else {
            ValidationResult::Incomplete
        })
    }
}

/// True when every string, block comment and bracket the tokenizer sees in
/// `input` is closed. A stray closer counts as complete since more input
/// cannot fix it.
fn is_complete(input: &str) -> bool {
    let mut closers = Vec::new();
    for token in tokenize(input) {
        match token.kind {
            TokenKind::CliCommand => return true,
            TokenKind::String if !string_is_closed(token.text) => return false,
            TokenKind::Comment
                if token.text.starts_with("/*")
                    && (token.text.len() < 4 || !token.text.ends_with("*/")) =>
            {
                return false;
            }
            TokenKind::Punctuation | TokenKind::Brace => match token.text {
                "(" => closers.push(")"),
                "[" => closers.push("]"),
                "{" => closers.push("}"),
                ")" | "]" | "}" if closers.pop() != Some(token.text) => return true,
                _ => {}
            },
            _ => {}
        }
    }
    closers.is_empty()
}

/// A string token is closed when it ends in its opening quote and that
/// quote is not escaped.
fn string_is_closed(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(quote) = chars.next() else {
        return false;
    };
    let Some(inner) = chars.as_str().strip_suffix(quote) else {
        return false;
    };
    inner.chars().rev().take_while(|&c| c == '\\').count() % 2 == 0
}

impl Helper for BehsseHelper {}

/// The interactive snippet REPL
pub struct Repl {
    editor: Editor<BehsseHelper, DefaultHistory>,
    history_path: PathBuf,
    theme: Theme,
    color: bool,
}

impl Repl {
    pub fn new(config: &Config) -> Result<Self> {
        let editor_config = EditorConfig::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(editor_config)?;
        editor.set_helper(Some(BehsseHelper::new(config.theme.clone(), config.color)));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("behsse")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        if let Err(e) = editor.load_history(&history_path) {
            debug!(path = %history_path.display(), error = %e, "no history loaded");
        }

        Ok(Self {
            editor,
            history_path,
            theme: config.theme.clone(),
            color: config.color,
        })
    }

    /// Reads snippets until `.exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        println!(
            "behsse {}. Enter a snippet, or {} for commands.",
            env!("CARGO_PKG_VERSION"),
            ".help".cyan()
        );

        let prompt = if self.color {
            format!("{} ", "behsse>".bright_green().bold())
        } else {
            "behsse> ".to_string()
        };

        let outcome = loop {
            match self.editor.readline(&prompt) {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => match ReplCommand::parse(&line) {
                    Some((ReplCommand::Exit, _)) => break Ok(()),
                    Some((cmd, arg)) => self.execute_command(cmd, arg),
                    None => print!(
                        "{}",
                        token_table(&tokenize(&line), &self.theme, self.color, false)
                    ),
                },
                Err(ReadlineError::Interrupted) => println!("{}", "^C".dimmed()),
                Err(ReadlineError::Eof) => break Ok(()),
                Err(err) => break Err(err.into()),
            }
        };

        if let Err(e) = self.editor.save_history(&self.history_path) {
            debug!(path = %self.history_path.display(), error = %e, "failed to save history");
        }
        outcome
    }

    fn execute_command(&self, cmd: ReplCommand, arg: Option<&str>) {
        match (cmd, arg) {
            (ReplCommand::Help, _) => {
                for cmd in ReplCommand::ALL {
                    println!("  {:<10} {}", cmd.name().cyan(), cmd.summary());
                }
                println!("Any other input is tokenized and listed.");
            }
            (ReplCommand::Clear, _) => print!("\x1B[2J\x1B[H"),
            (ReplCommand::Version, _) => println!("behsse {}", env!("CARGO_PKG_VERSION")),
            (ReplCommand::Load, Some(path)) => self.load_file(path),
            (ReplCommand::Load, None) => {
                eprintln!("{} .load needs a file path", "Error:".red().bold());
            }
            (ReplCommand::Exit, _) => {}
        }
    }

    fn load_file(&self, path: &str) {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let options = RenderOptions {
                    line_numbers: true,
                    color: self.color,
                };
                println!("{}", highlight(&text, OutputFormat::Ansi, &self.theme, &options));
            }
            Err(e) => eprintln!("{} {path}: {e}", "Error:".red().bold()),
        }
    }
}
