// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL (Read-Eval-Print Loop) for the Lox scanner.
//!
//! Every entry is scanned on its own and its tokens are echoed back. The
//! error state lives in a fresh [`ConsoleReporter`] per entry, so a bad line
//! never affects the next one.

use crate::report::ConsoleReporter;
use lox_lang::lexer::{KEYWORDS, Scanner, Span};
use lox_lang::{Lox, Token, TokenKind};
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::path::PathBuf;

/// REPL configuration constants
const HISTORY_FILE: &str = ".lox_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim().strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Scan a Lox file and list its tokens"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints, and validation
#[derive(Default)]
struct LoxHelper {
    /// Keywords and REPL commands for completion
    words: Vec<String>,
}

impl LoxHelper {
    fn new() -> Self {
        let keywords = KEYWORDS.iter().map(|(text, _)| (*text).to_string());
        let commands = [".help", ".exit", ".clear", ".version", ".load"]
            .into_iter()
            .map(String::from);

        Self {
            words: keywords.chain(commands).collect(),
        }
    }
}

/// Start of the word that ends at `pos`.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|&(_, c)| !c.is_alphanumeric() && c != '_' && c != '.')
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

impl Completer for LoxHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = word_start(line, pos);

        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for LoxHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        self.suggest(line, pos).map(|rest| rest.dimmed().to_string())
    }
}

impl LoxHelper {
    /// Remainder of the first known word that completes the one at `pos`.
    fn suggest(&self, line: &str, pos: usize) -> Option<&str> {
        if pos < line.len() {
            return None;
        }

        let word = &line[word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        self.words
            .iter()
            .find(|w| w.starts_with(word) && w.len() > word.len())
            .map(|w| &w[word.len()..])
    }
}

impl Highlighter for LoxHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if ReplCommand::parse(line).is_some() {
            return Cow::Owned(line.magenta().to_string());
        }
        Cow::Owned(highlight_source(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

/// Colors source text using the scanner's own tokens.
///
/// Text between tokens (whitespace, comments, malformed input) is copied
/// through unchanged.
fn highlight_source(line: &str) -> String {
    let mut ignore = |_: usize, _: &str| {};
    let tokens = Scanner::new(line, &mut ignore).scan_tokens();

    let mut result = String::with_capacity(line.len() * 2);
    let mut last = 0;

    for token in &tokens {
        let Span { start, end } = token.span;
        result.push_str(&line[last..start]);
        result.push_str(&color_lexeme(token.kind, &line[start..end]));
        last = end;
    }
    result.push_str(&line[last..]);

    result
}

fn color_lexeme(kind: TokenKind, text: &str) -> String {
    match kind {
        TokenKind::True | TokenKind::False | TokenKind::Nil | TokenKind::This => {
            text.blue().to_string()
        }
        _ if kind.is_keyword() => text.magenta().bold().to_string(),
        TokenKind::Number => text.yellow().to_string(),
        TokenKind::String => text.green().to_string(),
        TokenKind::LeftParen
        | TokenKind::RightParen
        | TokenKind::LeftBrace
        | TokenKind::RightBrace => text.yellow().to_string(),
        TokenKind::Identifier
        | TokenKind::Comma
        | TokenKind::Dot
        | TokenKind::Semicolon
        | TokenKind::Eof => text.to_string(),
        _ => text.cyan().to_string(),
    }
}

// Each line is scanned on its own, so every line is complete
impl Validator for LoxHelper {}

impl Helper for LoxHelper {}

/// The interactive REPL for the Lox scanner
pub struct Repl {
    lox: Lox,
    editor: Editor<LoxHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(LoxHelper::new()));

        // Determine history file path
        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lox")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %e, "cannot create history directory");
            }
        }

        if let Err(e) = editor.load_history(&history_path) {
            tracing::debug!(error = %e, "no history loaded");
        }

        Ok(Self {
            lox: Lox::new(),
            editor,
            history_path,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        self.print_banner();

        loop {
            let prompt = self.format_prompt();

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    // Check for REPL commands
                    if let Some((cmd, arg)) = ReplCommand::parse(&line) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.scan_and_print(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            tracing::warn!(error = %e, "failed to save history");
        }

        self.print_goodbye();
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "Lox Scanner".white().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!("  {}", "Each entry is scanned and its tokens listed".dimmed());
        println!();
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn print_goodbye(&self) {
        println!();
        println!("{}", "Goodbye!".bright_cyan());
        println!();
    }

    fn format_prompt(&self) -> String {
        format!("{} ", "lox>".bright_green().bold())
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => {
                self.print_help();
                CommandResult::Continue
            }
            ReplCommand::Exit => CommandResult::Exit,
            ReplCommand::Clear => {
                print!("\x1B[2J\x1B[H");
                CommandResult::Continue
            }
            ReplCommand::Version => {
                self.print_version();
                CommandResult::Continue
            }
            ReplCommand::Load => {
                if let Some(path) = arg {
                    self.load_file(path);
                } else {
                    eprintln!(
                        "{}: {} {}",
                        "Error".red().bold(),
                        ".load".cyan(),
                        "requires a file path".dimmed()
                    );
                }
                CommandResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!(
            "  {:16} {}",
            "Ctrl+C".yellow(),
            "Cancel current input".dimmed()
        );
        println!("  {:16} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:16} {}", "Ctrl+L".yellow(), "Clear screen".dimmed());
        println!("  {:16} {}", "Tab".yellow(), "Autocomplete".dimmed());
        println!("  {:16} {}", "↑/↓".yellow(), "Navigate history".dimmed());
        println!();
    }

    fn print_version(&self) {
        println!();
        println!(
            "{}: {}",
            "Lox".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").yellow()
        );
        println!();
    }

    fn load_file(&mut self, path: &str) {
        match self.lox.scan_file(path) {
            Ok(output) => {
                for token in &output.tokens {
                    println!("{}", format_token(token));
                }
                ConsoleReporter::new().replay(&output.diagnostics);
            }
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
            }
        }
    }

    fn scan_and_print(&mut self, input: &str) {
        if scan_entry(&self.lox, input) {
            tracing::debug!("entry had scan errors");
        }
    }
}

/// Scans one entry, echoes its tokens and reports its diagnostics.
///
/// Returns whether the entry had errors.
fn scan_entry(lox: &Lox, input: &str) -> bool {
    let mut reporter = ConsoleReporter::new();
    let tokens = lox.scan_with(input, &mut reporter);

    for token in &tokens {
        println!("{}", format_token(token));
    }

    reporter.had_error()
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

/// Format a token for display with syntax coloring
fn format_token(token: &Token) -> String {
    let mut text = format!(
        "{} {}",
        format!("{:?}", token.kind).cyan(),
        color_lexeme(token.kind, &token.lexeme)
    );
    if let Some(literal) = &token.literal {
        text.push(' ');
        text.push_str(&literal.to_string().dimmed().to_string());
    }
    text
}
