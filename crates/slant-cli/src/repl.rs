//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Each line is a URL to analyze unless it names one of the built-in
//! commands. A failed URL is reported and the loop carries on.

use crate::cli::{ScoreArgs, ShowArgs};
use crate::commands;
use crate::config::slant_dir;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use slant_analyzer::Analyzer;
use slant_domain::ArticleSource;
use slant_store::JsonFileStore;
use std::fmt::Display;
use std::path::PathBuf;

const PROMPT: &str = "Enter a URL: ";

/// Run the interactive REPL.
pub async fn run_repl<S>(analyzer: &Analyzer<S, JsonFileStore>, formatter: &Formatter) -> Result<()>
where
    S: ArticleSource,
    S::Error: Display,
{
    println!("{}", formatter.info("Slant REPL - Enter article URLs, 'help' for commands, 'exit' to quit"));
    println!();

    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e))))?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_line(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => print_help(formatter),
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, analyzer, formatter).await {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    List,
    Show(PathBuf),
    Score(String),
    Analyze(String),
}

/// Parse a trimmed, non-empty REPL line.
fn parse_repl_line(line: &str) -> Result<ReplCommand> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "list" => Ok(ReplCommand::List),
        "show" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: show <file>".to_string()));
            }
            Ok(ReplCommand::Show(PathBuf::from(rest)))
        }
        "score" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: score <sentence>".to_string()));
            }
            Ok(ReplCommand::Score(rest.to_string()))
        }
        _ => Ok(ReplCommand::Analyze(line.to_string())),
    }
}

/// Execute a REPL command.
async fn execute_repl_command<S>(
    cmd: ReplCommand,
    analyzer: &Analyzer<S, JsonFileStore>,
    formatter: &Formatter,
) -> Result<()>
where
    S: ArticleSource,
    S::Error: Display,
{
    match cmd {
        ReplCommand::Analyze(url) => {
            commands::analyze_url(&url, analyzer, formatter).await?;
        }
        ReplCommand::Show(file) => {
            commands::execute_show(ShowArgs { file }, formatter)?;
        }
        ReplCommand::Score(sentence) => {
            let args = ScoreArgs { words: vec![sentence] };
            commands::execute_score(args, analyzer.lexicon(), formatter)?;
        }
        ReplCommand::List => {
            commands::execute_list(analyzer.store(), formatter)?;
        }
        ReplCommand::Exit | ReplCommand::Help => {}
    }

    Ok(())
}

fn get_history_path() -> Result<PathBuf> {
    let dir = slant_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <url>                  - Analyze and store the article at <url>");
    println!("  show <file>            - Show a stored article");
    println!("  score <sentence>       - Score a sentence against the lexicon");
    println!("  list                   - List stored articles");
    println!("  help, ?                - Show this help");
    println!("  exit, quit, q          - Exit REPL (Ctrl-D also works)");
    println!();
}
