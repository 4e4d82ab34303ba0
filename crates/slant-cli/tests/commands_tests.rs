//! Integration tests for the CLI commands
//!
//! The pipeline runs against `MockSource` and a temporary store directory.

use slant_analyzer::{Analyzer, AnalyzerConfig, Lexicon};
use slant_cli::cli::{AnalyzeArgs, ScoreArgs, ShowArgs};
use slant_cli::commands;
use slant_cli::config::OutputFormat;
use slant_cli::{CliError, Config, Formatter};
use slant_domain::SourceDocument;
use slant_provider::MockSource;
use slant_store::{JsonFileStore, KeyStrategy};
use std::fs;
use std::sync::Arc;

fn lexicon() -> Arc<Lexicon> {
    Arc::new(Lexicon::from_entries([("good", 3.0), ("bad", -3.0), ("happy", 3.0)]))
}

fn quiet() -> Formatter {
    Formatter::new(OutputFormat::Quiet, false)
}

#[tokio::test]
async fn test_analyze_then_show_and_list() {
    let tmp = tempfile::tempdir().unwrap();
    let mut source = MockSource::default();
    source.add_document(
        "https://example.com/good",
        SourceDocument::ok("A good day. A bad night.", "Jane", "Mixed day"),
    );
    let store = JsonFileStore::new(tmp.path(), KeyStrategy::TitlePrefix).unwrap();
    let analyzer = Analyzer::new(source, store, lexicon(), AnalyzerConfig::default());

    let args = AnalyzeArgs {
        urls: vec!["https://example.com/good".to_string()],
    };
    let reports = commands::execute_analyze(args, &analyzer, &quiet()).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].article.bias, 0.0);

    let path = reports[0].outcome.path().to_path_buf();
    let shown = commands::execute_show(ShowArgs { file: path }, &quiet()).unwrap();
    assert_eq!(shown, reports[0].article);

    assert_eq!(commands::execute_list(analyzer.store(), &quiet()).unwrap(), 1);
}

#[tokio::test]
async fn test_analyze_continues_after_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let mut source = MockSource::new("It was good.", "", "Fine story");
    source.add_error("https://down.example");
    let store = JsonFileStore::new(tmp.path(), KeyStrategy::TitlePrefix).unwrap();
    let analyzer = Analyzer::new(source.clone(), store, lexicon(), AnalyzerConfig::default());

    let args = AnalyzeArgs {
        urls: vec![
            "https://down.example".to_string(),
            "https://up.example".to_string(),
        ],
    };
    let result = commands::execute_analyze(args, &analyzer, &quiet()).await;

    assert!(matches!(result, Err(CliError::PartialFailure { failed: 1, total: 2 })));
    assert_eq!(source.call_count(), 2);
    assert_eq!(analyzer.store().list().unwrap().len(), 1);
}

#[test]
fn test_score_command() {
    let lexicon = lexicon();
    let args = ScoreArgs {
        words: vec!["I".into(), "am".into(), "not".into(), "happy".into()],
    };
    let value = commands::execute_score(args, &lexicon, &quiet()).unwrap();
    assert_eq!(value, -4.0);
}

#[test]
fn test_show_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let args = ShowArgs {
        file: tmp.path().join("missing.json"),
    };
    assert!(matches!(
        commands::execute_show(args, &quiet()),
        Err(CliError::Store(slant_store::StoreError::NotFound(_)))
    ));
}

#[test]
fn test_list_skips_unreadable_records() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(tmp.path(), KeyStrategy::TitlePrefix).unwrap();
    fs::write(tmp.path().join("broken.json"), "{").unwrap();
    assert!(commands::list_articles(&store).unwrap().is_empty());
}

#[test]
fn test_missing_lexicon_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        lexicon_path: tmp.path().join("absent.txt"),
        store_dir: tmp.path().join("articles"),
        ..Config::default()
    };
    assert!(matches!(commands::build_analyzer(&config), Err(CliError::Lexicon(_))));
}

#[test]
fn test_build_analyzer_from_config() {
    let tmp = tempfile::tempdir().unwrap();
    let lexicon_path = tmp.path().join("lexicon.txt");
    fs::write(&lexicon_path, "good\t3\nbad\t-3\n").unwrap();

    let config = Config {
        lexicon_path,
        store_dir: tmp.path().join("articles"),
        ..Config::default()
    };
    let analyzer = commands::build_analyzer(&config).unwrap();
    assert_eq!(analyzer.lexicon().len(), 2);
    assert!(tmp.path().join("articles").is_dir());
}
