//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use slant_analyzer::{AnalysisReport, Analyzer};
use slant_domain::ArticleSource;
use slant_store::JsonFileStore;
use std::fmt::Display;

/// Analyze one URL and print the report.
pub async fn analyze_url<S>(
    url: &str,
    analyzer: &Analyzer<S, JsonFileStore>,
    formatter: &Formatter,
) -> Result<AnalysisReport>
where
    S: ArticleSource,
    S::Error: Display,
{
    let report = analyzer.analyze(url).await?;
    println!("{}", formatter.format_report(&report)?);
    Ok(report)
}

/// Execute the analyze command.
///
/// Every URL is attempted; failures are printed as they happen and reported
/// together at the end.
pub async fn execute_analyze<S>(
    args: AnalyzeArgs,
    analyzer: &Analyzer<S, JsonFileStore>,
    formatter: &Formatter,
) -> Result<Vec<AnalysisReport>>
where
    S: ArticleSource,
    S::Error: Display,
{
    let total = args.urls.len();
    let mut reports = Vec::with_capacity(total);

    for url in &args.urls {
        match analyze_url(url, analyzer, formatter).await {
            Ok(report) => reports.push(report),
            Err(e) => eprintln!("{}", formatter.error(&format!("{}: {}", url, e))),
        }
    }

    let failed = total - reports.len();
    if failed > 0 {
        return Err(CliError::PartialFailure { failed, total });
    }
    Ok(reports)
}
