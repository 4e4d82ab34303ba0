//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use slant_analyzer::AnalysisReport;
use slant_domain::{Article, SourceStatus};
use std::path::{Path, PathBuf};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const SENTENCE_WIDTH: usize = 72;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of analyzing one URL.
    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(format!("{:.4}", report.article.bias)),
        }
    }

    /// Format a stored article.
    pub fn format_article(&self, article: &Article) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&article_json(article))?),
            OutputFormat::Table => Ok(self.format_article_table(article)),
            OutputFormat::Quiet => Ok(format!("{:.4}", article.bias)),
        }
    }

    /// Format a listing of stored articles.
    pub fn format_articles(&self, articles: &[(PathBuf, Article)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = articles
                    .iter()
                    .map(|(path, article)| {
                        let mut value = article_json(article);
                        value["path"] = serde_json::Value::String(path.display().to_string());
                        value
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Table => Ok(self.format_articles_table(articles)),
            OutputFormat::Quiet => Ok(articles
                .iter()
                .map(|(path, _)| path.display().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the score of a single sentence.
    pub fn format_score(&self, sentence: &str, score: f64) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "sentence": sentence,
                "score": score,
            }))?),
            OutputFormat::Table => Ok(format!("{}  {}", self.format_bias(score), sentence)),
            OutputFormat::Quiet => Ok(format!("{:.4}", score)),
        }
    }

    fn format_report_json(&self, report: &AnalysisReport) -> Result<String> {
        let article = &report.article;
        let status = match &report.status {
            SourceStatus::Ok => serde_json::Value::Null,
            SourceStatus::Warning(info) => serde_json::Value::String(info.clone()),
        };
        let sentences: Vec<serde_json::Value> = report
            .sentence_scores
            .iter()
            .map(|s| serde_json::json!({ "sentence": s.sentence, "score": s.score }))
            .collect();

        let value = serde_json::json!({
            "url": article.url,
            "author": article.author,
            "title": article.title,
            "bias": article.bias,
            "leaning": article.leaning(),
            "warning": status,
            "stored": report.outcome.was_written(),
            "path": report.outcome.path().display().to_string(),
            "sentences": sentences,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_report_table(&self, report: &AnalysisReport) -> String {
        let article = &report.article;
        let mut out = self.article_header(article);

        if let SourceStatus::Warning(info) = &report.status {
            out.push_str(&self.warning(&format!("Provider: {}", info)));
            out.push('\n');
        }

        if report.sentence_scores.is_empty() {
            out.push_str(&self.colorize("No sentences found.", "yellow"));
            out.push('\n');
        } else {
            let mut builder = Builder::default();
            builder.push_record(["#", "Score", "Sentence"]);
            for (idx, s) in report.sentence_scores.iter().enumerate() {
                builder.push_record([
                    (idx + 1).to_string(),
                    format!("{:+.2}", s.score),
                    truncate(&s.sentence, SENTENCE_WIDTH),
                ]);
            }
            out.push_str(&styled(builder));
            out.push('\n');
            out.push_str(&format!(
                "{} of {} sentence(s) matched the lexicon\n",
                report.scored_sentences(),
                report.sentence_scores.len()
            ));
            if let Some((low, high)) = report.extremes() {
                if low.score < 0.0 {
                    out.push_str(&format!(
                        "  Most negative: {} {}\n",
                        self.format_bias(low.score),
                        truncate(&low.sentence, SENTENCE_WIDTH)
                    ));
                }
                if high.score > 0.0 {
                    out.push_str(&format!(
                        "  Most positive: {} {}\n",
                        self.format_bias(high.score),
                        truncate(&high.sentence, SENTENCE_WIDTH)
                    ));
                }
            }
        }

        out.push_str(&self.stored_line(report.outcome.was_written(), report.outcome.path()));
        out
    }

    fn format_article_table(&self, article: &Article) -> String {
        let mut out = self.article_header(article);

        if article.sentences.is_empty() {
            out.push_str(&self.colorize("No sentences stored.", "yellow"));
            return out;
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Sentence"]);
        for (idx, sentence) in article.sentences.iter().enumerate() {
            builder.push_record([(idx + 1).to_string(), truncate(sentence, SENTENCE_WIDTH)]);
        }
        out.push_str(&styled(builder));
        out
    }

    fn format_articles_table(&self, articles: &[(PathBuf, Article)]) -> String {
        if articles.is_empty() {
            return self.colorize("No stored articles found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["File", "Title", "Bias", "Sentences"]);
        for (path, article) in articles {
            let file = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            builder.push_record([
                file,
                truncate(display_title(article), 40),
                format!("{:+.4}", article.bias),
                article.sentence_count().to_string(),
            ]);
        }
        styled(builder)
    }

    fn article_header(&self, article: &Article) -> String {
        let author = if article.author.is_empty() { "(unknown)" } else { &article.author };
        format!(
            "{}\n  Author: {}\n  URL:    {}\n  Bias:   {} ({})\n",
            self.colorize(display_title(article), "cyan"),
            author,
            article.url,
            self.format_bias(article.bias),
            article.leaning()
        )
    }

    fn stored_line(&self, written: bool, path: &Path) -> String {
        if written {
            self.success(&format!("Stored at {}", path.display()))
        } else {
            self.info(&format!("Already stored at {}", path.display()))
        }
    }

    fn format_bias(&self, bias: f64) -> String {
        let text = format!("{:+.4}", bias);
        if bias > 0.0 {
            self.colorize(&text, "green")
        } else if bias < 0.0 {
            self.colorize(&text, "red")
        } else {
            text
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn article_json(article: &Article) -> serde_json::Value {
    serde_json::json!({
        "url": article.url,
        "author": article.author,
        "title": article.title,
        "sentences": article.sentences,
        "bias": article.bias,
    })
}

fn display_title(article: &Article) -> &str {
    if article.title.is_empty() {
        "(untitled)"
    } else {
        &article.title
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
