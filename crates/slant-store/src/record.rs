//! Persisted JSON form of an article

use crate::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use slant_domain::Article;

/// On-disk representation: exactly `url`, `author`, `title`, `sentences`, `bias`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Source URL
    pub url: String,
    /// Author
    pub author: String,
    /// Title
    pub title: String,
    /// Sentences in document order
    pub sentences: Vec<String>,
    /// Article bias
    pub bias: f64,
}

impl From<&Article> for ArticleRecord {
    fn from(article: &Article) -> Self {
        Self {
            url: article.url.clone(),
            author: article.author.clone(),
            title: article.title.clone(),
            sentences: article.sentences.clone(),
            bias: article.bias,
        }
    }
}

impl From<ArticleRecord> for Article {
    fn from(record: ArticleRecord) -> Self {
        Article::new(record.url, record.author, record.title, record.sentences, record.bias)
    }
}

/// Rebuild an article from already-parsed JSON, checking every field
///
/// # Examples
///
/// ```
/// use slant_store::from_mapping;
///
/// let value = serde_json::json!({
///     "url": "https://example.com",
///     "author": "Jane",
///     "title": "Title",
///     "sentences": ["One.", "Two."],
///     "bias": 0.5
/// });
/// let article = from_mapping(&value).unwrap();
/// assert_eq!(article.sentences.len(), 2);
/// ```
pub fn from_mapping(value: &Value) -> Result<Article, StoreError> {
    let map = value
        .as_object()
        .ok_or_else(|| StoreError::InvalidData("expected a JSON object".to_string()))?;

    let string_field = |name: &str| -> Result<String, StoreError> {
        match map.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(StoreError::InvalidData(format!(
                "field `{}` must be a string, found {}",
                name,
                type_name(other)
            ))),
            None => Err(StoreError::InvalidData(format!("missing field `{}`", name))),
        }
    };

    let sentences = match map.get("sentences") {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    StoreError::InvalidData(format!(
                        "field `sentences[{}]` must be a string, found {}",
                        idx,
                        type_name(item)
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(StoreError::InvalidData(format!(
                "field `sentences` must be an array, found {}",
                type_name(other)
            )))
        }
        None => return Err(StoreError::InvalidData("missing field `sentences`".to_string())),
    };

    let bias = match map.get("bias") {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| StoreError::InvalidData("field `bias` is out of range".to_string()))?,
        Some(other) => {
            return Err(StoreError::InvalidData(format!(
                "field `bias` must be a number, found {}",
                type_name(other)
            )))
        }
        None => return Err(StoreError::InvalidData("missing field `bias`".to_string())),
    };

    Ok(Article::new(
        string_field("url")?,
        string_field("author")?,
        string_field("title")?,
        sentences,
        bias,
    ))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
