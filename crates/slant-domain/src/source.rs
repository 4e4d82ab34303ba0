//! Source module - what an extraction provider hands back for a URL

/// Status reported by an extraction provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    /// Provider reported success
    Ok,

    /// Provider reported a non-OK status; the payload is its status info.
    ///
    /// This is a soft failure: whatever partial data came back is still used.
    Warning(String),
}

impl SourceStatus {
    /// Classify a raw provider status string
    ///
    /// Only the literal `"OK"` counts as success.
    ///
    /// # Examples
    ///
    /// ```
    /// use slant_domain::SourceStatus;
    ///
    /// assert!(SourceStatus::from_raw("OK", None).is_ok());
    /// assert_eq!(
    ///     SourceStatus::from_raw("ERROR", Some("daily-transaction-limit-exceeded")),
    ///     SourceStatus::Warning("daily-transaction-limit-exceeded".to_string())
    /// );
    /// ```
    pub fn from_raw(status: &str, info: Option<&str>) -> Self {
        if status == "OK" {
            SourceStatus::Ok
        } else {
            let info = info
                .filter(|i| !i.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("provider status {}", status));
            SourceStatus::Warning(info)
        }
    }

    /// True when the provider reported success
    pub fn is_ok(&self) -> bool {
        matches!(self, SourceStatus::Ok)
    }

    /// Combine two statuses, keeping the first warning seen
    pub fn and(self, other: SourceStatus) -> SourceStatus {
        match self {
            SourceStatus::Ok => other,
            warning => warning,
        }
    }
}

/// Raw article data returned by an extraction provider
///
/// Fields are always present; a provider that could not supply one leaves it
/// empty rather than omitting it.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    /// Overall status of the extraction
    pub status: SourceStatus,

    /// Raw article body text
    pub text: String,

    /// Article author
    pub author: String,

    /// Article title
    pub title: String,
}

impl SourceDocument {
    /// A successful document
    pub fn ok(text: impl Into<String>, author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            status: SourceStatus::Ok,
            text: text.into(),
            author: author.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_info_falls_back_to_status() {
        assert_eq!(
            SourceStatus::from_raw("ERROR", None),
            SourceStatus::Warning("provider status ERROR".to_string())
        );
        assert_eq!(
            SourceStatus::from_raw("ERROR", Some("")),
            SourceStatus::Warning("provider status ERROR".to_string())
        );
    }

    #[test]
    fn test_status_is_case_sensitive() {
        assert!(!SourceStatus::from_raw("ok", None).is_ok());
    }

    #[test]
    fn test_and_keeps_first_warning() {
        let first = SourceStatus::Warning("first".into());
        let second = SourceStatus::Warning("second".into());
        assert_eq!(first.clone().and(second.clone()), first);
        assert_eq!(SourceStatus::Ok.and(second.clone()), second);
        assert!(SourceStatus::Ok.and(SourceStatus::Ok).is_ok());
    }
}
