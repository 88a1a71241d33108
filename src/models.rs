//! Data types shared across the survey pipeline.

/// Metadata extracted from a successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    /// Page title, or the `"No Title Found"` sentinel.
    pub title: String,
    /// Meta description, or the `"No Meta Description Found"` sentinel.
    pub meta_description: String,
    /// Number of `<p>` elements in the document.
    pub paragraph_count: usize,
    /// Every `https://` anchor href, in document order, duplicates kept.
    pub links: Vec<String>,
}

impl PageSummary {
    /// Number of collected secure links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

/// Outcome of a single fetch attempt.
///
/// Exactly one payload shape per record: either the extracted metadata or a
/// failure reason, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteOutcome {
    /// The page was fetched and its metadata extracted.
    Success(PageSummary),
    /// The fetch failed; the record carries only the cause.
    Failure {
        /// Human-readable failure cause.
        error_message: String,
    },
}

/// The result of surveying one target URL.
///
/// Created by a fetch worker, delivered through the result channel, and
/// consumed exactly once by the collector. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRecord {
    /// The target URL, always present.
    pub url: String,
    /// Success or failure payload.
    pub outcome: SiteOutcome,
}

impl SiteRecord {
    /// Builds a success record.
    pub fn success(url: impl Into<String>, summary: PageSummary) -> Self {
        SiteRecord {
            url: url.into(),
            outcome: SiteOutcome::Success(summary),
        }
    }

    /// Builds a failure record.
    pub fn failure(url: impl Into<String>, error_message: impl Into<String>) -> Self {
        SiteRecord {
            url: url.into(),
            outcome: SiteOutcome::Failure {
                error_message: error_message.into(),
            },
        }
    }

    /// Whether this record carries a success payload.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, SiteOutcome::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_tagged_union() {
        let ok = SiteRecord::success(
            "https://a.test",
            PageSummary {
                title: "T".into(),
                meta_description: "D".into(),
                paragraph_count: 1,
                links: vec!["https://b.test".into()],
            },
        );
        assert!(ok.is_success());

        let err = SiteRecord::failure("https://a.test", "Timeout Error");
        assert!(!err.is_success());
        match err.outcome {
            SiteOutcome::Failure { error_message } => assert_eq!(error_message, "Timeout Error"),
            SiteOutcome::Success(_) => panic!("failure record should not carry a success payload"),
        }
    }

    #[test]
    fn test_link_count_matches_links() {
        let summary = PageSummary {
            title: String::new(),
            meta_description: String::new(),
            paragraph_count: 0,
            links: vec!["https://a.test".into(), "https://a.test".into()],
        };
        assert_eq!(summary.link_count(), 2);
    }
}
