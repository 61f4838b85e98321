use crate::extract::SocialLinks;
use serde::Serialize;
use std::collections::BTreeSet;

/// Content fields of a successful crawl
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanySignals {
    pub phone_numbers: BTreeSet<String>,
    pub social_links: SocialLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_page: Option<String>,
}

impl CompanySignals {
    /// Number of phone numbers plus social links
    pub fn data_points(&self) -> usize {
        self.phone_numbers.len() + self.social_links.total()
    }
}

/// Either content or an error, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CrawlOutcome {
    Success(CompanySignals),
    Failure { error: String },
}

/// The record persisted for one target, keyed by `url`
///
/// Serializes to the stored document shape: a success carries
/// `phone_numbers`, `social_links` and optionally `contact_page`; a failure
/// carries only `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlResult {
    pub url: String,
    #[serde(flatten)]
    pub outcome: CrawlOutcome,
}

impl CrawlResult {
    pub fn success(url: impl Into<String>, signals: CompanySignals) -> Self {
        Self {
            url: url.into(),
            outcome: CrawlOutcome::Success(signals),
        }
    }

    pub fn failure(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            outcome: CrawlOutcome::Failure {
                error: error.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, CrawlOutcome::Success(_))
    }

    /// Content fields, if the crawl succeeded
    pub fn signals(&self) -> Option<&CompanySignals> {
        match &self.outcome {
            CrawlOutcome::Success(signals) => Some(signals),
            CrawlOutcome::Failure { .. } => None,
        }
    }

    /// Error message, if the crawl failed
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            CrawlOutcome::Success(_) => None,
            CrawlOutcome::Failure { error } => Some(error),
        }
    }
}
