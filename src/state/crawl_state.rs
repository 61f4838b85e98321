/// Crawl state definitions for one target
///
/// This module defines the stages of a crawl unit and which transitions
/// between them are legal.
use std::fmt;

/// Represents the current stage of a crawl unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlState {
    // ===== Active States =====
    /// The target's own page is being fetched
    Fetching,

    /// The target's page was fetched and extracted
    Extracted,

    /// The contact page linked from the target is being fetched
    ContactFetching,

    /// The contact page was fetched and extracted
    ContactExtracted,

    /// Primary and contact findings were merged
    Merged,

    // ===== Terminal States =====
    /// A success record was produced
    Done,

    /// A failure record was produced
    Failed,
}

impl CrawlState {
    /// Returns true if no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Returns true if this represents a successful completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns true if moving from `self` to `next` is allowed
    ///
    /// A failed contact-page fetch goes straight from `ContactFetching` to
    /// `Merged`; the primary findings are still usable.
    pub fn can_transition_to(&self, next: CrawlState) -> bool {
        use CrawlState::*;

        matches!(
            (self, next),
            (Fetching, Extracted)
                | (Fetching, Failed)
                | (Extracted, ContactFetching)
                | (Extracted, Merged)
                | (Extracted, Failed)
                | (ContactFetching, ContactExtracted)
                | (ContactFetching, Merged)
                | (ContactFetching, Failed)
                | (ContactExtracted, Merged)
                | (ContactExtracted, Failed)
                | (Merged, Done)
                | (Merged, Failed)
        )
    }

    /// Short lowercase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fetching => "fetching",
            Self::Extracted => "extracted",
            Self::ContactFetching => "contact_fetching",
            Self::ContactExtracted => "contact_extracted",
            Self::Merged => "merged",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    /// Returns all possible crawl states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Fetching,
            Self::Extracted,
            Self::ContactFetching,
            Self::ContactExtracted,
            Self::Merged,
            Self::Done,
            Self::Failed,
        ]
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
