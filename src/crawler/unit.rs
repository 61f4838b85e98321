//! Crawl unit - orchestration of one target
//!
//! A crawl unit takes one target URL through:
//! 1. Fetch the target page (fatal on failure)
//! 2. Extract its entity
//! 3. Fetch and extract the contact page, if one was found (one hop only,
//!    non-fatal on failure)
//! 4. Merge and deduplicate
//!
//! and always produces exactly one [`CrawlResult`]. Nothing that goes wrong
//! for a single target escapes this boundary.

use crate::crawler::merge::merge;
use crate::crawler::result::{CompanySignals, CrawlResult};
use crate::extract::{extract, ExtractedEntity};
use crate::fetch::Fetcher;
use crate::state::CrawlState;
use crate::url::is_fetchable;
use crate::FinderError;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Turns a page's HTML into an entity, given the page URL
pub type ExtractFn = fn(&str, &str) -> ExtractedEntity;

/// Runs the fetch → extract → contact hop → merge pipeline for a target
#[derive(Clone)]
pub struct CrawlUnit {
    fetcher: Arc<Fetcher>,
    extractor: ExtractFn,
}

/// Tracks and validates the stage a single run is in
struct Progress<'a> {
    url: &'a str,
    state: CrawlState,
}

impl<'a> Progress<'a> {
    fn new(url: &'a str) -> Self {
        Self {
            url,
            state: CrawlState::Fetching,
        }
    }

    fn advance(&mut self, next: CrawlState) -> Result<(), FinderError> {
        if !self.state.can_transition_to(next) {
            return Err(FinderError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        tracing::trace!("{}: {} -> {}", self.url, self.state, next);
        self.state = next;
        Ok(())
    }

    fn fail(&mut self) {
        tracing::trace!("{}: {} -> {}", self.url, self.state, CrawlState::Failed);
        self.state = CrawlState::Failed;
    }
}

impl CrawlUnit {
    pub fn new(fetcher: Arc<Fetcher>) -> Self {
        Self::with_extractor(fetcher, extract)
    }

    /// Creates a unit that extracts pages with `extractor`
    pub fn with_extractor(fetcher: Arc<Fetcher>, extractor: ExtractFn) -> Self {
        Self { fetcher, extractor }
    }

    /// Crawls one target and returns its record
    ///
    /// A fetch failure on the target itself, or any unexpected error while
    /// extracting or merging, yields a failure record whose error names the
    /// target URL.
    pub async fn run(&self, url: &str) -> CrawlResult {
        let mut progress = Progress::new(url);

        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(failure) => {
                progress.fail();
                tracing::info!("Failed to fetch {}: {}", url, failure);
                return CrawlResult::failure(url, format!("Failed to crawl {}: {}", url, failure));
            }
        };

        match self.process(&mut progress, url, &html).await {
            Ok(signals) => {
                tracing::info!(
                    "Crawled {}: {} phone numbers, {} social links",
                    url,
                    signals.phone_numbers.len(),
                    signals.social_links.total()
                );
                CrawlResult::success(url, signals)
            }
            Err(e) => {
                progress.fail();
                tracing::warn!("Failed to process {}: {}", url, e);
                CrawlResult::failure(url, format!("Failed to crawl {}: {}", url, e))
            }
        }
    }

    async fn process(
        &self,
        progress: &mut Progress<'_>,
        url: &str,
        html: &str,
    ) -> Result<CompanySignals, FinderError> {
        let primary = guarded_extract(self.extractor, url, html)?;
        progress.advance(CrawlState::Extracted)?;

        let contact = match primary.contact_page_url.as_deref() {
            Some(contact_url) => {
                progress.advance(CrawlState::ContactFetching)?;
                let contact = self.crawl_contact_page(contact_url).await;
                if contact.is_some() {
                    progress.advance(CrawlState::ContactExtracted)?;
                }
                contact
            }
            None => None,
        };

        let signals = merge(&primary, contact.as_ref());
        progress.advance(CrawlState::Merged)?;
        progress.advance(CrawlState::Done)?;

        Ok(signals)
    }

    /// Fetches and extracts the contact page; failures are logged and dropped
    async fn crawl_contact_page(&self, contact_url: &str) -> Option<ExtractedEntity> {
        if !is_fetchable(contact_url) {
            tracing::debug!("Contact link {} is not an HTTP page, not fetching", contact_url);
            return None;
        }

        let html = match self.fetcher.fetch(contact_url).await {
            Ok(html) => html,
            Err(failure) => {
                tracing::warn!("Skipping contact page {}: {}", contact_url, failure);
                return None;
            }
        };

        match guarded_extract(self.extractor, contact_url, &html) {
            Ok(entity) => {
                tracing::debug!(
                    "Contact page {}: {} phone numbers, {} social links",
                    contact_url,
                    entity.phone_numbers.len(),
                    entity.social_links.total()
                );
                Some(entity)
            }
            Err(e) => {
                tracing::warn!("Skipping contact page {}: {}", contact_url, e);
                None
            }
        }
    }
}

/// Runs extraction, turning a panic into an error
fn guarded_extract(
    extractor: ExtractFn,
    url: &str,
    html: &str,
) -> Result<ExtractedEntity, FinderError> {
    catch_unwind(AssertUnwindSafe(|| extractor(url, html))).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "extraction panicked".to_string());
        FinderError::Extraction {
            url: url.to_string(),
            message,
        }
    })
}
