//! Crawler module: one target from fetch to final record
//!
//! This module contains the crawl orchestration, including:
//! - The [`CrawlUnit`] pipeline (fetch, extract, contact-page hop, merge)
//! - Merging of primary and contact-page findings
//! - The [`CrawlResult`] record written to the store

mod merge;
mod result;
mod unit;

pub use merge::merge;
pub use result::{CompanySignals, CrawlOutcome, CrawlResult};
pub use unit::{CrawlUnit, ExtractFn};
