//! Statistics generation from the document store
//!
//! This module provides functionality for extracting and displaying
//! crawl statistics from the storage layer.

use crate::storage::Store;
use crate::FinderError;

/// Crawl statistics summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Total number of documents, successful or not
    pub total_records: u64,

    /// Documents without an error
    pub successful_records: u64,

    /// Phone numbers plus social links across successful documents
    pub data_points: u64,
}

impl CrawlStatistics {
    /// Share of documents without an error, as a percentage
    ///
    /// Returns None for an empty store.
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_records == 0 {
            return None;
        }
        Some(self.successful_records as f64 / self.total_records as f64 * 100.0)
    }
}

/// Loads statistics from storage
///
/// # Arguments
///
/// * `store` - The store to query
///
/// # Returns
///
/// * `Ok(CrawlStatistics)` - Successfully loaded statistics
/// * `Err(FinderError)` - Failed to query statistics
pub fn load_statistics(store: &dyn Store) -> Result<CrawlStatistics, FinderError> {
    let total_records = store.count()?;
    let successful_records = store.count_successful()?;

    let data_points = store
        .successful_records()?
        .iter()
        .map(|record| (record.phone_numbers.len() + record.social_links.total()) as u64)
        .sum();

    Ok(CrawlStatistics {
        total_records,
        successful_records,
        data_points,
    })
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("  Total websites crawled: {}", stats.total_records);
    match stats.success_rate() {
        Some(rate) => println!(
            "  Successfully crawled: {} ({:.2}%)",
            stats.successful_records, rate
        ),
        None => println!("  No records found in the store."),
    }
    println!("  Total data points extracted: {}", stats.data_points);
}
