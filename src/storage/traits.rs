//! Storage traits and error types
//!
//! This module defines the trait interface for document stores and
//! associated error types.

use crate::crawler::CrawlResult;
use crate::storage::{CompanyNames, CompanyRecord, DocumentFilter};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for document store implementations
///
/// Implementations must accept concurrent calls from many workers. Upserts
/// to different URLs need no coordination; repeated upserts to the same URL
/// leave only the last write.
pub trait Store: Send + Sync {
    // ===== Crawl Results =====

    /// Writes or overwrites the document keyed by `result.url`
    ///
    /// Only crawl-owned fields are replaced; names layered on by the
    /// enrichment pass survive a re-crawl.
    fn upsert(&self, result: &CrawlResult) -> StorageResult<()>;

    /// Gets a document by URL
    fn get(&self, url: &str) -> StorageResult<Option<CompanyRecord>>;

    /// Deletes every document, returning how many were removed
    fn clear(&self) -> StorageResult<u64>;

    // ===== Enrichment =====

    /// Layers company names onto an existing document
    ///
    /// Returns false if no document exists for `url`.
    fn apply_company_names(&self, url: &str, names: &CompanyNames) -> StorageResult<bool>;

    // ===== Lookup =====

    /// Returns non-error documents that may match any field of the filter
    fn search(&self, filter: &DocumentFilter) -> StorageResult<Vec<CompanyRecord>>;

    // ===== Statistics =====

    /// Counts all documents
    fn count(&self) -> StorageResult<u64>;

    /// Counts documents without an error
    fn count_successful(&self) -> StorageResult<u64>;

    /// Gets every document without an error
    fn successful_records(&self) -> StorageResult<Vec<CompanyRecord>>;
}
