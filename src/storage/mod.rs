//! Storage module for crawl documents
//!
//! This module handles all database operations, including:
//! - SQLite database initialization and schema management
//! - Idempotent per-URL upserts of crawl results
//! - Layering enrichment names onto existing documents
//! - Candidate retrieval for lookups

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{Store, StorageError, StorageResult};

use crate::extract::SocialLinks;
use crate::FinderError;
use serde::Serialize;
use std::path::Path;

/// Initializes or opens a document store
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(SqliteStore)` - Successfully initialized store
/// * `Err(FinderError)` - Failed to initialize store
pub fn open_store(path: &Path) -> Result<SqliteStore, FinderError> {
    SqliteStore::new(path)
}

/// A stored document: crawl fields plus enrichment names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyRecord {
    pub url: String,
    pub phone_numbers: Vec<String>,
    pub social_links: SocialLinks,
    pub contact_page: Option<String>,
    pub error: Option<String>,
    pub legal_name: Option<String>,
    pub commercial_names: Option<Vec<String>>,
    pub all_company_names: Option<Vec<String>>,
    pub updated_at: String,
}

impl CompanyRecord {
    /// Returns true if this document records a failed crawl
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Names layered onto a document by the enrichment pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyNames {
    pub legal_name: Option<String>,
    pub commercial_names: Option<Vec<String>>,
    pub all_company_names: Vec<String>,
}

/// Coarse candidate filter for lookups
///
/// Every field is already normalized by the caller. The store returns a
/// superset of the matching documents (error documents excluded); exact
/// matching and scoring happen in the lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub website: Option<String>,
    pub phone_number: Option<String>,
    pub company_name: Option<String>,
    pub facebook_profile: Option<String>,
}

impl DocumentFilter {
    pub fn is_empty(&self) -> bool {
        self.website.is_none()
            && self.phone_number.is_none()
            && self.company_name.is_none()
            && self.facebook_profile.is_none()
    }
}
