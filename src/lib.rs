//! Company Finder: company identity signals from crawled domains
//!
//! This crate crawls a list of company domains, extracts phone numbers,
//! social profiles and contact pages from their HTML, and writes one
//! document per domain into a searchable store. The stored documents can
//! then be looked up by company name, website, phone number or facebook
//! profile.

pub mod api;
pub mod config;
pub mod crawler;
pub mod enrich;
pub mod extract;
pub mod fetch;
pub mod input;
pub mod lookup;
pub mod output;
pub mod queue;
pub mod state;
pub mod storage;
pub mod url;
pub mod worker;

use thiserror::Error;

/// Main error type for Company Finder operations
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Task queue error: {0}")]
    Queue(#[from] queue::QueueError),

    #[error("Failed to read CSV input {path}: {message}")]
    Input { path: String, message: String },

    #[error("Extraction failed for {url}: {message}")]
    Extraction { url: String, message: String },

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::CrawlState,
        to: state::CrawlState,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Empty target")]
    Empty,
}

/// Result type alias for Company Finder operations
pub type Result<T> = std::result::Result<T, FinderError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlOutcome, CrawlResult, CrawlUnit};
pub use extract::{extract, ExtractedEntity, Platform};
pub use fetch::{FetchFailure, Fetcher};
pub use lookup::{lookup, CompanyMatch, LookupError, LookupQuery};
pub use state::CrawlState;
pub use storage::{SqliteStore, Store};
pub use url::{normalize_target, Target};
