//! Company lookup over stored documents
//!
//! A [`LookupQuery`] is validated and normalized, the store returns a coarse
//! candidate set, and each candidate is scored clause by clause. The best
//! non-zero score wins; ties go to the lexically smallest URL.

mod query;
mod score;

pub use query::{tokenize, LookupQuery, NormalizedQuery};
pub use score::{
    auto_fuzziness, score, FACEBOOK_WEIGHT, FULL_TEXT_NAME_WEIGHT, FUZZY_NAME_WEIGHT,
    PHONE_WEIGHT, WEBSITE_WEIGHT,
};

use crate::extract::SocialLinks;
use crate::storage::{CompanyRecord, StorageError, Store};
use serde::Serialize;
use thiserror::Error;

/// Errors returned by a lookup
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
        input: String,
    },

    #[error("Company not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// The best matching document, as returned to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyMatch {
    pub url: String,
    pub legal_name: Option<String>,
    pub commercial_names: Option<Vec<String>>,
    pub all_company_names: Option<Vec<String>>,
    pub phone_numbers: Vec<String>,
    pub social_links: SocialLinks,
    pub score: f64,
}

impl CompanyMatch {
    fn new(record: CompanyRecord, score: f64) -> Self {
        Self {
            url: record.url,
            legal_name: record.legal_name,
            commercial_names: record.commercial_names,
            all_company_names: record.all_company_names,
            phone_numbers: record.phone_numbers,
            social_links: record.social_links,
            score,
        }
    }
}

/// Finds the highest-scoring non-error document for a query
///
/// # Arguments
///
/// * `store` - The document store to search
/// * `query` - Caller-supplied lookup fields
///
/// # Returns
///
/// * `Ok(CompanyMatch)` - The best match
/// * `Err(LookupError::InvalidInput)` - A supplied field is malformed
/// * `Err(LookupError::NotFound)` - No document matched any clause, including
///   when the query supplies no fields
/// * `Err(LookupError::Storage)` - The store could not be searched
pub fn lookup(store: &dyn Store, query: &LookupQuery) -> Result<CompanyMatch, LookupError> {
    let normalized = query.normalize()?;
    if normalized.is_empty() {
        // Nothing to match on, so nothing can match
        return Err(LookupError::NotFound);
    }

    let candidates = store.search(&normalized.to_filter())?;
    tracing::debug!("Lookup {:?}: {} candidates", normalized, candidates.len());

    let mut best: Option<(f64, CompanyRecord)> = None;
    for record in candidates {
        if record.is_error() {
            continue;
        }

        let s = score(&normalized, &record);
        if s <= 0.0 {
            continue;
        }

        let better = match &best {
            None => true,
            Some((best_score, best_record)) => {
                s > *best_score || (s == *best_score && record.url < best_record.url)
            }
        };
        if better {
            best = Some((s, record));
        }
    }

    best.map(|(s, record)| CompanyMatch::new(record, s))
        .ok_or(LookupError::NotFound)
}
