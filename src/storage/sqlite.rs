//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the Store trait.

use crate::crawler::{CrawlOutcome, CrawlResult};
use crate::extract::SocialLinks;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{Store, StorageError, StorageResult};
use crate::storage::{CompanyNames, CompanyRecord, DocumentFilter};
use crate::FinderError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const SELECT_COLUMNS: &str = "SELECT url, phone_numbers, social_links, contact_page, error,
    legal_name, commercial_names, all_company_names, updated_at FROM documents";

/// SQLite document store
///
/// The connection sits behind a mutex; each call is one short statement, so
/// workers writing different URLs only ever wait for each other briefly.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

/// A document row before its JSON columns are decoded
struct RawDocument {
    url: String,
    phone_numbers: Option<String>,
    social_links: Option<String>,
    contact_page: Option<String>,
    error: Option<String>,
    legal_name: Option<String>,
    commercial_names: Option<String>,
    all_company_names: Option<String>,
    updated_at: String,
}

impl RawDocument {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            url: row.get(0)?,
            phone_numbers: row.get(1)?,
            social_links: row.get(2)?,
            contact_page: row.get(3)?,
            error: row.get(4)?,
            legal_name: row.get(5)?,
            commercial_names: row.get(6)?,
            all_company_names: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }

    fn into_record(self) -> StorageResult<CompanyRecord> {
        let phone_numbers = match self.phone_numbers {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        let social_links = match self.social_links {
            Some(json) => serde_json::from_str(&json)?,
            None => SocialLinks::default(),
        };
        let commercial_names = self
            .commercial_names
            .map(|json| serde_json::from_str(&json))
            .transpose()?;
        let all_company_names = self
            .all_company_names
            .map(|json| serde_json::from_str(&json))
            .transpose()?;

        Ok(CompanyRecord {
            url: self.url,
            phone_numbers,
            social_links,
            contact_page: self.contact_page,
            error: self.error,
            legal_name: self.legal_name,
            commercial_names,
            all_company_names,
            updated_at: self.updated_at,
        })
    }
}

impl SqliteStore {
    /// Creates a new SqliteStore instance
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStore)` - Successfully opened/created database
    /// * `Err(FinderError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, FinderError> {
        let conn = Connection::open(path).map_err(StorageError::from)?;

        // Configure SQLite for concurrent readers and a single writer
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
            PRAGMA busy_timeout = 5000;
        ",
        )
        .map_err(StorageError::from)?;

        initialize_schema(&conn).map_err(StorageError::from)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Creates an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self, FinderError> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        initialize_schema(&conn).map_err(StorageError::from)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Database("connection mutex poisoned".to_string()))
    }

    fn query_records(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> StorageResult<Vec<CompanyRecord>> {
        let mut stmt = conn.prepare(sql)?;
        let raw = stmt
            .query_map(params, RawDocument::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        raw.into_iter().map(RawDocument::into_record).collect()
    }
}

impl Store for SqliteStore {
    // ===== Crawl Results =====

    fn upsert(&self, result: &CrawlResult) -> StorageResult<()> {
        let (phone_numbers, social_links, contact_page, error) = match &result.outcome {
            CrawlOutcome::Success(signals) => (
                Some(serde_json::to_string(&signals.phone_numbers)?),
                Some(serde_json::to_string(&signals.social_links)?),
                signals.contact_page.clone(),
                None,
            ),
            CrawlOutcome::Failure { error } => (None, None, None, Some(error.clone())),
        };

        let now = Utc::now().to_rfc3339();
        self.conn()?.execute(
            "INSERT INTO documents (url, phone_numbers, social_links, contact_page, error, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(url) DO UPDATE SET
                phone_numbers = excluded.phone_numbers,
                social_links = excluded.social_links,
                contact_page = excluded.contact_page,
                error = excluded.error,
                updated_at = excluded.updated_at",
            params![result.url, phone_numbers, social_links, contact_page, error, now],
        )?;

        Ok(())
    }

    fn get(&self, url: &str) -> StorageResult<Option<CompanyRecord>> {
        let conn = self.conn()?;
        let raw = conn
            .query_row(
                &format!("{} WHERE url = ?1", SELECT_COLUMNS),
                params![url],
                RawDocument::from_row,
            )
            .optional()?;

        raw.map(RawDocument::into_record).transpose()
    }

    fn clear(&self) -> StorageResult<u64> {
        let removed = self.conn()?.execute("DELETE FROM documents", [])?;
        Ok(removed as u64)
    }

    // ===== Enrichment =====

    fn apply_company_names(&self, url: &str, names: &CompanyNames) -> StorageResult<bool> {
        let commercial_names = names
            .commercial_names
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let all_company_names = serde_json::to_string(&names.all_company_names)?;

        let updated = self.conn()?.execute(
            "UPDATE documents SET legal_name = ?1, commercial_names = ?2, all_company_names = ?3
             WHERE url = ?4",
            params![names.legal_name, commercial_names, all_company_names, url],
        )?;

        Ok(updated > 0)
    }

    // ===== Lookup =====

    fn search(&self, filter: &DocumentFilter) -> StorageResult<Vec<CompanyRecord>> {
        if filter.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.conn()?;
        let sql = format!(
            "{} WHERE error IS NULL AND (
                (?1 IS NOT NULL AND lower(url) LIKE '%' || ?1 || '%')
                OR (?2 IS NOT NULL AND phone_numbers LIKE '%' || ?2 || '%')
                OR (?3 IS NOT NULL AND all_company_names IS NOT NULL)
                OR (?4 IS NOT NULL AND lower(social_links) LIKE '%' || ?4 || '%')
             ) ORDER BY url",
            SELECT_COLUMNS
        );

        Self::query_records(
            &conn,
            &sql,
            params![
                filter.website,
                filter.phone_number,
                filter.company_name,
                filter.facebook_profile
            ],
        )
    }

    // ===== Statistics =====

    fn count(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn()?
            .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn count_successful(&self) -> StorageResult<u64> {
        let count: i64 = self.conn()?.query_row(
            "SELECT COUNT(*) FROM documents WHERE error IS NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn successful_records(&self) -> StorageResult<Vec<CompanyRecord>> {
        let conn = self.conn()?;
        Self::query_records(
            &conn,
            &format!("{} WHERE error IS NULL ORDER BY url", SELECT_COLUMNS),
            [],
        )
    }
}
