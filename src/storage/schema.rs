//! Database schema definitions
//!
//! This module contains the SQL schema for the document store.

/// SQL schema for the database
///
/// List-valued fields (`phone_numbers`, `social_links`, the name lists) are
/// stored as JSON text.
pub const SCHEMA_SQL: &str = r#"
-- One document per crawled target
CREATE TABLE IF NOT EXISTS documents (
    url TEXT PRIMARY KEY,
    phone_numbers TEXT,
    social_links TEXT,
    contact_page TEXT,
    error TEXT,
    legal_name TEXT,
    commercial_names TEXT,
    all_company_names TEXT,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_documents_error ON documents(error);
"#;

/// Initializes the database schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
