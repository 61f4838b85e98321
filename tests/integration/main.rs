//! Integration tests for Company Finder
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! crawl, enrichment and lookup cycle end-to-end.

mod common;
mod crawl_tests;
mod lookup_tests;
