//! URL handling module for Company Finder
//!
//! This module turns seed domains into fetchable targets, resolves in-page
//! links, and normalizes website input for lookups.

mod normalize;

pub use normalize::{is_fetchable, normalize_target, normalize_website, resolve_link};

use std::fmt;

/// A seed domain normalized to an absolute URL
///
/// The string form is the document key in the store, so it is kept exactly
/// as normalized (no trailing slash is added by re-serialization).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Target(String);

impl Target {
    pub(crate) fn new_unchecked(url: String) -> Self {
        Self(url)
    }

    /// Returns the target URL
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the target, returning the URL
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Target {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
