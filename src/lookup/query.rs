use crate::extract::normalize_phone;
use crate::lookup::LookupError;
use crate::storage::DocumentFilter;
use crate::url::normalize_website;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use url::Url;

const FACEBOOK_PROFILE_PATTERN: &str = r"^facebook\.com/[a-zA-Z0-9.-]+$";

pub(crate) const FACEBOOK_PROFILE_MESSAGE: &str =
    "Invalid Facebook profile URL, should be in the format \"facebook.com/username\"";

fn facebook_profile_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(FACEBOOK_PROFILE_PATTERN).expect("facebook profile pattern is valid")
    })
}

/// A company lookup as supplied by a caller
///
/// Every field is optional, but at least one must be present. Blank values
/// count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LookupQuery {
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub phone_number: Option<String>,
    pub facebook_profile: Option<String>,
}

/// A validated query with every field in its matching form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Name tokens, lower-cased
    pub name_tokens: Vec<String>,

    /// Lower-cased `http://` URL without trailing slash
    pub website: Option<String>,

    /// Digits and `+` only
    pub phone_number: Option<String>,

    /// Lower-cased `facebook.com/<handle>`
    pub facebook_profile: Option<String>,
}

impl LookupQuery {
    /// Validates and normalizes the query
    ///
    /// # Returns
    ///
    /// * `Ok(NormalizedQuery)` - Every supplied field in matching form; may be
    ///   empty when nothing usable was supplied
    /// * `Err(LookupError::InvalidInput)` - A malformed field
    pub fn normalize(&self) -> Result<NormalizedQuery, LookupError> {
        let mut normalized = NormalizedQuery::default();

        if let Some(profile) = present(&self.facebook_profile) {
            if !facebook_profile_regex().is_match(profile) {
                return Err(LookupError::InvalidInput {
                    field: "facebook_profile",
                    message: FACEBOOK_PROFILE_MESSAGE.to_string(),
                    input: profile.to_string(),
                });
            }
            normalized.facebook_profile = Some(profile.to_lowercase());
        }

        if let Some(website) = present(&self.website) {
            let website_url = normalize_website(website);
            let valid = Url::parse(&website_url)
                .map(|u| u.host_str().is_some())
                .unwrap_or(false);
            if !valid {
                return Err(LookupError::InvalidInput {
                    field: "website",
                    message: "Input should be a valid URL".to_string(),
                    input: website.to_string(),
                });
            }
            normalized.website = Some(website_url);
        }

        // A number with no digits left after cleaning is ignored
        if let Some(phone) = present(&self.phone_number) {
            let phone = normalize_phone(phone);
            if !phone.is_empty() {
                normalized.phone_number = Some(phone);
            }
        }

        if let Some(name) = present(&self.company_name) {
            normalized.name_tokens = tokenize(name);
        }

        Ok(normalized)
    }
}

impl NormalizedQuery {
    pub fn is_empty(&self) -> bool {
        self.name_tokens.is_empty()
            && self.website.is_none()
            && self.phone_number.is_none()
            && self.facebook_profile.is_none()
    }

    /// The coarse filter handed to the store
    pub fn to_filter(&self) -> DocumentFilter {
        DocumentFilter {
            website: self.website.clone(),
            phone_number: self.phone_number.clone(),
            company_name: if self.name_tokens.is_empty() {
                None
            } else {
                Some(self.name_tokens.join(" "))
            },
            facebook_profile: self.facebook_profile.clone(),
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Splits a name into lower-cased alphanumeric tokens
pub fn tokenize(name: &str) -> Vec<String> {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
