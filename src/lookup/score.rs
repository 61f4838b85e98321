//! Clause matching and scoring of candidate documents

use crate::lookup::query::{tokenize, NormalizedQuery};
use crate::storage::CompanyRecord;
use crate::url::normalize_website;

pub const WEBSITE_WEIGHT: f64 = 3.0;
pub const PHONE_WEIGHT: f64 = 2.0;
pub const FACEBOOK_WEIGHT: f64 = 2.0;
pub const FULL_TEXT_NAME_WEIGHT: f64 = 2.0;
pub const FUZZY_NAME_WEIGHT: f64 = 1.0;

/// Edit distance a token of this length may be off by
pub fn auto_fuzziness(token: &str) -> usize {
    match token.chars().count() {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    }
}

/// Scores a document against the query; zero means no clause matched
pub fn score(query: &NormalizedQuery, record: &CompanyRecord) -> f64 {
    let mut total = 0.0;

    if let Some(website) = &query.website {
        if normalize_website(&record.url) == *website {
            total += WEBSITE_WEIGHT;
        }
    }

    if let Some(phone) = &query.phone_number {
        if record.phone_numbers.iter().any(|p| p.contains(phone.as_str())) {
            total += PHONE_WEIGHT;
        }
    }

    if let Some(profile) = &query.facebook_profile {
        if record
            .social_links
            .facebook
            .iter()
            .any(|link| link.to_lowercase() == *profile)
        {
            total += FACEBOOK_WEIGHT;
        }
    }

    if !query.name_tokens.is_empty() {
        let names: Vec<Vec<String>> = record
            .all_company_names
            .iter()
            .flatten()
            .map(|name| tokenize(name))
            .collect();

        if full_text_match(&query.name_tokens, &names) {
            total += FULL_TEXT_NAME_WEIGHT;
        }
        if let Some(similarity) = fuzzy_similarity(&query.name_tokens, &names) {
            total += FUZZY_NAME_WEIGHT * similarity;
        }
    }

    total
}

/// True if a single name contains every query token
fn full_text_match(query_tokens: &[String], names: &[Vec<String>]) -> bool {
    names
        .iter()
        .any(|name| query_tokens.iter().all(|token| name.contains(token)))
}

/// Best similarity among token pairs within the fuzziness limit
fn fuzzy_similarity(query_tokens: &[String], names: &[Vec<String>]) -> Option<f64> {
    let mut best: Option<f64> = None;

    for token in query_tokens {
        let limit = auto_fuzziness(token);
        for name_token in names.iter().flatten() {
            if strsim::levenshtein(token, name_token) > limit {
                continue;
            }
            let similarity = strsim::normalized_levenshtein(token, name_token);
            if best.map_or(true, |b| similarity > b) {
                best = Some(similarity);
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{Platform, SocialLinks};

    fn record(url: &str, names: &[&str]) -> CompanyRecord {
        CompanyRecord {
            url: url.to_string(),
            phone_numbers: vec!["5551234567".to_string()],
            social_links: SocialLinks::from_pairs([(Platform::Facebook, "facebook.com/acme-inc")]),
            contact_page: None,
            error: None,
            legal_name: None,
            commercial_names: None,
            all_company_names: if names.is_empty() {
                None
            } else {
                Some(names.iter().map(|n| n.to_string()).collect())
            },
            updated_at: String::new(),
        }
    }

    fn name_query(name: &str) -> NormalizedQuery {
        NormalizedQuery {
            name_tokens: tokenize(name),
            ..Default::default()
        }
    }

    #[test]
    fn test_auto_fuzziness() {
        assert_eq!(auto_fuzziness("ab"), 0);
        assert_eq!(auto_fuzziness("abc"), 1);
        assert_eq!(auto_fuzziness("abcde"), 1);
        assert_eq!(auto_fuzziness("abcdef"), 2);
    }

    #[test]
    fn test_website_match() {
        let query = NormalizedQuery {
            website: Some("http://acme.com".to_string()),
            ..Default::default()
        };
        assert_eq!(score(&query, &record("https://ACME.com/", &[])), WEBSITE_WEIGHT);
        assert_eq!(score(&query, &record("http://acme.org", &[])), 0.0);
    }

    #[test]
    fn test_phone_contains_match() {
        let query = NormalizedQuery {
            phone_number: Some("1234567".to_string()),
            ..Default::default()
        };
        assert_eq!(score(&query, &record("http://acme.com", &[])), PHONE_WEIGHT);
    }

    #[test]
    fn test_facebook_match() {
        let query = NormalizedQuery {
            facebook_profile: Some("facebook.com/acme-inc".to_string()),
            ..Default::default()
        };
        assert_eq!(score(&query, &record("http://acme.com", &[])), FACEBOOK_WEIGHT);
    }

    #[test]
    fn test_exact_name_scores_full_text_and_fuzzy() {
        let s = score(&name_query("Acme Corp"), &record("http://acme.com", &["Acme Corp"]));
        assert_eq!(s, FULL_TEXT_NAME_WEIGHT + FUZZY_NAME_WEIGHT);
    }

    #[test]
    fn test_misspelled_name_scores_fuzzy_only() {
        let s = score(&name_query("Acne"), &record("http://acme.com", &["Acme Corp"]));
        assert!(s > 0.0 && s < FUZZY_NAME_WEIGHT);
    }

    #[test]
    fn test_short_tokens_must_match_exactly() {
        let s = score(&name_query("ab"), &record("http://acme.com", &["ac"]));
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_full_text_requires_every_token_in_one_name() {
        let names = vec![tokenize("Acme"), tokenize("Globex Corp")];
        assert!(!full_text_match(&tokenize("acme corp"), &names));
        assert!(full_text_match(&tokenize("globex corp"), &names));
    }

    #[test]
    fn test_unenriched_document_never_matches_name() {
        assert_eq!(score(&name_query("Acme"), &record("http://acme.com", &[])), 0.0);
    }
}
