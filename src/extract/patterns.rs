//! Regex patterns for phone numbers and social profiles

use crate::extract::entity::{Platform, SocialLinks};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

// ASCII digits only; `\d` would also match digits normalize_phone drops
const PHONE_PATTERN: &str = r"\([0-9]{3}\) [0-9]{3}-[0-9]{4}";

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

fn social_regexes() -> &'static [(Platform, Regex)] {
    static RES: OnceLock<Vec<(Platform, Regex)>> = OnceLock::new();
    RES.get_or_init(|| {
        Platform::ALL
            .iter()
            .map(|platform| {
                let pattern = format!(r"{}\.com/[a-zA-Z0-9_.-]+", platform.as_str());
                let re = Regex::new(&pattern).expect("social pattern is valid");
                (*platform, re)
            })
            .collect()
    })
}

/// Strips everything except digits and `+` from a phone number
///
/// Idempotent: normalizing an already-normalized number returns it unchanged.
///
/// # Examples
///
/// ```
/// use company_finder::extract::normalize_phone;
///
/// assert_eq!(normalize_phone("(555) 123-4567"), "5551234567");
/// assert_eq!(normalize_phone("5551234567"), "5551234567");
/// ```
pub fn normalize_phone(number: &str) -> String {
    number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Finds every `(NNN) NNN-NNNN` number in the text, normalized and deduplicated
pub fn find_phone_numbers(text: &str) -> BTreeSet<String> {
    let raw: BTreeSet<&str> = phone_regex().find_iter(text).map(|m| m.as_str()).collect();
    raw.into_iter()
        .map(normalize_phone)
        .filter(|number| !number.is_empty())
        .collect()
}

/// Finds profile links for every platform, lower-cased and deduplicated
pub fn find_social_links(text: &str) -> SocialLinks {
    SocialLinks::from_pairs(social_regexes().iter().flat_map(|(platform, re)| {
        re.find_iter(text).map(move |m| (*platform, m.as_str()))
    }))
}
