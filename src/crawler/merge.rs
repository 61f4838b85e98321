use crate::crawler::result::CompanySignals;
use crate::extract::{normalize_phone, ExtractedEntity};
use std::collections::BTreeSet;

/// Merges primary-page and contact-page findings into new signals
///
/// Phone numbers are unioned and then normalized again, since contact-page
/// numbers may come from a source that did not normalize them. Social links
/// are unioned per platform. The contact page is always the primary page's
/// finding; the contact page's own contact link is discarded.
pub fn merge(primary: &ExtractedEntity, contact: Option<&ExtractedEntity>) -> CompanySignals {
    let mut phones: BTreeSet<&str> = primary.phone_numbers.iter().map(String::as_str).collect();
    let mut social_links = primary.social_links.clone();

    if let Some(contact) = contact {
        phones.extend(contact.phone_numbers.iter().map(String::as_str));
        social_links = social_links.union(&contact.social_links);
    }

    CompanySignals {
        phone_numbers: phones.into_iter().map(normalize_phone).collect(),
        social_links,
        contact_page: primary.contact_page_url.clone(),
    }
}
