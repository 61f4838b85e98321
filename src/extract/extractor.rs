use crate::extract::entity::ExtractedEntity;
use crate::extract::patterns::{find_phone_numbers, find_social_links};
use crate::url::resolve_link;
use scraper::{Html, Selector};
use url::Url;

/// Extracts phone numbers, social links and the contact page from a page
///
/// # Extraction Rules
///
/// - Phone numbers and social links are matched against the raw HTML, so
///   numbers inside attributes and scripts count as well
/// - The contact page is the **last** `<a href>` (document order) whose
///   resolved URL contains "contact", case-insensitively
/// - An unparseable `source_url` only disables contact-page resolution
///
/// # Example
///
/// ```
/// use company_finder::extract::extract;
///
/// let html = r#"<html><body>
///     <p>(555) 123-4567</p>
///     <a href="https://facebook.com/Acme">Facebook</a>
///     <a href="/contact">Contact</a>
/// </body></html>"#;
///
/// let entity = extract("http://example.com", html);
/// assert!(entity.phone_numbers.contains("5551234567"));
/// assert!(entity.social_links.facebook.contains("facebook.com/acme"));
/// assert_eq!(entity.contact_page_url.as_deref(), Some("http://example.com/contact"));
/// ```
pub fn extract(source_url: &str, html: &str) -> ExtractedEntity {
    let contact_page_url = match Url::parse(source_url) {
        Ok(base_url) => find_contact_page(html, &base_url),
        Err(e) => {
            tracing::debug!("Cannot resolve links against {}: {}", source_url, e);
            None
        }
    };

    ExtractedEntity {
        source_url: source_url.to_string(),
        phone_numbers: find_phone_numbers(html),
        social_links: find_social_links(html),
        contact_page_url,
    }
}

/// Finds the contact-page link in an HTML document
///
/// Every anchor is resolved against `base_url`; the last one containing
/// "contact" wins.
pub fn find_contact_page(html: &str, base_url: &Url) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").ok()?;

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, base_url))
        .filter(|link| link.to_lowercase().contains("contact"))
        .last()
}
