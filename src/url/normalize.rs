use crate::url::Target;
use crate::{UrlError, UrlResult};
use url::Url;

/// Normalizes a seed domain into a crawl target
///
/// A value without an `http://` or `https://` scheme gets `http://` prefixed;
/// anything else is kept verbatim (apart from surrounding whitespace) so the
/// target string stays stable as a store key.
///
/// # Examples
///
/// ```
/// use company_finder::url::normalize_target;
///
/// let target = normalize_target("example.com").unwrap();
/// assert_eq!(target.as_str(), "http://example.com");
///
/// let target = normalize_target("https://example.com").unwrap();
/// assert_eq!(target.as_str(), "https://example.com");
/// ```
pub fn normalize_target(domain: &str) -> UrlResult<Target> {
    let domain = domain.trim();
    if domain.is_empty() {
        return Err(UrlError::Empty);
    }

    let lowered = domain.to_ascii_lowercase();
    let url = if lowered.starts_with("http://") || lowered.starts_with("https://") {
        domain.to_string()
    } else {
        format!("http://{}", domain)
    };

    let parsed = Url::parse(&url).map_err(|e| UrlError::Parse(format!("{}: {}", url, e)))?;
    if parsed.host_str().is_none() {
        return Err(UrlError::Parse(format!("{}: missing host", url)));
    }

    Ok(Target::new_unchecked(url))
}

/// Normalizes website input from a lookup query
///
/// Stored documents are keyed by `http://` URLs, so a secure scheme is
/// forced down to `http://`, a bare domain gets the scheme prefixed, and the
/// result is lower-cased without a trailing slash.
pub fn normalize_website(website: &str) -> String {
    let website = website.trim().to_lowercase();

    let website = if let Some(rest) = website.strip_prefix("https://") {
        format!("http://{}", rest)
    } else if website.starts_with("http://") {
        website
    } else {
        format!("http://{}", website)
    };

    website.trim_end_matches('/').to_string()
}

/// Resolves an anchor href against the page it was found on
///
/// Every href that joins onto `base_url` resolves, whatever its scheme:
/// `mailto:` and `tel:` links come back unchanged and fragments stay
/// attached. Use [`is_fetchable`] before requesting the result.
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    base_url
        .join(href.trim())
        .ok()
        .map(|absolute_url| absolute_url.to_string())
}

/// Returns true if the URL can be requested over HTTP(S)
pub fn is_fetchable(url: &str) -> bool {
    Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_http_prefix() {
        let target = normalize_target("example.com").unwrap();
        assert_eq!(target.as_str(), "http://example.com");
    }

    #[test]
    fn test_existing_scheme_kept() {
        assert_eq!(
            normalize_target("https://example.com").unwrap().as_str(),
            "https://example.com"
        );
        assert_eq!(
            normalize_target("http://example.com/about").unwrap().as_str(),
            "http://example.com/about"
        );
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(
            normalize_target("  acme.io \n").unwrap().as_str(),
            "http://acme.io"
        );
    }

    #[test]
    fn test_domain_starting_with_http_is_prefixed() {
        assert_eq!(
            normalize_target("httpbin.org").unwrap().as_str(),
            "http://httpbin.org"
        );
    }

    #[test]
    fn test_empty_target_rejected() {
        assert!(matches!(normalize_target("   "), Err(UrlError::Empty)));
    }

    #[test]
    fn test_unparseable_target_rejected() {
        assert!(normalize_target("exa mple.com").is_err());
    }

    #[test]
    fn test_normalize_website_forces_http() {
        assert_eq!(normalize_website("https://Example.com/"), "http://example.com");
        assert_eq!(normalize_website("http://example.com"), "http://example.com");
        assert_eq!(normalize_website("example.com"), "http://example.com");
    }

    fn base() -> Url {
        Url::parse("http://example.com/about/team").unwrap()
    }

    #[test]
    fn test_resolve_relative_link() {
        assert_eq!(
            resolve_link("/contact", &base()),
            Some("http://example.com/contact".to_string())
        );
        assert_eq!(
            resolve_link("contact-us", &base()),
            Some("http://example.com/about/contact-us".to_string())
        );
    }

    #[test]
    fn test_resolve_absolute_link() {
        assert_eq!(
            resolve_link("https://other.com/Contact", &base()),
            Some("https://other.com/Contact".to_string())
        );
    }

    #[test]
    fn test_resolve_non_page_links() {
        assert_eq!(
            resolve_link("mailto:contact@example.com", &base()),
            Some("mailto:contact@example.com".to_string())
        );
        assert_eq!(
            resolve_link("tel:+15551234567", &base()),
            Some("tel:+15551234567".to_string())
        );
        assert_eq!(
            resolve_link("#contact", &base()),
            Some("http://example.com/about/team#contact".to_string())
        );
        assert_eq!(
            resolve_link("", &base()),
            Some("http://example.com/about/team".to_string())
        );
    }

    #[test]
    fn test_is_fetchable() {
        assert!(is_fetchable("http://example.com/contact"));
        assert!(is_fetchable("https://example.com/#contact-form"));
        assert!(!is_fetchable("mailto:contact@example.com"));
        assert!(!is_fetchable("tel:+15551234567"));
        assert!(!is_fetchable("javascript:void(0)"));
        assert!(!is_fetchable("ftp://example.com/contact"));
    }
}
