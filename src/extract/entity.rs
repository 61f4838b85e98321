use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Social platforms whose profile links are extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
}

impl Platform {
    /// Every supported platform, in document order
    pub const ALL: [Platform; 4] = [
        Platform::Facebook,
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Instagram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile links per platform, lower-cased and deduplicated
///
/// Every platform is always present so stored documents have a fixed shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: BTreeSet<String>,
    #[serde(default)]
    pub twitter: BTreeSet<String>,
    #[serde(default)]
    pub linkedin: BTreeSet<String>,
    #[serde(default)]
    pub instagram: BTreeSet<String>,
}

impl SocialLinks {
    /// Returns the links found for a platform
    pub fn get(&self, platform: Platform) -> &BTreeSet<String> {
        match platform {
            Platform::Facebook => &self.facebook,
            Platform::Twitter => &self.twitter,
            Platform::Linkedin => &self.linkedin,
            Platform::Instagram => &self.instagram,
        }
    }

    fn get_mut(&mut self, platform: Platform) -> &mut BTreeSet<String> {
        match platform {
            Platform::Facebook => &mut self.facebook,
            Platform::Twitter => &mut self.twitter,
            Platform::Linkedin => &mut self.linkedin,
            Platform::Instagram => &mut self.instagram,
        }
    }

    /// Builds a value from (platform, link) pairs, lower-casing each link
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Platform, S)>,
        S: AsRef<str>,
    {
        let mut links = Self::default();
        for (platform, link) in pairs {
            links.get_mut(platform).insert(link.as_ref().to_lowercase());
        }
        links
    }

    /// Per-platform union of two link sets
    pub fn union(&self, other: &SocialLinks) -> SocialLinks {
        let mut merged = self.clone();
        for platform in Platform::ALL {
            merged
                .get_mut(platform)
                .extend(other.get(platform).iter().cloned());
        }
        merged
    }

    /// Total number of links across all platforms
    pub fn total(&self) -> usize {
        Platform::ALL.iter().map(|p| self.get(*p).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Everything extracted from a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntity {
    /// The URL the HTML was fetched from
    pub source_url: String,

    /// Phone numbers, digits and leading plus only
    pub phone_numbers: BTreeSet<String>,

    /// Social profile links per platform
    pub social_links: SocialLinks,

    /// Absolute URL of the page's contact link, if any
    pub contact_page_url: Option<String>,
}

impl ExtractedEntity {
    /// An entity with no findings for the given URL
    pub fn empty(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            phone_numbers: BTreeSet::new(),
            social_links: SocialLinks::default(),
            contact_page_url: None,
        }
    }

    /// Returns true if nothing was found on the page
    pub fn is_empty(&self) -> bool {
        self.phone_numbers.is_empty()
            && self.social_links.is_empty()
            && self.contact_page_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_names() {
        let names: Vec<_> = Platform::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, vec!["facebook", "twitter", "linkedin", "instagram"]);
        assert_eq!(format!("{}", Platform::Linkedin), "linkedin");
    }

    #[test]
    fn test_from_pairs_lowercases_and_dedups() {
        let links = SocialLinks::from_pairs(vec![
            (Platform::Facebook, "facebook.com/Acme"),
            (Platform::Facebook, "FACEBOOK.com/acme"),
            (Platform::Twitter, "twitter.com/acme"),
        ]);

        assert_eq!(links.facebook.len(), 1);
        assert!(links.facebook.contains("facebook.com/acme"));
        assert_eq!(links.twitter.len(), 1);
        assert_eq!(links.total(), 2);
    }

    #[test]
    fn test_union_is_per_platform() {
        let a = SocialLinks::from_pairs(vec![(Platform::Facebook, "facebook.com/a")]);
        let b = SocialLinks::from_pairs(vec![
            (Platform::Facebook, "facebook.com/a"),
            (Platform::Instagram, "instagram.com/a"),
        ]);

        let merged = a.union(&b);
        assert_eq!(merged.facebook.len(), 1);
        assert_eq!(merged.instagram.len(), 1);
        assert!(merged.twitter.is_empty());

        // Inputs untouched
        assert!(a.instagram.is_empty());
    }

    #[test]
    fn test_serialized_shape_has_every_platform() {
        let json = serde_json::to_value(SocialLinks::default()).unwrap();
        for platform in Platform::ALL {
            assert!(json.get(platform.as_str()).is_some());
        }
    }

    #[test]
    fn test_empty_entity() {
        let entity = ExtractedEntity::empty("http://example.com");
        assert!(entity.is_empty());
        assert_eq!(entity.source_url, "http://example.com");
    }
}
