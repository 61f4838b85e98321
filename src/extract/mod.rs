//! Entity extraction from fetched HTML
//!
//! This module turns a page's HTML into an [`ExtractedEntity`]:
//! - Phone numbers in the `(NNN) NNN-NNNN` shape, normalized to digits
//! - Social profile links for the supported platforms
//! - A candidate contact-page URL
//!
//! Extraction does no I/O and never fails; a page without matches yields an
//! empty entity.

mod entity;
mod extractor;
mod patterns;

pub use entity::{ExtractedEntity, Platform, SocialLinks};
pub use extractor::{extract, find_contact_page};
pub use patterns::{find_phone_numbers, find_social_links, normalize_phone};
