//! State module for tracking a crawl unit's progress
//!
//! - `CrawlState`: the stages one target moves through, from the primary
//!   fetch to a final success or failure record

mod crawl_state;

pub use crawl_state::CrawlState;
