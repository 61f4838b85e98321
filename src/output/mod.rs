//! Reporting on the contents of the document store

pub mod stats;

pub use stats::{load_statistics, print_statistics, CrawlStatistics};
