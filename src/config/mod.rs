//! Configuration module for Company Finder
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use company_finder::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Workers: {}", config.workers.count);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ApiConfig, Config, FetcherConfig, SeedsConfig, StoreConfig, WorkersConfig,
    DEFAULT_USER_AGENTS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
