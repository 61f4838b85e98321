use serde::Deserialize;

/// Browser user agents rotated across requests when none are configured
pub const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0.3 Safari/605.1.15",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:88.0) Gecko/20100101 Firefox/88.0",
];

/// Main configuration structure for Company Finder
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub workers: WorkersConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub seeds: SeedsConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Page fetching configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Timeout applied to each fetch strategy (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pool of User-Agent values, one picked at random per request
    #[serde(rename = "user-agents", default = "default_user_agents")]
    pub user_agents: Vec<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agents: default_user_agents(),
        }
    }
}

/// Worker pool configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WorkersConfig {
    /// Number of concurrent workers pulling crawl tasks
    #[serde(default = "default_worker_count")]
    pub count: usize,
}

impl Default for WorkersConfig {
    fn default() -> Self {
        Self {
            count: default_worker_count(),
        }
    }
}

/// Document store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

/// Seed input configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SeedsConfig {
    /// CSV file listing the domains to crawl
    #[serde(rename = "csv-path", default = "default_seeds_path")]
    pub csv_path: String,

    /// Column holding the domain
    #[serde(rename = "domain-column", default = "default_domain_column")]
    pub domain_column: String,
}

impl Default for SeedsConfig {
    fn default() -> Self {
        Self {
            csv_path: default_seeds_path(),
            domain_column: default_domain_column(),
        }
    }
}

/// Lookup API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(rename = "bind-address", default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agents() -> Vec<String> {
    DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect()
}

fn default_worker_count() -> usize {
    4
}

fn default_seeds_path() -> String {
    "./assets/csvs/sample-websites.csv".to_string()
}

fn default_domain_column() -> String {
    "domain".to_string()
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}
