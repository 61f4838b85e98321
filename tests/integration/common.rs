use company_finder::config::{load_config, Config};
use std::path::Path;
use tempfile::TempDir;

/// Writes a config file into `dir` and loads it
pub fn test_config(dir: &TempDir, workers: usize) -> Config {
    let db_path = dir.path().join("documents.db");
    let seeds_path = dir.path().join("seeds.csv");
    let config_path = dir.path().join("config.toml");

    std::fs::write(
        &config_path,
        format!(
            r#"
[fetcher]
timeout-secs = 1

[workers]
count = {}

[store]
database-path = "{}"

[seeds]
csv-path = "{}"
"#,
            workers,
            db_path.display(),
            seeds_path.display()
        ),
    )
    .expect("Failed to write config");

    load_config(&config_path).expect("Failed to load config")
}

/// Writes a seed CSV with one domain per row
pub fn write_seeds(path: &Path, domains: &[&str]) {
    let mut content = String::from("domain\n");
    for domain in domains {
        content.push_str(domain);
        content.push('\n');
    }
    std::fs::write(path, content).expect("Failed to write seeds");
}

pub fn html_page(body: &str) -> String {
    format!("<html><head><title>Test</title></head><body>{}</body></html>", body)
}
