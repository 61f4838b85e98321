use crate::input::input_error;
use crate::url::{normalize_target, Target};
use crate::FinderError;
use std::path::Path;

/// Loads seed targets from one column of a CSV file
///
/// Values are trimmed and blank cells skipped. A value that cannot be made
/// into a URL is logged and skipped so the other rows still get crawled.
/// Duplicates are kept; each row becomes one target.
///
/// # Arguments
///
/// * `path` - CSV file with a header row
/// * `column` - Name of the column holding domains
///
/// # Returns
///
/// * `Ok(Vec<Target>)` - Targets in file order
/// * `Err(FinderError)` - Unreadable file or missing column
pub fn load_seeds(path: &Path, column: &str) -> Result<Vec<Target>, FinderError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| input_error(path, e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| input_error(path, e.to_string()))?;
    let index = headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| input_error(path, format!("missing column '{}'", column)))?;

    let mut targets = Vec::new();
    let mut skipped = 0;
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| input_error(path, e.to_string()))?;
        let domain = match record.get(index).map(str::trim) {
            Some(domain) if !domain.is_empty() => domain,
            _ => continue,
        };

        match normalize_target(domain) {
            Ok(target) => targets.push(target),
            Err(e) => {
                // Header is line 1
                tracing::warn!("Skipping seed '{}' on line {}: {}", domain, row + 2, e);
                skipped += 1;
            }
        }
    }

    tracing::info!(
        "Loaded {} seed targets from {} ({} skipped)",
        targets.len(),
        path.display(),
        skipped
    );
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_seeds() {
        let file = csv_file("domain\nacme.com\n  https://globex.com \n\nacme.com\n");
        let targets = load_seeds(file.path(), "domain").unwrap();

        let urls: Vec<&str> = targets.iter().map(Target::as_str).collect();
        assert_eq!(urls, vec!["http://acme.com", "https://globex.com", "http://acme.com"]);
    }

    #[test]
    fn test_load_seeds_other_column() {
        let file = csv_file("name,site\nAcme,acme.com\nBlank,\n");
        let targets = load_seeds(file.path(), "site").unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].as_str(), "http://acme.com");
    }

    #[test]
    fn test_malformed_row_skipped() {
        let file = csv_file("domain\nacme.com\nbad domain.com\nglobex.com\n");
        let targets = load_seeds(file.path(), "domain").unwrap();

        let urls: Vec<&str> = targets.iter().map(Target::as_str).collect();
        assert_eq!(urls, vec!["http://acme.com", "http://globex.com"]);
    }

    #[test]
    fn test_missing_column() {
        let file = csv_file("name\nAcme\n");
        let err = load_seeds(file.path(), "domain").unwrap_err();
        assert!(matches!(err, FinderError::Input { .. }));
        assert!(err.to_string().contains("domain"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_seeds(Path::new("/nonexistent/seeds.csv"), "domain");
        assert!(matches!(result, Err(FinderError::Input { .. })));
    }
}
