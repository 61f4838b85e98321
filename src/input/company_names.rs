use crate::input::input_error;
use crate::storage::CompanyNames;
use crate::FinderError;
use serde::Deserialize;
use std::path::Path;

const LIST_SEPARATOR: &str = " | ";

/// One row of the company names CSV
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyNameRow {
    pub domain: String,
    pub company_commercial_name: Option<String>,
    pub company_legal_name: Option<String>,
    pub company_all_available_names: Option<String>,
}

impl CompanyNameRow {
    /// Builds the names to store for this row
    ///
    /// `all_company_names` lists commercial names, then the legal name, then
    /// any remaining available names, keeping first occurrences only.
    pub fn to_names(&self) -> CompanyNames {
        let commercial_names = non_blank(&self.company_commercial_name).map(split_list);
        let legal_name = non_blank(&self.company_legal_name).map(str::to_string);
        let available = non_blank(&self.company_all_available_names)
            .map(split_list)
            .unwrap_or_default();

        let mut all_company_names: Vec<String> = Vec::new();
        let candidates = commercial_names
            .iter()
            .flatten()
            .chain(legal_name.iter())
            .chain(available.iter());
        for name in candidates {
            if !all_company_names.contains(name) {
                all_company_names.push(name.clone());
            }
        }

        CompanyNames {
            legal_name,
            commercial_names,
            all_company_names,
        }
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads the company names CSV
///
/// Expects the columns `domain`, `company_commercial_name`,
/// `company_legal_name` and `company_all_available_names`; empty cells are
/// read as absent. Rows with a blank domain are skipped.
pub fn load_company_names(path: &Path) -> Result<Vec<CompanyNameRow>, FinderError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| input_error(path, e.to_string()))?;

    let mut rows = Vec::new();
    for row in reader.deserialize::<CompanyNameRow>() {
        let row = row.map_err(|e| input_error(path, e.to_string()))?;
        if row.domain.trim().is_empty() {
            continue;
        }
        rows.push(row);
    }

    tracing::info!("Loaded {} company name rows from {}", rows.len(), path.display());
    Ok(rows)
}
