//! Layering company names onto crawled documents

use crate::input::CompanyNameRow;
use crate::storage::Store;
use crate::url::normalize_target;
use crate::FinderError;

/// Outcome of an enrichment pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichReport {
    /// Documents that received names
    pub updated: usize,

    /// Domains with no crawled document (or an unparseable domain)
    pub missing: Vec<String>,
}

/// Applies company names to the documents of their domains
///
/// Each row's domain is normalized the same way seed domains are, so it
/// lands on the document the crawl wrote. Rows without a document are
/// reported, not fatal.
///
/// # Returns
///
/// * `Ok(EnrichReport)` - Counts of updated and missing documents
/// * `Err(FinderError)` - The store failed
pub fn enrich(store: &dyn Store, rows: &[CompanyNameRow]) -> Result<EnrichReport, FinderError> {
    let mut report = EnrichReport::default();

    for row in rows {
        let target = match normalize_target(&row.domain) {
            Ok(target) => target,
            Err(e) => {
                tracing::warn!("Skipping company names for '{}': {}", row.domain, e);
                report.missing.push(row.domain.clone());
                continue;
            }
        };

        let names = row.to_names();
        if store.apply_company_names(target.as_str(), &names)? {
            tracing::debug!("{}: {:?}", target, names.all_company_names);
            report.updated += 1;
        } else {
            tracing::warn!("No crawled document for {}", target);
            report.missing.push(target.into_string());
        }
    }

    tracing::info!(
        "Enrichment complete: {} updated, {} missing",
        report.updated,
        report.missing.len()
    );
    Ok(report)
}
