//! CSV inputs: seed domains and company names

mod company_names;
mod seeds;

pub use company_names::{load_company_names, CompanyNameRow};
pub use seeds::load_seeds;

use crate::FinderError;
use std::path::Path;

fn input_error(path: &Path, message: impl Into<String>) -> FinderError {
    FinderError::Input {
        path: path.display().to_string(),
        message: message.into(),
    }
}
