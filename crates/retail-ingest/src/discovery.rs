//! Input discovery for the three expected raw tables.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::IngestError;

pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";

/// Resolved locations of the three raw input files.
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub customers: PathBuf,
    pub products: PathBuf,
    pub transactions: PathBuf,
}

/// Locates the three expected input files under `dir`.
///
/// Every absent file is collected before failing, so the operator sees the
/// full list in one error rather than one file per run.
pub fn discover_inputs(dir: &Path) -> Result<InputPaths, IngestError> {
    let paths = InputPaths {
        customers: dir.join(CUSTOMERS_FILE),
        products: dir.join(PRODUCTS_FILE),
        transactions: dir.join(TRANSACTIONS_FILE),
    };
    let missing: Vec<String> = [&paths.customers, &paths.products, &paths.transactions]
        .into_iter()
        .filter(|path| !path.is_file())
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingInputs {
            dir: dir.to_path_buf(),
            missing,
        });
    }
    debug!(dir = %dir.display(), "discovered input files");
    Ok(paths)
}
