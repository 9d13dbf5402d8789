//! CSV readers for the raw tables.
//!
//! Every cell is read as an optional string; empty cells become `None` and
//! nothing is parsed here. Type repair is the cleaners' job.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use retail_model::{RawCustomer, RawProduct, RawTransaction};

use crate::discovery::InputPaths;
use crate::error::IngestError;

/// The three raw tables loaded fully into memory.
#[derive(Debug, Clone)]
pub struct RawTables {
    pub customers: Vec<RawCustomer>,
    pub products: Vec<RawProduct>,
    pub transactions: Vec<RawTransaction>,
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, IngestError> {
    let read_err = |source: csv::Error| IngestError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(read_err)?;
    // A UTF-8 BOM survives header trimming; strip it before serde matches
    // fields by header name.
    let headers = reader.headers().map_err(read_err)?.clone();
    let cleaned: csv::StringRecord = headers
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim())
        .collect();
    reader.set_headers(cleaned);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result.map_err(read_err)?);
    }
    Ok(rows)
}

pub fn read_customers(path: &Path) -> Result<Vec<RawCustomer>, IngestError> {
    read_table(path)
}

pub fn read_products(path: &Path) -> Result<Vec<RawProduct>, IngestError> {
    read_table(path)
}

pub fn read_transactions(path: &Path) -> Result<Vec<RawTransaction>, IngestError> {
    read_table(path)
}

/// Loads all three raw tables from their discovered paths.
pub fn load_raw_tables(paths: &InputPaths) -> Result<RawTables, IngestError> {
    let customers = read_customers(&paths.customers)?;
    let products = read_products(&paths.products)?;
    let transactions = read_transactions(&paths.transactions)?;
    info!(
        customers = customers.len(),
        products = products.len(),
        transactions = transactions.len(),
        "loaded raw tables"
    );
    Ok(RawTables {
        customers,
        products,
        transactions,
    })
}
