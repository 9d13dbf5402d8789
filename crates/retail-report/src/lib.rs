//! Output stage: cleaned tables and analytics tables as CSV files.
//!
//! File layout under the output directory:
//!
//! ```text
//! cleaned/customers_clean.csv
//! cleaned/products_clean.csv
//! cleaned/transactions_clean.csv
//! analytics/revenue_by_category.csv
//! analytics/revenue_by_country.csv
//! analytics/top_customers.csv
//! analytics/monthly_revenue.csv
//! analytics/payment_share.csv
//! ```
//!
//! Column order comes from the record structs and float formatting from
//! serde's shortest-roundtrip rendering, so identical input always produces
//! byte-identical files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use retail_analytics::Analytics;
use retail_model::{Customer, Product, Transaction};

/// Locations of the three cleaned table files.
#[derive(Debug, Clone)]
pub struct CleanedPaths {
    pub customers: PathBuf,
    pub products: PathBuf,
    pub transactions: PathBuf,
}

/// Locations of the five analytics table files.
#[derive(Debug, Clone)]
pub struct AnalyticsPaths {
    pub revenue_by_category: PathBuf,
    pub revenue_by_country: PathBuf,
    pub top_customers: PathBuf,
    pub monthly_revenue: PathBuf,
    pub payment_share: PathBuf,
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Writes the three cleaned tables under `<out_dir>/cleaned/`.
pub fn write_cleaned(
    out_dir: &Path,
    customers: &[Customer],
    products: &[Product],
    transactions: &[Transaction],
) -> Result<CleanedPaths> {
    let dir = out_dir.join("cleaned");
    std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let paths = CleanedPaths {
        customers: dir.join("customers_clean.csv"),
        products: dir.join("products_clean.csv"),
        transactions: dir.join("transactions_clean.csv"),
    };
    write_csv(&paths.customers, customers)?;
    write_csv(&paths.products, products)?;
    write_csv(&paths.transactions, transactions)?;
    info!(dir = %dir.display(), "wrote cleaned tables");
    Ok(paths)
}

/// Writes the five analytics tables under `<out_dir>/analytics/`.
pub fn write_analytics(out_dir: &Path, analytics: &Analytics) -> Result<AnalyticsPaths> {
    let dir = out_dir.join("analytics");
    std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let paths = AnalyticsPaths {
        revenue_by_category: dir.join("revenue_by_category.csv"),
        revenue_by_country: dir.join("revenue_by_country.csv"),
        top_customers: dir.join("top_customers.csv"),
        monthly_revenue: dir.join("monthly_revenue.csv"),
        payment_share: dir.join("payment_share.csv"),
    };
    write_csv(&paths.revenue_by_category, &analytics.revenue_by_category)?;
    write_csv(&paths.revenue_by_country, &analytics.revenue_by_country)?;
    write_csv(&paths.top_customers, &analytics.top_customers)?;
    write_csv(&paths.monthly_revenue, &analytics.monthly_revenue)?;
    write_csv(&paths.payment_share, &analytics.payment_share)?;
    info!(dir = %dir.display(), "wrote analytics tables");
    Ok(paths)
}
