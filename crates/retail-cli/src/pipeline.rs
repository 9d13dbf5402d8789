//! The batch pipeline with explicit stages.
//!
//! Stages run in order, each consuming the previous stage's output:
//! 1. **Ingest**: discover and load the three raw CSV tables
//! 2. **Clean**: Customer -> Product -> Transaction (transactions need the
//!    cleaned customer ids for the referential filter)
//! 3. **Aggregate**: derive the five analytics tables and KPIs
//! 4. **Output**: write cleaned tables, analytics tables, and the optional
//!    JSON run summary
//!
//! A fatal ingest error aborts before any output is written; there is no
//! partial-success output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use retail_analytics::{Analytics, aggregate};
use retail_clean::{clean_customers, clean_products, clean_transactions};
use retail_ingest::{discover_inputs, load_raw_tables};
use retail_model::{Customer, EntityCounts, PipelineSummary, Product, Transaction};
use retail_report::{AnalyticsPaths, CleanedPaths, write_analytics, write_cleaned};

/// The three cleaned tables.
#[derive(Debug, Clone)]
pub struct CleanedTables {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub transactions: Vec<Transaction>,
}

/// Output stage configuration.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub summary_json: Option<PathBuf>,
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub summary: PipelineSummary,
    pub cleaned: CleanedTables,
    pub analytics: Analytics,
    /// None on a dry run.
    pub cleaned_paths: Option<CleanedPaths>,
    /// None on a dry run.
    pub analytics_paths: Option<AnalyticsPaths>,
}

/// Runs the full pipeline over `data_dir`.
pub fn run_pipeline(data_dir: &Path, output: &OutputConfig) -> Result<RunOutcome> {
    let raw = {
        let span = info_span!("ingest");
        let _guard = span.enter();
        let paths = discover_inputs(data_dir)?;
        load_raw_tables(&paths)?
    };

    let (cleaned, counts) = {
        let span = info_span!("clean");
        let _guard = span.enter();
        let customers = clean_customers(&raw.customers);
        let products = clean_products(&raw.products);
        let transactions = clean_transactions(&raw.transactions, &customers);
        let counts = (
            EntityCounts::new(raw.customers.len(), customers.len()),
            EntityCounts::new(raw.products.len(), products.len()),
            EntityCounts::new(raw.transactions.len(), transactions.len()),
        );
        info!(
            customers = customers.len(),
            products = products.len(),
            transactions = transactions.len(),
            "cleaned tables"
        );
        (
            CleanedTables {
                customers,
                products,
                transactions,
            },
            counts,
        )
    };

    let analytics = {
        let span = info_span!("aggregate");
        let _guard = span.enter();
        aggregate(&cleaned.customers, &cleaned.products, &cleaned.transactions)
    };

    let summary = PipelineSummary {
        output_dir: output.output_dir.clone(),
        customers: counts.0,
        products: counts.1,
        transactions: counts.2,
        kpis: analytics.kpis,
    };

    let (cleaned_paths, analytics_paths) = if output.dry_run {
        info!("dry run: skipping output stage");
        (None, None)
    } else {
        let span = info_span!("output");
        let _guard = span.enter();
        let cleaned_paths = write_cleaned(
            &output.output_dir,
            &cleaned.customers,
            &cleaned.products,
            &cleaned.transactions,
        )?;
        let analytics_paths = write_analytics(&output.output_dir, &analytics)?;
        if let Some(path) = &output.summary_json {
            write_summary_json(path, &summary)?;
        }
        (Some(cleaned_paths), Some(analytics_paths))
    };

    Ok(RunOutcome {
        summary,
        cleaned,
        analytics,
        cleaned_paths,
        analytics_paths,
    })
}

fn write_summary_json(path: &Path, summary: &PipelineSummary) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let file = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(file, summary)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
