//! Run-level result types shared between the pipeline and its callers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Row counts for one entity before and after cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub before: usize,
    pub after: usize,
}

impl EntityCounts {
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Rows removed by cleaning. Cleaning never adds rows.
    pub fn dropped(&self) -> usize {
        self.before.saturating_sub(self.after)
    }
}

/// Scalar summary metrics reported alongside the tabular outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_revenue: f64,
    /// Total revenue over the number of revenue-bearing transactions; 0 when
    /// there are none.
    pub avg_order_value: f64,
}

/// Machine-readable summary of a full pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub output_dir: PathBuf,
    pub customers: EntityCounts,
    pub products: EntityCounts,
    pub transactions: EntityCounts,
    pub kpis: Kpis,
}
