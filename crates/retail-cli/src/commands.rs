use anyhow::Result;
use comfy_table::Table;
use tracing::info;

use crate::cli::RunArgs;
use crate::pipeline::{OutputConfig, RunOutcome, run_pipeline};
use crate::summary::{apply_table_style, header_cell};

pub fn run(args: &RunArgs) -> Result<RunOutcome> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.data_dir.join("output"));
    let config = OutputConfig {
        output_dir,
        dry_run: args.dry_run,
        summary_json: args.summary_json.clone(),
    };
    info!(data_dir = %args.data_dir.display(), "starting pipeline run");
    run_pipeline(&args.data_dir, &config)
}

/// Prints the expected input tables and their columns.
pub fn run_schema() {
    let tables: [(&str, &[&str]); 3] = [
        (
            "customers.csv",
            &[
                "customer_id",
                "name",
                "email",
                "registration_date",
                "country",
                "age",
            ],
        ),
        (
            "products.csv",
            &["product_id", "product_name", "category", "price", "stock"],
        ),
        (
            "transactions.csv",
            &[
                "transaction_id",
                "customer_id",
                "product_id",
                "quantity",
                "transaction_date",
                "payment_method",
            ],
        ),
    ];
    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Columns")]);
    apply_table_style(&mut table);
    for (file, columns) in tables {
        table.add_row(vec![file.to_string(), columns.join(", ")]);
    }
    println!("{table}");
}
