//! Console summary of a pipeline run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use retail_model::EntityCounts;

use crate::pipeline::RunOutcome;

pub fn print_summary(outcome: &RunOutcome) {
    if let Some(paths) = &outcome.cleaned_paths {
        if let Some(dir) = paths.customers.parent() {
            println!("Cleaned tables: {}", dir.display());
        }
    }
    if let Some(paths) = &outcome.analytics_paths {
        if let Some(dir) = paths.revenue_by_category.parent() {
            println!("Analytics tables: {}", dir.display());
        }
    }

    print_cleaning_table(outcome);
    print_kpis(outcome);
    print_top_customers(outcome);
    print_revenue_by_category(outcome);
    print_monthly_revenue(outcome);
    print_payment_share(outcome);
}

fn print_cleaning_table(outcome: &RunOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Before"),
        header_cell("After"),
        header_cell("Dropped"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let entities: [(&str, EntityCounts); 3] = [
        ("Customers", outcome.summary.customers),
        ("Products", outcome.summary.products),
        ("Transactions", outcome.summary.transactions),
    ];
    for (name, counts) in entities {
        table.add_row(vec![
            Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(counts.before),
            Cell::new(counts.after),
            count_cell(counts.dropped()),
        ]);
    }
    println!();
    println!("Cleaning:");
    println!("{table}");
}

fn print_kpis(outcome: &RunOutcome) {
    println!();
    println!("KPIs:");
    println!("  Total revenue:       {:.2}", outcome.summary.kpis.total_revenue);
    println!(
        "  Average order value: {:.2}",
        outcome.summary.kpis.avg_order_value
    );
}

fn print_top_customers(outcome: &RunOutcome) {
    if outcome.analytics.top_customers.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Customer"), header_cell("Revenue")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in &outcome.analytics.top_customers {
        table.add_row(vec![
            Cell::new(&row.customer_id),
            Cell::new(format!("{:.2}", row.revenue)),
        ]);
    }
    println!();
    println!("Top customers:");
    println!("{table}");
}

fn print_revenue_by_category(outcome: &RunOutcome) {
    if outcome.analytics.revenue_by_category.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Revenue")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in &outcome.analytics.revenue_by_category {
        table.add_row(vec![
            Cell::new(row.category.as_str()),
            Cell::new(format!("{:.2}", row.revenue)),
        ]);
    }
    println!();
    println!("Revenue by category:");
    println!("{table}");
}

fn print_monthly_revenue(outcome: &RunOutcome) {
    if outcome.analytics.monthly_revenue.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Month"), header_cell("Revenue")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in &outcome.analytics.monthly_revenue {
        table.add_row(vec![
            Cell::new(row.label()),
            Cell::new(format!("{:.2}", row.revenue)),
        ]);
    }
    println!();
    println!("Monthly revenue:");
    println!("{table}");
}

fn print_payment_share(outcome: &RunOutcome) {
    if outcome.analytics.payment_share.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Payment method"),
        header_cell("Revenue"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &outcome.analytics.payment_share {
        table.add_row(vec![
            Cell::new(row.payment_method.as_str()),
            Cell::new(format!("{:.2}", row.revenue)),
            Cell::new(format!("{:.1}%", row.share * 100.0)),
        ]);
    }
    println!();
    println!("Payment share:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize) -> Cell {
    if value > 0 {
        Cell::new(value).fg(Color::Yellow)
    } else {
        Cell::new(value).fg(Color::DarkGrey)
    }
}
