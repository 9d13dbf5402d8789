//! End-to-end tests over the staged pipeline.

use std::fs;
use std::path::Path;

use retail_cli::pipeline::{OutputConfig, run_pipeline};
use retail_model::{Category, PaymentMethod};

fn write_fixture(dir: &Path) {
    fs::write(
        dir.join("customers.csv"),
        "customer_id,name,email,registration_date,country,age\n\
         1,Jane Doe,,2023-01-15,US,34\n\
         1,Jane Doe,,2023-01-15,US,34\n\
         2,Bob Ray,BOB@Example.com,2023-02-01,usa,25 years\n\
         3,Ann Lee,ann@x.com,2023-03-05,Canada,invalid\n",
    )
    .unwrap();
    fs::write(
        dir.join("products.csv"),
        "product_id,product_name,category,price,stock\n\
         P1, Lamp ,home,-5,20\n\
         P2,Desk,Home,100,2000\n\
         P3,Ball,sports,50,abc\n\
         P4,Pen,stationery,10,5\n",
    )
    .unwrap();
    fs::write(
        dir.join("transactions.csv"),
        "transaction_id,customer_id,product_id,quantity,transaction_date,payment_method\n\
         T1,1,P1,2,2024-03-15,credit card\n\
         T1,1,P1,9,2024-03-15,credit card\n\
         T2,2,P2,0,2025-06-01,paypal\n\
         T3,3,P3,two,bad-date,cash\n\
         T4,99,P1,1,2024-05-01,PayPal\n\
         T5,1,P9,1,2024-04-01,bank transfer\n",
    )
    .unwrap();
}

fn run_fixture(dry_run: bool) -> (tempfile::TempDir, retail_cli::pipeline::RunOutcome) {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let config = OutputConfig {
        output_dir: dir.path().join("output"),
        dry_run,
        summary_json: None,
    };
    let outcome = run_pipeline(dir.path(), &config).unwrap();
    (dir, outcome)
}

#[test]
fn counts_reflect_dedup_and_referential_filter() {
    let (_dir, outcome) = run_fixture(true);
    assert_eq!(outcome.summary.customers.before, 4);
    assert_eq!(outcome.summary.customers.after, 3);
    assert_eq!(outcome.summary.products.before, 4);
    assert_eq!(outcome.summary.products.after, 4);
    // One duplicate id and one unreferenced customer drop out.
    assert_eq!(outcome.summary.transactions.before, 6);
    assert_eq!(outcome.summary.transactions.after, 4);
}

#[test]
fn cleaned_tables_honor_repair_rules() {
    let (_dir, outcome) = run_fixture(true);

    let jane = &outcome.cleaned.customers[0];
    assert_eq!(jane.country, "United States");
    assert_eq!(jane.email, "janedoe.1@example.com");
    assert_eq!(jane.age, Some(34));
    let bob = &outcome.cleaned.customers[1];
    assert_eq!(bob.email, "bob@example.com");
    assert_eq!(bob.age, Some(25));
    assert_eq!(outcome.cleaned.customers[2].age, None);

    let lamp = &outcome.cleaned.products[0];
    assert_eq!(lamp.product_name, "Lamp");
    assert_eq!(lamp.category, Category::Home);
    // Negative price imputed from the Home median (the desk at 100).
    assert_eq!(lamp.price, Some(100.0));
    assert_eq!(outcome.cleaned.products[1].stock, 1000);
    assert_eq!(outcome.cleaned.products[3].category, Category::Other);

    let t2 = outcome
        .cleaned
        .transactions
        .iter()
        .find(|t| t.transaction_id == "T2")
        .unwrap();
    assert_eq!(t2.quantity, 1);
    assert_eq!(
        t2.transaction_date.map(|d| d.to_string()),
        Some("2024-12-31".to_string())
    );
    let t3 = outcome
        .cleaned
        .transactions
        .iter()
        .find(|t| t.transaction_id == "T3")
        .unwrap();
    assert_eq!(t3.transaction_date, None);
    assert_eq!(t3.payment_method, PaymentMethod::Other);
    assert!(
        outcome
            .cleaned
            .transactions
            .iter()
            .all(|t| t.transaction_id != "T4")
    );
}

#[test]
fn analytics_match_hand_computed_totals() {
    let (_dir, outcome) = run_fixture(true);
    // T1: 2 x 100 (P1, imputed), T2: 1 x 100 (P2), T3: 1 x 50 (P3).
    // T5 references an unknown product and contributes nothing.
    assert_eq!(outcome.analytics.kpis.total_revenue, 350.0);
    assert!((outcome.analytics.kpis.avg_order_value - 350.0 / 3.0).abs() < 1e-9);

    let categories: Vec<(Category, f64)> = outcome
        .analytics
        .revenue_by_category
        .iter()
        .map(|r| (r.category, r.revenue))
        .collect();
    assert_eq!(
        categories,
        vec![(Category::Home, 300.0), (Category::Sports, 50.0)]
    );

    let months: Vec<(i32, u32, f64)> = outcome
        .analytics
        .monthly_revenue
        .iter()
        .map(|r| (r.year, r.month, r.revenue))
        .collect();
    // T3 has no parseable date and is absent; T2's clamped date lands in
    // December 2024.
    assert_eq!(months, vec![(2024, 3, 200.0), (2024, 12, 100.0)]);

    let share_total: f64 = outcome.analytics.payment_share.iter().map(|r| r.share).sum();
    assert!((share_total - 1.0).abs() < 1e-6);
}

#[test]
fn output_stage_writes_all_files() {
    let (dir, outcome) = run_fixture(false);
    let out = dir.path().join("output");
    for name in [
        "cleaned/customers_clean.csv",
        "cleaned/products_clean.csv",
        "cleaned/transactions_clean.csv",
        "analytics/revenue_by_category.csv",
        "analytics/revenue_by_country.csv",
        "analytics/top_customers.csv",
        "analytics/monthly_revenue.csv",
        "analytics/payment_share.csv",
    ] {
        assert!(out.join(name).is_file(), "missing {name}");
    }
    assert!(outcome.cleaned_paths.is_some());

    let customers = fs::read_to_string(out.join("cleaned/customers_clean.csv")).unwrap();
    assert!(customers.contains("United States"));
}

#[test]
fn dry_run_writes_nothing() {
    let (dir, outcome) = run_fixture(true);
    assert!(!dir.path().join("output").exists());
    assert!(outcome.cleaned_paths.is_none());
    assert!(outcome.analytics_paths.is_none());
}

#[test]
fn missing_inputs_fail_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("customers.csv"),
        "customer_id,name,email,registration_date,country,age\n",
    )
    .unwrap();
    let config = OutputConfig {
        output_dir: dir.path().join("output"),
        dry_run: false,
        summary_json: None,
    };
    let error = run_pipeline(dir.path(), &config).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("products.csv"));
    assert!(message.contains("transactions.csv"));
    assert!(!dir.path().join("output").exists());
}

#[test]
fn summary_json_written_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let summary_path = dir.path().join("output/summary.json");
    let config = OutputConfig {
        output_dir: dir.path().join("output"),
        dry_run: false,
        summary_json: Some(summary_path.clone()),
    };
    run_pipeline(dir.path(), &config).unwrap();

    let summary: retail_model::PipelineSummary =
        serde_json::from_str(&fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(summary.transactions.after, 4);
    assert_eq!(summary.kpis.total_revenue, 350.0);
}
