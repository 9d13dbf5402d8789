//! Read-only aggregation over the cleaned tables.
//!
//! Transactions join to products for the unit price; `amount` is
//! `quantity * price`. A transaction whose product is unknown, or whose
//! product has no known price, contributes nothing to any revenue figure and
//! does not count as an order. All outputs carry documented total orders so
//! identical input always yields identical tables.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use retail_model::{Category, Customer, Kpis, PaymentMethod, Product, Transaction};

/// Revenue grouped by product category, descending; ties by category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenueRow {
    pub category: Category,
    pub revenue: f64,
}

/// Revenue grouped by customer country, descending; ties by country name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRevenueRow {
    pub country: String,
    pub revenue: f64,
}

/// One of the top five customers by revenue; ties by customer id ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRevenueRow {
    pub customer_id: String,
    pub revenue: f64,
}

/// Revenue for one calendar month, chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenueRow {
    pub year: i32,
    pub month: u32,
    pub revenue: f64,
}

impl MonthlyRevenueRow {
    /// "YYYY-MM" label for display.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Revenue and fraction of total for one payment method, descending by
/// revenue; ties by method name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentShareRow {
    pub payment_method: PaymentMethod,
    pub revenue: f64,
    pub share: f64,
}

/// The five derived tables plus KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub revenue_by_category: Vec<CategoryRevenueRow>,
    pub revenue_by_country: Vec<CountryRevenueRow>,
    pub top_customers: Vec<CustomerRevenueRow>,
    pub monthly_revenue: Vec<MonthlyRevenueRow>,
    pub payment_share: Vec<PaymentShareRow>,
    pub kpis: Kpis,
}

const TOP_CUSTOMER_COUNT: usize = 5;

/// Aggregates the cleaned tables into the derived outputs.
pub fn aggregate(
    customers: &[Customer],
    products: &[Product],
    transactions: &[Transaction],
) -> Analytics {
    // First product/customer wins on duplicate ids, matching cleaner order.
    let mut product_by_id: HashMap<&str, &Product> = HashMap::with_capacity(products.len());
    for product in products {
        product_by_id.entry(product.product_id.as_str()).or_insert(product);
    }
    let mut country_by_customer: HashMap<&str, &str> = HashMap::with_capacity(customers.len());
    for customer in customers {
        country_by_customer
            .entry(customer.customer_id.as_str())
            .or_insert(customer.country.as_str());
    }

    let mut by_category: BTreeMap<Category, f64> = BTreeMap::new();
    let mut by_country: BTreeMap<String, f64> = BTreeMap::new();
    let mut by_customer: BTreeMap<String, f64> = BTreeMap::new();
    let mut by_month: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    let mut by_method: BTreeMap<PaymentMethod, f64> = BTreeMap::new();
    let mut total_revenue = 0.0;
    let mut order_count = 0usize;
    let mut excluded = 0usize;

    for tx in transactions {
        let amount = product_by_id
            .get(tx.product_id.as_str())
            .and_then(|product| product.price.map(|price| (product.category, price)));
        let Some((category, price)) = amount else {
            // No product match or no known price: zero contribution.
            excluded += 1;
            continue;
        };
        let amount = tx.quantity as f64 * price;
        total_revenue += amount;
        order_count += 1;

        *by_category.entry(category).or_default() += amount;
        if let Some(country) = country_by_customer.get(tx.customer_id.as_str()) {
            *by_country.entry((*country).to_string()).or_default() += amount;
        }
        *by_customer.entry(tx.customer_id.clone()).or_default() += amount;
        if let Some(date) = tx.transaction_date {
            *by_month.entry((date.year(), date.month())).or_default() += amount;
        }
        *by_method.entry(tx.payment_method).or_default() += amount;
    }
    if excluded > 0 {
        debug!(excluded, "transactions excluded from revenue (no priced product)");
    }

    let revenue_by_category = sort_descending(by_category)
        .into_iter()
        .map(|(category, revenue)| CategoryRevenueRow { category, revenue })
        .collect();
    let revenue_by_country = sort_descending(by_country)
        .into_iter()
        .map(|(country, revenue)| CountryRevenueRow { country, revenue })
        .collect();
    let mut top_customers: Vec<CustomerRevenueRow> = sort_descending(by_customer)
        .into_iter()
        .map(|(customer_id, revenue)| CustomerRevenueRow {
            customer_id,
            revenue,
        })
        .collect();
    top_customers.truncate(TOP_CUSTOMER_COUNT);
    let monthly_revenue = by_month
        .into_iter()
        .map(|((year, month), revenue)| MonthlyRevenueRow {
            year,
            month,
            revenue,
        })
        .collect();
    let payment_share = sort_descending(by_method)
        .into_iter()
        .map(|(payment_method, revenue)| PaymentShareRow {
            payment_method,
            revenue,
            share: if total_revenue > 0.0 {
                revenue / total_revenue
            } else {
                0.0
            },
        })
        .collect();

    Analytics {
        revenue_by_category,
        revenue_by_country,
        top_customers,
        monthly_revenue,
        payment_share,
        kpis: Kpis {
            total_revenue,
            avg_order_value: if order_count > 0 {
                total_revenue / order_count as f64
            } else {
                0.0
            },
        },
    }
}

/// Descending by revenue; the BTreeMap key order breaks ties ascending.
fn sort_descending<K: Ord>(map: BTreeMap<K, f64>) -> Vec<(K, f64)> {
    let mut rows: Vec<(K, f64)> = map.into_iter().collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}
