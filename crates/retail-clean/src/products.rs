//! Product table cleaning: category normalization and price/stock repair.

use std::collections::BTreeMap;

use tracing::debug;

use retail_model::{Category, Product, RawProduct};

use crate::coerce::{clamp, coerce_integer, coerce_numeric};

const STOCK_MIN: i64 = 0;
const STOCK_MAX: i64 = 1000;

/// Cleans the product table. No rows are dropped.
///
/// Prices run in two passes: the first coerces every price (negatives count
/// as missing), the second imputes missing prices from a snapshot of the
/// per-category medians so imputation never feeds on its own output. When a
/// category has no known price the global median steps in; when nothing is
/// known anywhere the price stays unknown.
pub fn clean_products(raw: &[RawProduct]) -> Vec<Product> {
    let mut cleaned: Vec<Product> = raw.iter().map(clean_row).collect();

    let mut by_category: BTreeMap<Category, Vec<f64>> = BTreeMap::new();
    let mut all_known: Vec<f64> = Vec::new();
    for product in &cleaned {
        if let Some(price) = product.price {
            by_category.entry(product.category).or_default().push(price);
            all_known.push(price);
        }
    }
    let category_medians: BTreeMap<Category, f64> = by_category
        .into_iter()
        .filter_map(|(category, prices)| median(&prices).map(|m| (category, m)))
        .collect();
    let global_median = median(&all_known);

    let mut imputed = 0usize;
    for product in &mut cleaned {
        if product.price.is_none() {
            product.price = category_medians
                .get(&product.category)
                .copied()
                .or(global_median);
            if product.price.is_some() {
                imputed += 1;
            }
        }
    }
    if imputed > 0 {
        debug!(imputed, "imputed missing product prices from medians");
    }
    cleaned
}

fn clean_row(row: &RawProduct) -> Product {
    let price = coerce_numeric(row.price.as_deref()).filter(|p| *p >= 0.0);
    let stock = coerce_integer(row.stock.as_deref(), None).unwrap_or(0);
    Product {
        product_id: row.product_id.as_deref().unwrap_or_default().trim().to_string(),
        product_name: row
            .product_name
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
        category: Category::from_raw(row.category.as_deref()),
        price,
        stock: clamp(stock, STOCK_MIN, STOCK_MAX),
    }
}

/// Middle value of the sorted inputs; mean of the two middle values for an
/// even count. None for an empty slice.
fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
