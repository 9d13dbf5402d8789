//! Customer table cleaning: exact-duplicate removal and column repair.

use std::collections::HashSet;

use tracing::debug;

use retail_model::{Customer, RawCustomer};

use crate::coerce::coerce_numeric;

const EMAIL_DOMAIN: &str = "example.com";

/// Cleans the customer table.
///
/// Exact full-row duplicates are removed first (first occurrence wins, order
/// preserved), then every surviving row gets its columns repaired. No row is
/// dropped for a missing or malformed field.
pub fn clean_customers(raw: &[RawCustomer]) -> Vec<Customer> {
    let mut seen: HashSet<&RawCustomer> = HashSet::with_capacity(raw.len());
    let mut cleaned = Vec::with_capacity(raw.len());
    for row in raw {
        if !seen.insert(row) {
            continue;
        }
        cleaned.push(clean_row(row));
    }
    let dropped = raw.len() - cleaned.len();
    if dropped > 0 {
        debug!(dropped, "removed exact-duplicate customer rows");
    }
    cleaned
}

fn clean_row(row: &RawCustomer) -> Customer {
    let customer_id = trimmed(row.customer_id.as_deref());
    let name = trimmed(row.name.as_deref());
    let email = repair_email(row.email.as_deref(), &name, &customer_id);
    Customer {
        customer_id,
        name,
        email,
        registration_date: row.registration_date.clone(),
        country: normalize_country(row.country.as_deref()),
        age: coerce_numeric(row.age.as_deref()).map(|v| v.trunc() as i64),
    }
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

/// "USA" and "US" (any casing, outer whitespace ignored) become
/// "United States"; every other value passes through trimmed.
fn normalize_country(raw: Option<&str>) -> String {
    let trimmed = raw.unwrap_or_default().trim();
    if trimmed.eq_ignore_ascii_case("usa") || trimmed.eq_ignore_ascii_case("us") {
        "United States".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Existing emails are trimmed and lowercased. Missing ones are synthesized
/// deterministically from the name and customer id so the same inputs always
/// produce the same address.
fn repair_email(raw: Option<&str>, name: &str, customer_id: &str) -> String {
    if let Some(email) = raw {
        let email = email.trim();
        if !email.is_empty() {
            return email.to_lowercase();
        }
    }
    let compact: String = name
        .to_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect();
    let local = if compact.is_empty() {
        "user".to_string()
    } else {
        compact
    };
    let id = customer_id.to_lowercase();
    if id.is_empty() {
        format!("{local}@{EMAIL_DOMAIN}")
    } else {
        format!("{local}.{id}@{EMAIL_DOMAIN}")
    }
}
