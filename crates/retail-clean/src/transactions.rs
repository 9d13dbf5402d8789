//! Transaction table cleaning: dedup, column repair, referential filter.

use std::collections::HashSet;

use tracing::debug;

use retail_model::{Customer, PaymentMethod, RawTransaction, Transaction};

use crate::coerce::coerce_integer;
use crate::datetime::{latest_valid_date, parse_date};

/// Cleans the transaction table against the already-cleaned customers.
///
/// Stages run in a fixed order: dedup by transaction id (first occurrence
/// wins), per-column repair, then the referential filter. The filter runs
/// last so customer ids have already been trimmed the same way the customer
/// cleaner trims them.
///
/// An unparseable transaction date does not drop the row; it is kept with no
/// date and only falls out of date-based aggregation.
pub fn clean_transactions(raw: &[RawTransaction], customers: &[Customer]) -> Vec<Transaction> {
    let mut seen_ids: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut cleaned = Vec::with_capacity(raw.len());
    for row in raw {
        // Missing ids share the empty-string key, so all id-less rows
        // collapse onto the first one.
        let id = row.transaction_id.as_deref().unwrap_or_default().trim();
        if !seen_ids.insert(id.to_string()) {
            continue;
        }
        cleaned.push(clean_row(row));
    }
    let duplicates = raw.len() - cleaned.len();
    if duplicates > 0 {
        debug!(duplicates, "removed duplicate transaction ids");
    }

    let valid_ids: HashSet<&str> = customers
        .iter()
        .map(|c| c.customer_id.as_str())
        .collect();
    let before_filter = cleaned.len();
    cleaned.retain(|tx| valid_ids.contains(tx.customer_id.as_str()));
    let unreferenced = before_filter - cleaned.len();
    if unreferenced > 0 {
        debug!(
            unreferenced,
            "dropped transactions referencing unknown customers"
        );
    }
    cleaned
}

fn clean_row(row: &RawTransaction) -> Transaction {
    let date = parse_date(row.transaction_date.as_deref())
        .map(|d| d.min(latest_valid_date()));
    Transaction {
        transaction_id: row
            .transaction_id
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
        customer_id: row
            .customer_id
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
        product_id: row
            .product_id
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
        quantity: coerce_integer(row.quantity.as_deref(), Some(1)).unwrap_or(1),
        transaction_date: date,
        payment_method: PaymentMethod::from_raw(row.payment_method.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw(
        id: &str,
        customer: &str,
        product: &str,
        quantity: &str,
        date: &str,
        method: &str,
    ) -> RawTransaction {
        let opt = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        RawTransaction {
            transaction_id: opt(id),
            customer_id: opt(customer),
            product_id: opt(product),
            quantity: opt(quantity),
            transaction_date: opt(date),
            payment_method: opt(method),
        }
    }

    fn customer(id: &str) -> Customer {
        Customer {
            customer_id: id.to_string(),
            name: String::new(),
            email: String::new(),
            registration_date: None,
            country: String::new(),
            age: None,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let rows = vec![
            raw("T1", "1", "P1", "2", "2024-01-01", "PayPal"),
            raw("T1", "1", "P2", "5", "2024-02-02", "PayPal"),
            raw("T2", "1", "P1", "1", "2024-03-03", "PayPal"),
        ];
        let cleaned = clean_transactions(&rows, &[customer("1")]);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].transaction_id, "T1");
        assert_eq!(cleaned[0].product_id, "P1");
        assert_eq!(cleaned[1].transaction_id, "T2");
    }

    #[test]
    fn quantity_repairs_to_at_least_one() {
        let rows = vec![
            raw("T1", "1", "P1", "0", "2024-01-01", ""),
            raw("T2", "1", "P1", "-4", "2024-01-01", ""),
            raw("T3", "1", "P1", "three", "2024-01-01", ""),
            raw("T4", "1", "P1", "", "2024-01-01", ""),
            raw("T5", "1", "P1", "3", "2024-01-01", ""),
        ];
        let cleaned = clean_transactions(&rows, &[customer("1")]);
        let quantities: Vec<i64> = cleaned.iter().map(|t| t.quantity).collect();
        assert_eq!(quantities, vec![1, 1, 1, 1, 3]);
    }

    #[test]
    fn future_dates_clamp_to_cutoff() {
        let rows = vec![raw("T1", "1", "P1", "1", "2025-06-01", "")];
        let cleaned = clean_transactions(&rows, &[customer("1")]);
        assert_eq!(cleaned[0].transaction_date, Some(ymd(2024, 12, 31)));
    }

    #[test]
    fn unparseable_date_kept_as_none() {
        let rows = vec![raw("T1", "1", "P1", "1", "soon", "")];
        let cleaned = clean_transactions(&rows, &[customer("1")]);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].transaction_date, None);
    }

    #[test]
    fn payment_method_normalized_to_closed_set() {
        let rows = vec![
            raw("T1", "1", "P1", "1", "2024-01-01", " credit  card "),
            raw("T2", "1", "P1", "1", "2024-01-01", "BANK TRANSFER"),
            raw("T3", "1", "P1", "1", "2024-01-01", "cash"),
            raw("T4", "1", "P1", "1", "2024-01-01", ""),
        ];
        let cleaned = clean_transactions(&rows, &[customer("1")]);
        let methods: Vec<PaymentMethod> = cleaned.iter().map(|t| t.payment_method).collect();
        assert_eq!(
            methods,
            vec![
                PaymentMethod::CreditCard,
                PaymentMethod::BankTransfer,
                PaymentMethod::Other,
                PaymentMethod::Other,
            ]
        );
    }

    #[test]
    fn unreferenced_customers_filtered_out() {
        let rows = vec![
            raw("T1", "1", "P1", "1", "2024-01-01", ""),
            raw("T2", "999", "P1", "1", "2024-01-01", ""),
        ];
        let cleaned = clean_transactions(&rows, &[customer("1")]);
        assert_eq!(cleaned.len(), 1);
        assert!(cleaned.iter().all(|t| t.customer_id == "1"));
    }

    #[test]
    fn referential_filter_uses_trimmed_ids() {
        let rows = vec![raw("T1", " 1 ", "P1", "1", "2024-01-01", "")];
        let cleaned = clean_transactions(&rows, &[customer("1")]);
        assert_eq!(cleaned.len(), 1);
    }

    #[test]
    fn cleaning_is_idempotent() {
        let rows = vec![
            raw("T1", "1", "P1", "0", "2025-06-01", "paypal"),
            raw("T2", "1", "P2", "2", "bad-date", "cash"),
        ];
        let customers = [customer("1")];
        let once = clean_transactions(&rows, &customers);
        let again: Vec<RawTransaction> = once
            .iter()
            .map(|t| RawTransaction {
                transaction_id: Some(t.transaction_id.clone()),
                customer_id: Some(t.customer_id.clone()),
                product_id: Some(t.product_id.clone()),
                quantity: Some(t.quantity.to_string()),
                transaction_date: t.transaction_date.map(|d| d.to_string()),
                payment_method: Some(t.payment_method.as_str().to_string()),
            })
            .collect();
        assert_eq!(clean_transactions(&again, &customers), once);
    }
}
