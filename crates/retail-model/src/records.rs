//! Raw and cleaned record types for the three input tables.
//!
//! Raw records keep every field as an optional string because any cell may be
//! missing or malformed; the cleaners in `retail-clean` are the only path
//! from a raw record to its typed counterpart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, PaymentMethod};

/// A customer row as read from the input file, before any repair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawCustomer {
    pub customer_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub registration_date: Option<String>,
    pub country: Option<String>,
    pub age: Option<String>,
}

/// A product row as read from the input file, before any repair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawProduct {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
}

/// A transaction row as read from the input file, before any repair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawTransaction {
    pub transaction_id: Option<String>,
    pub customer_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<String>,
    pub transaction_date: Option<String>,
    pub payment_method: Option<String>,
}

/// A cleaned customer row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub email: String,
    /// Passthrough column, never repaired.
    pub registration_date: Option<String>,
    pub country: String,
    /// None when the raw value could not be coerced to a number.
    pub age: Option<i64>,
}

/// A cleaned product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_name: String,
    pub category: Category,
    /// None only when no price is known anywhere in the table.
    pub price: Option<f64>,
    /// Always within [0, 1000].
    pub stock: i64,
}

/// A cleaned transaction row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub customer_id: String,
    pub product_id: String,
    /// Always >= 1.
    pub quantity: i64,
    /// None when the raw date was unparseable; such rows are kept but do not
    /// contribute to monthly revenue.
    pub transaction_date: Option<NaiveDate>,
    pub payment_method: PaymentMethod,
}
