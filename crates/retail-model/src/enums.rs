//! Closed enumerations for the cleaned schema.
//!
//! Unrecognized input is forced through the explicit `Other` arm rather than
//! passed through as an open string, so cleaned tables can only ever carry
//! canonical values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category in the cleaned schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Home,
    Sports,
    Other,
}

impl Category {
    /// All canonical categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::Home,
        Category::Sports,
        Category::Other,
    ];

    /// Returns the canonical category name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Home => "Home",
            Category::Sports => "Sports",
            Category::Other => "Other",
        }
    }

    /// Normalizes a raw category value.
    ///
    /// The match is case-insensitive against the whole trimmed value, never a
    /// substring. Anything unmatched or missing maps to [`Category::Other`].
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Category::Other;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "electronics" => Category::Electronics,
            "clothing" => Category::Clothing,
            "books" => Category::Books,
            "home" => Category::Home,
            "sports" => Category::Sports,
            _ => Category::Other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment method in the cleaned schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    PayPal,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    Other,
}

impl PaymentMethod {
    /// All canonical payment methods, in display order.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::BankTransfer,
        PaymentMethod::Other,
    ];

    /// Returns the canonical payment method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Other => "Other",
        }
    }

    /// Normalizes a raw payment method value.
    ///
    /// Inner whitespace is collapsed before the case-insensitive match, so
    /// "credit  card" and " CREDIT CARD " both resolve to `CreditCard`.
    /// Anything unmatched or missing maps to [`PaymentMethod::Other`].
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return PaymentMethod::Other;
        };
        let compact = raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();
        match compact.as_str() {
            "CREDIT CARD" => PaymentMethod::CreditCard,
            "PAYPAL" => PaymentMethod::PayPal,
            "BANK TRANSFER" => PaymentMethod::BankTransfer,
            _ => PaymentMethod::Other,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_matches_case_insensitively() {
        assert_eq!(Category::from_raw(Some("electronics")), Category::Electronics);
        assert_eq!(Category::from_raw(Some("  BOOKS ")), Category::Books);
        assert_eq!(Category::from_raw(Some("Sports")), Category::Sports);
    }

    #[test]
    fn category_rejects_substring_matches() {
        assert_eq!(Category::from_raw(Some("home goods")), Category::Other);
        assert_eq!(Category::from_raw(Some("electronicsx")), Category::Other);
    }

    #[test]
    fn category_missing_is_other() {
        assert_eq!(Category::from_raw(None), Category::Other);
        assert_eq!(Category::from_raw(Some("")), Category::Other);
        assert_eq!(Category::from_raw(Some("garden")), Category::Other);
    }

    #[test]
    fn payment_method_collapses_spacing() {
        assert_eq!(
            PaymentMethod::from_raw(Some(" credit  card ")),
            PaymentMethod::CreditCard
        );
        assert_eq!(PaymentMethod::from_raw(Some("PAYPAL")), PaymentMethod::PayPal);
        assert_eq!(
            PaymentMethod::from_raw(Some("bank transfer")),
            PaymentMethod::BankTransfer
        );
    }

    #[test]
    fn payment_method_fallback_is_other() {
        assert_eq!(PaymentMethod::from_raw(Some("bitcoin")), PaymentMethod::Other);
        assert_eq!(PaymentMethod::from_raw(None), PaymentMethod::Other);
    }
}
