//! Cleaning and normalization rules for the three raw retail tables.
//!
//! Each cleaner is a pure function from raw records (plus, for transactions,
//! the cleaned customers they must reference) to cleaned records. A malformed
//! cell never fails a row; every field has a documented fallback. The only
//! ways a row disappears are exact-duplicate removal, duplicate transaction
//! ids, and the transaction referential filter.

pub mod coerce;
pub mod customers;
pub mod datetime;
pub mod products;
pub mod transactions;

pub use coerce::{clamp, coerce_integer, coerce_numeric};
pub use customers::clean_customers;
pub use datetime::{latest_valid_date, parse_date};
pub use products::clean_products;
pub use transactions::clean_transactions;
