//! Data model for category insights: monetary entries and per-currency
//! aggregates.

pub mod entry;
pub mod totals;

pub use entry::{InsightKind, MonetaryEntry, CURRENCY_PLACEHOLDER, UNKNOWN_CATEGORY};
pub use totals::{Cashflow, CurrencyTotals};
