//! Monetary entries as returned by the insights API.

use std::fmt;

use serde::Deserialize;

/// Display name used when the API omits a category name.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Placeholder shown when an entry carries no currency code.
pub const CURRENCY_PLACEHOLDER: &str = "💲";

/// Selects one of the two category-insight feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Expense,
    Income,
}

impl InsightKind {
    /// Returns the path segment the insights API uses for this feed.
    pub fn as_str(self) -> &'static str {
        match self {
            InsightKind::Expense => "expense",
            InsightKind::Income => "income",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One category's net financial movement over a period, as reported by the
/// insights API. Every field may be absent on the wire; both snake_case and
/// camelCase field names are accepted so a casing change upstream cannot
/// silently zero out a report.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MonetaryEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "currencyCode")]
    pub currency_code: Option<String>,
    #[serde(default, alias = "differenceFloat")]
    pub difference_float: Option<f64>,
}

impl MonetaryEntry {
    pub fn new(
        name: impl Into<String>,
        currency_code: impl Into<String>,
        difference_float: f64,
    ) -> Self {
        Self {
            name: Some(name.into()),
            currency_code: Some(currency_code.into()),
            difference_float: Some(difference_float),
        }
    }

    /// Returns the category name, substituting a fixed label when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Returns the currency code, substituting a placeholder symbol when absent.
    pub fn currency(&self) -> &str {
        self.currency_code.as_deref().unwrap_or(CURRENCY_PLACEHOLDER)
    }

    /// Returns the absolute movement for the period; absent amounts count as zero.
    pub fn magnitude(&self) -> f64 {
        self.difference_float.unwrap_or(0.0).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_fall_back_to_defaults() {
        let entry = MonetaryEntry::default();
        assert_eq!(entry.display_name(), UNKNOWN_CATEGORY);
        assert_eq!(entry.currency(), CURRENCY_PLACEHOLDER);
        assert_eq!(entry.magnitude(), 0.0);
    }

    #[test]
    fn magnitude_is_absolute() {
        let entry = MonetaryEntry::new("Groceries", "EUR", -42.5);
        assert_eq!(entry.magnitude(), 42.5);
    }

    #[test]
    fn deserializes_camel_case_wire_entries() {
        let entry: MonetaryEntry = serde_json::from_str(
            r#"{"name":"Rent","currencyCode":"EUR","differenceFloat":-900.0}"#,
        )
        .unwrap();
        assert_eq!(entry.currency(), "EUR");
        assert_eq!(entry.magnitude(), 900.0);
    }

    #[test]
    fn deserializes_sparse_wire_entries() {
        let entry: MonetaryEntry =
            serde_json::from_str(r#"{"name":"Rent","difference_float":-900.0}"#).unwrap();
        assert_eq!(entry.display_name(), "Rent");
        assert_eq!(entry.currency(), CURRENCY_PLACEHOLDER);
        assert_eq!(entry.magnitude(), 900.0);
    }
}
