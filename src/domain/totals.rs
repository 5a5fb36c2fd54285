//! Per-currency aggregates built from monetary entries.
//!
//! Both maps preserve first-insertion key order so rendered output is
//! deterministic. Currency codes are never merged case-insensitively; each
//! distinct string is its own bucket.

use crate::domain::MonetaryEntry;

/// Accumulated non-negative magnitudes keyed by currency code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyTotals {
    buckets: Vec<(String, f64)>,
}

impl CurrencyTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates the absolute movement of every entry per currency.
    pub fn from_entries(entries: &[MonetaryEntry]) -> Self {
        let mut totals = Self::new();
        for entry in entries {
            totals.add(entry.currency(), entry.magnitude());
        }
        totals
    }

    /// Adds a magnitude to the bucket for `code`, creating it at the end when new.
    pub fn add(&mut self, code: impl Into<String>, magnitude: f64) {
        let code = code.into();
        match self.buckets.iter_mut().find(|(key, _)| *key == code) {
            Some((_, total)) => *total += magnitude,
            None => self.buckets.push((code, magnitude)),
        }
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.buckets
            .iter()
            .find(|(key, _)| key == code)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.buckets.iter().map(|(key, total)| (key.as_str(), *total))
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Renders the totals as `"<amount> <code>"` pairs joined by commas, or
    /// `"0"` when no currency was seen.
    pub fn render(&self) -> String {
        if self.buckets.is_empty() {
            return "0".to_string();
        }
        self.buckets
            .iter()
            .map(|(code, total)| format!("{total:.2} {code}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Signed net movement per currency: income minus expense.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cashflow {
    buckets: Vec<(String, f64)>,
}

impl Cashflow {
    /// Builds the cashflow from the two totals maps. Income keys come first in
    /// their insertion order, then expense-only keys with negated values.
    pub fn between(income: &CurrencyTotals, expense: &CurrencyTotals) -> Self {
        let mut buckets: Vec<(String, f64)> = income
            .iter()
            .map(|(code, total)| (code.to_string(), total))
            .collect();
        for (code, magnitude) in expense.iter() {
            match buckets.iter_mut().find(|(key, _)| key == code) {
                Some((_, net)) => *net -= magnitude,
                None => buckets.push((code.to_string(), -magnitude)),
            }
        }
        Self { buckets }
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.buckets
            .iter()
            .find(|(key, _)| key == code)
            .map(|(_, net)| *net)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Renders each net amount with an explicit `+` for non-negative values;
    /// negative values already carry their own sign. Empty renders as `"0"`.
    pub fn render(&self) -> String {
        if self.buckets.is_empty() {
            return "0".to_string();
        }
        self.buckets
            .iter()
            .map(|(code, net)| {
                // Collapse negative zero so it never renders as "+-0.00".
                let net = if *net == 0.0 { 0.0 } else { *net };
                if net >= 0.0 {
                    format!("+{net:.2} {code}")
                } else {
                    format!("{net:.2} {code}")
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MonetaryEntry;

    #[test]
    fn totals_accumulate_absolute_magnitudes() {
        let entries = vec![
            MonetaryEntry::new("A", "USD", -10.0),
            MonetaryEntry::new("B", "USD", -5.0),
        ];
        let totals = CurrencyTotals::from_entries(&entries);
        assert_eq!(totals.get("USD"), Some(15.0));
        assert_eq!(totals.render(), "15.00 USD");
    }

    #[test]
    fn totals_preserve_first_insertion_order() {
        let mut totals = CurrencyTotals::new();
        totals.add("EUR", 1.0);
        totals.add("USD", 2.0);
        totals.add("EUR", 3.0);
        assert_eq!(totals.render(), "4.00 EUR, 2.00 USD");
    }

    #[test]
    fn currency_codes_are_case_sensitive_buckets() {
        let mut totals = CurrencyTotals::new();
        totals.add("usd", 1.0);
        totals.add("USD", 2.0);
        assert_eq!(totals.get("usd"), Some(1.0));
        assert_eq!(totals.get("USD"), Some(2.0));
    }

    #[test]
    fn empty_totals_render_as_zero() {
        assert_eq!(CurrencyTotals::new().render(), "0");
    }

    #[test]
    fn cashflow_nets_income_against_expense() {
        let mut income = CurrencyTotals::new();
        income.add("USD", 100.0);
        let mut expense = CurrencyTotals::new();
        expense.add("USD", 40.0);
        expense.add("EUR", 20.0);

        let cashflow = Cashflow::between(&income, &expense);
        assert_eq!(cashflow.get("USD"), Some(60.0));
        assert_eq!(cashflow.get("EUR"), Some(-20.0));
        assert_eq!(cashflow.render(), "+60.00 USD, -20.00 EUR");
    }

    #[test]
    fn cashflow_of_empty_sides_renders_zero() {
        let cashflow = Cashflow::between(&CurrencyTotals::new(), &CurrencyTotals::new());
        assert!(cashflow.is_empty());
        assert_eq!(cashflow.render(), "0");
    }

    #[test]
    fn cashflow_never_renders_negative_zero() {
        let income = CurrencyTotals::new();
        let mut expense = CurrencyTotals::new();
        expense.add("USD", 0.0);

        let cashflow = Cashflow::between(&income, &expense);
        assert_eq!(cashflow.render(), "+0.00 USD");
    }
}
