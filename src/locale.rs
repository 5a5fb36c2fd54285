//! Localization lookup for report templates, labels, and command words.

use std::collections::HashMap;

/// Resolves a translation key to a display string, substituting `{param}`
/// placeholders from the supplied pairs.
pub trait Translator: Send + Sync {
    fn translate(&self, locale: &str, key: &str, params: &[(&str, &str)]) -> String;
}

/// In-memory translation catalog with a built-in English locale.
///
/// Lookups fall back to the default locale and, as a last resort, to the key
/// itself so a missing string never aborts a report.
pub struct Catalog {
    locales: HashMap<String, HashMap<String, String>>,
    default_locale: String,
}

impl Catalog {
    pub fn new() -> Self {
        let mut locales = HashMap::new();
        locales.insert("en".to_string(), english_strings());
        Self {
            locales,
            default_locale: "en".to_string(),
        }
    }

    /// Registers or replaces the strings for a locale.
    pub fn insert_locale(&mut self, tag: impl Into<String>, strings: HashMap<String, String>) {
        self.locales.insert(tag.into(), strings);
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|strings| strings.get(key))
            .or_else(|| {
                self.locales
                    .get(&self.default_locale)
                    .and_then(|strings| strings.get(key))
            })
            .map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for Catalog {
    fn translate(&self, locale: &str, key: &str, params: &[(&str, &str)]) -> String {
        let Some(template) = self.lookup(locale, key) else {
            tracing::warn!(locale, key, "missing translation, falling back to key");
            return key.to_string();
        };
        substitute(template, params)
    }
}

fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (name, value) in params {
        output = output.replace(&format!("{{{name}}}"), value);
    }
    output
}

fn english_strings() -> HashMap<String, String> {
    let entries = [
        (
            "reports.monthly",
            "📊 Report for {period}\n\nExpenses:\n{expenses}\n\nIncome:\n{income}\n\n{totalExpense}\n{totalIncome}\n{cashflow}",
        ),
        (
            "reports.yearly",
            "📊 Yearly report for {period}\n\nExpenses:\n{expenses}\n\nIncome:\n{income}\n\n{totalExpense}\n{totalIncome}\n{cashflow}",
        ),
        ("reports.totalExpense", "Total expense: {amount}"),
        ("reports.totalIncome", "Total income: {amount}"),
        ("reports.cashflow", "Cashflow: {amount}"),
        ("reports.noData", "No data for this period"),
        ("buttons.done", "Done"),
        ("buttons.showMonthly", "Show monthly"),
        ("buttons.showYearly", "Show yearly"),
        ("commands.report", "report"),
    ];
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
