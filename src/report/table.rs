//! Borderless two-column rendering of category entries.

use std::cmp::Ordering;

use crate::domain::MonetaryEntry;

/// Renders entries as `name  <amount> <currency>` lines, sorted descending by
/// absolute amount with ties keeping their original relative order.
///
/// Column one is padded to the widest name plus one trailing space; there is
/// no left padding and no border. An empty input renders as the empty string
/// so the caller can substitute its no-data placeholder.
pub fn render(entries: &[MonetaryEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut ordered: Vec<&MonetaryEntry> = entries.iter().collect();
    // Stable sort preserves input order between equal magnitudes.
    ordered.sort_by(|a, b| {
        b.magnitude()
            .partial_cmp(&a.magnitude())
            .unwrap_or(Ordering::Equal)
    });

    let name_width = ordered
        .iter()
        .map(|entry| entry.display_name().chars().count())
        .max()
        .unwrap_or(0);

    ordered
        .iter()
        .map(|entry| {
            format!(
                "{name:<width$} {amount:.2} {currency}",
                name = entry.display_name(),
                width = name_width,
                amount = entry.magnitude(),
                currency = entry.currency(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
