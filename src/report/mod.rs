//! Turns fetched category entries into the final report text.

pub mod table;

use crate::domain::{Cashflow, CurrencyTotals, MonetaryEntry};
use crate::locale::Translator;
use crate::period::{PeriodKind, ReportPeriod};

/// Stateless formatter combining tables, totals, and cashflow into a
/// localized report message.
pub struct ReportFormatter<'a> {
    translator: &'a dyn Translator,
    locale: &'a str,
}

impl<'a> ReportFormatter<'a> {
    pub fn new(translator: &'a dyn Translator, locale: &'a str) -> Self {
        Self { translator, locale }
    }

    /// Composes the full report text for one period from already-fetched
    /// expense and income entries.
    pub fn compose(
        &self,
        period: &ReportPeriod,
        expenses: &[MonetaryEntry],
        incomes: &[MonetaryEntry],
    ) -> String {
        let expense_table = table::render(expenses);
        let income_table = table::render(incomes);

        let expense_totals = CurrencyTotals::from_entries(expenses);
        let income_totals = CurrencyTotals::from_entries(incomes);
        let cashflow = Cashflow::between(&income_totals, &expense_totals);

        let no_data = self.translate("reports.noData", &[]);
        let expense_block = non_empty_or(&expense_table, &no_data);
        let income_block = non_empty_or(&income_table, &no_data);

        let total_expense =
            self.translate("reports.totalExpense", &[("amount", &expense_totals.render())]);
        let total_income =
            self.translate("reports.totalIncome", &[("amount", &income_totals.render())]);
        let cashflow_line = self.translate("reports.cashflow", &[("amount", &cashflow.render())]);

        let template_key = match period.kind() {
            PeriodKind::Monthly => "reports.monthly",
            PeriodKind::Yearly => "reports.yearly",
        };
        self.translate(
            template_key,
            &[
                ("period", &period.label()),
                ("expenses", expense_block),
                ("income", income_block),
                ("totalExpense", &total_expense),
                ("totalIncome", &total_income),
                ("cashflow", &cashflow_line),
            ],
        )
    }

    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.translator.translate(self.locale, key, params)
    }
}

fn non_empty_or<'t>(text: &'t str, fallback: &'t str) -> &'t str {
    if text.is_empty() {
        fallback
    } else {
        text
    }
}
