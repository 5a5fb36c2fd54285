use chrono::NaiveDate;
use ledgerbot::domain::MonetaryEntry;
use ledgerbot::locale::Catalog;
use ledgerbot::period::{PeriodKind, ReportPeriod};
use ledgerbot::report::ReportFormatter;

fn may_2024(kind: PeriodKind) -> ReportPeriod {
    ReportPeriod::from_anchor(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(), kind)
}

#[test]
fn monthly_report_matches_expected_layout() {
    let catalog = Catalog::new();
    let formatter = ReportFormatter::new(&catalog, "en");

    let expenses = vec![
        MonetaryEntry::new("Groceries", "EUR", -120.25),
        MonetaryEntry::new("Rent", "EUR", -900.0),
        MonetaryEntry::new("Coffee", "USD", -3.5),
    ];
    let incomes = vec![MonetaryEntry::new("Salary", "EUR", 3000.0)];

    let text = formatter.compose(&may_2024(PeriodKind::Monthly), &expenses, &incomes);

    let expected = "📊 Report for May 2024\n\n\
        Expenses:\n\
        Rent      900.00 EUR\n\
        Groceries 120.25 EUR\n\
        Coffee    3.50 USD\n\n\
        Income:\n\
        Salary 3000.00 EUR\n\n\
        Total expense: 1020.25 EUR, 3.50 USD\n\
        Total income: 3000.00 EUR\n\
        Cashflow: +1979.75 EUR, -3.50 USD";
    assert_eq!(text, expected);
}

#[test]
fn yearly_report_uses_the_yearly_template() {
    let catalog = Catalog::new();
    let formatter = ReportFormatter::new(&catalog, "en");

    let incomes = vec![MonetaryEntry::new("Salary", "EUR", 36000.0)];
    let text = formatter.compose(&may_2024(PeriodKind::Yearly), &[], &incomes);

    assert!(text.starts_with("📊 Yearly report for 2024"));
    assert!(text.contains("Total income: 36000.00 EUR"));
    assert!(text.contains("Cashflow: +36000.00 EUR"));
}

#[test]
fn empty_feeds_still_render_a_report_with_zero_totals() {
    let catalog = Catalog::new();
    let formatter = ReportFormatter::new(&catalog, "en");

    let text = formatter.compose(&may_2024(PeriodKind::Monthly), &[], &[]);

    assert!(text.contains("Expenses:\nNo data for this period"));
    assert!(text.contains("Income:\nNo data for this period"));
    assert!(text.contains("Total expense: 0"));
    assert!(text.contains("Total income: 0"));
    assert!(text.contains("Cashflow: 0"));
}

#[test]
fn one_sided_data_only_substitutes_the_empty_slot() {
    let catalog = Catalog::new();
    let formatter = ReportFormatter::new(&catalog, "en");

    let expenses = vec![MonetaryEntry::new("Rent", "EUR", -900.0)];
    let text = formatter.compose(&may_2024(PeriodKind::Monthly), &expenses, &[]);

    assert!(text.contains("Expenses:\nRent 900.00 EUR"));
    assert!(text.contains("Income:\nNo data for this period"));
    assert!(text.contains("Total expense: 900.00 EUR"));
    assert!(text.contains("Cashflow: -900.00 EUR"));
}

#[test]
fn entries_without_fields_use_placeholders() {
    let catalog = Catalog::new();
    let formatter = ReportFormatter::new(&catalog, "en");

    let text = formatter.compose(
        &may_2024(PeriodKind::Monthly),
        &[MonetaryEntry::default()],
        &[],
    );

    assert!(text.contains("Unknown 0.00 💲"));
    assert!(text.contains("Total expense: 0.00 💲"));
}
