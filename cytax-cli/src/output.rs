//! Renders worksheet result records to stdout.
//!
//! The worksheets never touch the display; this module consumes the records
//! they return and prints them. No state is kept between renders.

use chrono::NaiveDate;
use cytax_core::TaxYear;
use cytax_core::calculations::{
    ProfitComparisonResult, RegimeOutcome, SalaryWorksheetResult, Verdict,
};
use cytax_core::calendar;
use cytax_core::format::format_money_eur;

pub fn render_salary(
    result: &SalaryWorksheetResult,
    tax_year: TaxYear,
) {
    println!("Salary breakdown ({tax_year} rules)");
    line("Gross annual", result.gross_annual);
    line("Social insurance", result.social_insurance);
    line("GESY", result.gesy);
    if !result.relief_total.is_zero() {
        line("Reliefs claimed", result.relief_total);
    }
    if !result.expat_exemption.is_zero() {
        line("Expatriate exemption", result.expat_exemption);
    }
    line("Taxable income", result.taxable_income);
    line("Income tax", result.income_tax);
    line("Net annual", result.net_annual);
}

pub fn render_business(result: &ProfitComparisonResult) {
    println!(
        "Profit comparison for {}",
        format_money_eur(result.annual_profit)
    );
    render_regime(&result.baseline);
    render_regime(&result.reform);

    match result.verdict {
        Verdict::ReformFavorable => println!(
            "You keep {} more under the {} rules.",
            format_money_eur(result.difference),
            result.reform.tax_year
        ),
        Verdict::BaselineFavorable => println!(
            "You pay {} more under the {} rules.",
            format_money_eur(-result.difference),
            result.reform.tax_year
        ),
        Verdict::NoDifference => println!("Both rule sets leave the same net amount."),
    }
}

pub fn render_deadlines(today: NaiveDate) {
    println!("Filing deadlines from {today}");
    for upcoming in calendar::upcoming_deadlines(today) {
        println!(
            "  {}  in {:>3} days  {}",
            upcoming.date, upcoming.days_until, upcoming.deadline.label
        );
    }
}

pub fn render_batch_line(
    row: usize,
    tax_year: TaxYear,
    result: &SalaryWorksheetResult,
) {
    println!(
        "row {row} ({tax_year}): gross {} -> tax {}, net {}",
        format_money_eur(result.gross_annual),
        format_money_eur(result.income_tax),
        format_money_eur(result.net_annual)
    );
}

fn render_regime(outcome: &RegimeOutcome) {
    println!("  {} rules", outcome.tax_year);
    println!(
        "    {:<20} {:>12}",
        "Corporate tax",
        format_money_eur(outcome.corporate_tax)
    );
    println!(
        "    {:<20} {:>12}",
        "Dividend tax (SDC)",
        format_money_eur(outcome.dividend_tax)
    );
    println!(
        "    {:<20} {:>12}",
        "Net after tax",
        format_money_eur(outcome.net_after_tax)
    );
}

fn line(
    label: &str,
    amount: rust_decimal::Decimal,
) {
    println!("  {:<22} {:>12}", label, format_money_eur(amount));
}
