use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use cytax_cli::{csv_loader, logging, output};
use cytax_core::TaxYear;
use cytax_core::calculations::{
    ProfitComparisonWorksheet, ReliefClaim, SalaryWorksheet, SalaryWorksheetInput,
};
use cytax_core::format::parse_money;

/// Cyprus salary and business-profit tax calculators.
#[derive(Parser, Debug)]
#[command(name = "cytax")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute net pay from a gross annual salary
    Salary {
        /// Gross annual salary, e.g. 30000 or "30,000"
        #[arg(long, value_parser = money_arg)]
        gross: Decimal,

        /// Tax year to apply (2025 or 2026)
        #[arg(long, default_value_t = 2026)]
        year: i32,

        /// Number of dependent children
        #[arg(long)]
        children: Option<u32>,

        /// Housing loan interest paid this year
        #[arg(long, value_parser = money_arg)]
        housing_interest: Option<Decimal>,

        /// Rent paid this year
        #[arg(long, value_parser = money_arg)]
        rent: Option<Decimal>,

        /// Green investment amount
        #[arg(long, value_parser = money_arg)]
        green_investment: Option<Decimal>,

        /// Other allowable deductions (IR59)
        #[arg(long, value_parser = money_arg)]
        other_deductions: Option<Decimal>,

        /// Apply the expatriate exemption
        #[arg(long)]
        expat: bool,
    },

    /// Compare distributed business profit under the 2025 and 2026 rules
    Business {
        /// Annual profit before corporate tax
        #[arg(long, value_parser = money_arg)]
        profit: Decimal,
    },

    /// Show upcoming filing deadlines
    Deadlines {
        /// Resolve the schedule against this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Compute salaries for every row of a CSV file
    Batch {
        /// Path to the CSV input file
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn money_arg(s: &str) -> Result<Decimal, String> {
    parse_money(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    logging::init_default_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Salary {
            gross,
            year,
            children,
            housing_interest,
            rent,
            green_investment,
            other_deductions,
            expat,
        } => {
            let tax_year = TaxYear::from_calendar_year(year)
                .with_context(|| format!("unsupported tax year {year}; expected 2025 or 2026"))?;

            let claimed = children.is_some()
                || housing_interest.is_some()
                || rent.is_some()
                || green_investment.is_some()
                || other_deductions.is_some()
                || expat;
            let reliefs = claimed.then(|| ReliefClaim {
                children: children.unwrap_or(0),
                housing_loan_interest: housing_interest.unwrap_or(Decimal::ZERO),
                rent_paid: rent.unwrap_or(Decimal::ZERO),
                green_investment: green_investment.unwrap_or(Decimal::ZERO),
                other_deductions: other_deductions.unwrap_or(Decimal::ZERO),
                is_expat: expat,
            });

            let worksheet = SalaryWorksheet::for_year(tax_year);
            let result = worksheet
                .calculate(&SalaryWorksheetInput {
                    gross_annual: gross,
                    reliefs,
                })
                .context("salary computation failed")?;
            output::render_salary(&result, tax_year);
        }

        Command::Business { profit } => {
            let worksheet = ProfitComparisonWorksheet::default();
            let result = worksheet
                .calculate(profit)
                .context("profit comparison failed")?;
            output::render_business(&result);
        }

        Command::Deadlines { date } => {
            let today = date.unwrap_or_else(|| Local::now().date_naive());
            output::render_deadlines(today);
        }

        Command::Batch { file } => {
            let rows = csv_loader::load_from_file(&file)
                .with_context(|| format!("failed to load {}", file.display()))?;
            if rows.is_empty() {
                bail!("no data rows in {}", file.display());
            }
            tracing::info!(rows = rows.len(), file = %file.display(), "loaded batch input");
            for (idx, row) in rows.iter().enumerate() {
                let worksheet = SalaryWorksheet::for_year(row.tax_year);
                let result = worksheet
                    .calculate(&row.input)
                    .with_context(|| format!("row {} failed", idx + 1))?;
                output::render_batch_line(idx + 1, row.tax_year, &result);
            }
        }
    }

    Ok(())
}
