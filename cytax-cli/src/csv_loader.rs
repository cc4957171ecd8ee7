//! CSV loader for batch salary computation.
//!
//! ## CSV Format
//!
//! The expected CSV format uses the following columns. Column order does
//! **not** matter (headers are matched by name). All header names are
//! case-sensitive and must match exactly.
//!
//! | Column                  | Required | Type    | Notes                        |
//! |-------------------------|----------|---------|------------------------------|
//! | `gross_annual`          | yes      | decimal | e.g. `30000`                 |
//! | `tax_year`              | yes      | integer | `2025` or `2026`             |
//! | `children`              | no       | integer | Leave cell empty for none    |
//! | `housing_loan_interest` | no       | decimal | Leave cell empty for none    |
//! | `rent_paid`             | no       | decimal | Leave cell empty for none    |
//! | `green_investment`      | no       | decimal | Leave cell empty for none    |
//! | `other_deductions`      | no       | decimal | Leave cell empty for none    |
//! | `is_expat`              | no       | bool    | `true`/`false`, empty = no   |
//!
//! A row with every optional cell empty is computed in the simple no-relief
//! mode; filling in any optional cell switches that row to the advanced
//! relief claim.
//!
//! ### Minimal example
//!
//! ```csv
//! gross_annual,tax_year
//! 30000,2026
//! ```
//!
//! ### Full example
//!
//! ```csv
//! gross_annual,tax_year,children,housing_loan_interest,rent_paid,green_investment,other_deductions,is_expat
//! 60000,2026,2,1500.00,,800.00,500.00,true
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use cytax_core::TaxYear;
use cytax_core::calculations::{ReliefClaim, SalaryWorksheetInput};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    gross_annual: Decimal,
    tax_year: i32,
    children: Option<u32>,
    housing_loan_interest: Option<Decimal>,
    rent_paid: Option<Decimal>,
    green_investment: Option<Decimal>,
    other_deductions: Option<Decimal>,
    is_expat: Option<bool>,
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A batch row ready for computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    pub tax_year: TaxYear,
    pub input: SalaryWorksheetInput,
}

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `tax_year` cell held a year with no bracket table. `row` is the
    /// 1-based data row number (header = row 0).
    #[error("unsupported tax year {year} on row {row}")]
    InvalidTaxYear { year: i32, row: usize },

    /// The input file could not be read.
    #[error("cannot read input file: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a BatchRow.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<BatchRow, CsvLoadError> {
    let tax_year =
        TaxYear::from_calendar_year(row.tax_year).ok_or(CsvLoadError::InvalidTaxYear {
            year: row.tax_year,
            row: row_number,
        })?;

    let claimed = row.children.is_some()
        || row.housing_loan_interest.is_some()
        || row.rent_paid.is_some()
        || row.green_investment.is_some()
        || row.other_deductions.is_some()
        || row.is_expat.is_some();

    let reliefs = claimed.then(|| ReliefClaim {
        children: row.children.unwrap_or(0),
        housing_loan_interest: row.housing_loan_interest.unwrap_or(Decimal::ZERO),
        rent_paid: row.rent_paid.unwrap_or(Decimal::ZERO),
        green_investment: row.green_investment.unwrap_or(Decimal::ZERO),
        other_deductions: row.other_deductions.unwrap_or(Decimal::ZERO),
        is_expat: row.is_expat.unwrap_or(false),
    });

    Ok(BatchRow {
        tax_year,
        input: SalaryWorksheetInput {
            gross_annual: row.gross_annual,
            reliefs,
        },
    })
}

/// Parse CSV text (the full file contents as a &str) and return a vector of
/// BatchRow. Rows are returned in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid or a
///   required field cannot be deserialised.
/// * [CsvLoadError::InvalidTaxYear] – if any row names a year with no
///   bracket table.
pub fn load_from_str(input: &str) -> Result<Vec<BatchRow>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            let row_number = idx + 1; // 1-based for user-facing messages
            convert_row(row, row_number)
        })
        .collect()
}

/// Convenience wrapper: read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<BatchRow>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
