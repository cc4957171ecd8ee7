//! Salary worksheet: gross annual pay to net annual pay.
//!
//! This module implements the salary calculator: social-insurance and GESY
//! contributions, relief stacking, the expatriate exemption, and the
//! progressive bracket schedule for the selected tax year.
//!
//! # Worksheet structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Social insurance on insurable earnings (`min(gross, cap) × rate`) |
//! | 2    | GESY on full gross (`gross × rate`) |
//! | 3    | Relief total (child allowance, capped reliefs, uncapped IR59) |
//! | 4    | Expatriate exemption (half of gross above the income threshold) |
//! | 5    | Taxable income (`gross − contributions − exemption − reliefs`, floored at 0) |
//! | 6    | Progressive tax across the year's brackets |
//! | 7    | Net annual pay (`gross − contributions − tax`) |
//!
//! Reliefs and the exemption reduce only the tax base (steps 5–6); net pay
//! improves solely through the lower tax, never by re-adding relief amounts.
//! All intermediate amounts stay unrounded; rounding belongs to the display
//! boundary in [`crate::format`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use cytax_core::TaxYear;
//! use cytax_core::calculations::{SalaryWorksheet, SalaryWorksheetInput};
//!
//! let worksheet = SalaryWorksheet::for_year(TaxYear::Y2026);
//! let result = worksheet
//!     .calculate(&SalaryWorksheetInput {
//!         gross_annual: dec!(30000),
//!         reliefs: None,
//!     })
//!     .unwrap();
//!
//! assert_eq!(result.social_and_health_deductions, dec!(3435));
//! assert_eq!(result.taxable_income, dec!(26565));
//! assert_eq!(result.income_tax, dec!(913));
//! assert_eq!(result.net_annual, dec!(25652));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::max;
use crate::models::{ContributionConfig, ReliefSchedule, TaxBracket, TaxYear};

/// Errors that can occur during salary worksheet calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SalaryWorksheetError {
    /// Gross annual income must be positive for the worksheet to apply.
    #[error("gross annual income must be positive, got {0}")]
    NonPositiveGross(Decimal),

    /// No tax brackets were provided for the calculation.
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    /// The social-insurance rate must be between 0 and 1.
    #[error("social insurance rate must be between 0 and 1, got {0}")]
    InvalidSocialInsuranceRate(Decimal),

    /// The GESY rate must be between 0 and 1.
    #[error("GESY rate must be between 0 and 1, got {0}")]
    InvalidGesyRate(Decimal),

    /// The social-insurance cap, when present, must be positive.
    #[error("social insurance cap must be positive, got {0}")]
    InvalidSocialInsuranceCap(Decimal),

    /// The expatriate exempt fraction must be between 0 and 1.
    #[error("expatriate exempt fraction must be between 0 and 1, got {0}")]
    InvalidExpatFraction(Decimal),
}

/// Relief claim for the advanced calculator mode.
///
/// Every field defaults to "not claimed"; negative amounts are clamped to
/// zero before the caps apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefClaim {
    /// Number of dependent children (step-table allowance).
    pub children: u32,

    /// Housing loan interest paid, capped by the schedule.
    pub housing_loan_interest: Decimal,

    /// Rent paid, capped by the schedule.
    pub rent_paid: Decimal,

    /// Green investment amount, capped by the schedule.
    pub green_investment: Decimal,

    /// Other allowable deductions (IR59), uncapped.
    pub other_deductions: Decimal,

    /// Whether the expatriate exemption applies (only effective above the
    /// schedule's income threshold).
    pub is_expat: bool,
}

/// Input values for the salary worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryWorksheetInput {
    /// Gross annual salary. Must be positive.
    pub gross_annual: Decimal,

    /// Relief claim; `None` computes the simple no-relief variant.
    pub reliefs: Option<ReliefClaim>,
}

/// Result of the salary worksheet.
///
/// Carries the headline figures plus intermediate values for transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryWorksheetResult {
    /// Gross annual salary as provided.
    pub gross_annual: Decimal,

    /// Social-insurance contribution on insurable earnings.
    pub social_insurance: Decimal,

    /// GESY contribution on full gross.
    pub gesy: Decimal,

    /// Social insurance plus GESY.
    pub social_and_health_deductions: Decimal,

    /// Total claimed reliefs after caps (zero in simple mode).
    pub relief_total: Decimal,

    /// Expatriate exemption amount (zero unless claimed and eligible).
    pub expat_exemption: Decimal,

    /// Tax base after contributions, exemption and reliefs, floored at zero.
    pub taxable_income: Decimal,

    /// Progressive income tax on the taxable base.
    pub income_tax: Decimal,

    /// Gross minus contributions minus income tax.
    pub net_annual: Decimal,
}

/// Calculator for the salary worksheet.
///
/// Borrows a bracket table and owns the contribution and relief schedules;
/// [`SalaryWorksheet::for_year`] builds the canonical instance for a tax
/// year.
#[derive(Debug, Clone)]
pub struct SalaryWorksheet<'a> {
    brackets: &'a [TaxBracket],
    contributions: ContributionConfig,
    reliefs: ReliefSchedule,
}

impl<'a> SalaryWorksheet<'a> {
    /// Creates a worksheet over the given bracket table and schedules.
    ///
    /// Brackets must be sorted by `min_income` ascending and cover all income
    /// ranges (the last bracket should have `max_income` as `None`).
    pub fn new(
        brackets: &'a [TaxBracket],
        contributions: ContributionConfig,
        reliefs: ReliefSchedule,
    ) -> Self {
        Self {
            brackets,
            contributions,
            reliefs,
        }
    }

    /// Canonical worksheet for a tax year: the year's bracket table with the
    /// default contribution and relief schedules.
    pub fn for_year(year: TaxYear) -> SalaryWorksheet<'static> {
        SalaryWorksheet {
            brackets: year.brackets(),
            contributions: ContributionConfig::default(),
            reliefs: ReliefSchedule::default(),
        }
    }

    /// Validates the configured schedules.
    ///
    /// # Errors
    ///
    /// Returns [`SalaryWorksheetError`] if a rate or fraction is outside
    /// `[0, 1]`, the cap is non-positive, or the bracket table is empty.
    pub fn validate(&self) -> Result<(), SalaryWorksheetError> {
        let rate = self.contributions.social_insurance_rate;
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(SalaryWorksheetError::InvalidSocialInsuranceRate(rate));
        }
        let gesy = self.contributions.gesy_rate;
        if gesy < Decimal::ZERO || gesy > Decimal::ONE {
            return Err(SalaryWorksheetError::InvalidGesyRate(gesy));
        }
        if let Some(cap) = self.contributions.social_insurance_cap {
            if cap <= Decimal::ZERO {
                return Err(SalaryWorksheetError::InvalidSocialInsuranceCap(cap));
            }
        }
        let fraction = self.reliefs.expat_exempt_fraction;
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(SalaryWorksheetError::InvalidExpatFraction(fraction));
        }
        if self.brackets.is_empty() {
            return Err(SalaryWorksheetError::NoTaxBrackets);
        }
        Ok(())
    }

    /// Calculates the complete salary worksheet.
    ///
    /// # Errors
    ///
    /// Returns [`SalaryWorksheetError`] if:
    /// - `gross_annual` is zero or negative
    /// - No tax brackets were provided
    pub fn calculate(
        &self,
        input: &SalaryWorksheetInput,
    ) -> Result<SalaryWorksheetResult, SalaryWorksheetError> {
        if input.gross_annual <= Decimal::ZERO {
            return Err(SalaryWorksheetError::NonPositiveGross(input.gross_annual));
        }
        if self.brackets.is_empty() {
            return Err(SalaryWorksheetError::NoTaxBrackets);
        }

        let gross = input.gross_annual;
        let social_insurance = self.social_insurance(gross);
        let gesy = gross * self.contributions.gesy_rate;
        let social_and_health_deductions = social_insurance + gesy;

        let (relief_total, expat_exemption) = match &input.reliefs {
            Some(claim) => (
                self.relief_total(claim),
                self.expat_exemption(gross, claim),
            ),
            None => (Decimal::ZERO, Decimal::ZERO),
        };

        let taxable_income = max(
            gross - social_and_health_deductions - expat_exemption - relief_total,
            Decimal::ZERO,
        );
        let income_tax = self.bracket_tax(taxable_income);
        let net_annual = gross - social_and_health_deductions - income_tax;

        Ok(SalaryWorksheetResult {
            gross_annual: gross,
            social_insurance,
            gesy,
            social_and_health_deductions,
            relief_total,
            expat_exemption,
            taxable_income,
            income_tax,
            net_annual,
        })
    }

    /// Social-insurance contribution on insurable earnings.
    fn social_insurance(
        &self,
        gross: Decimal,
    ) -> Decimal {
        let insurable = match self.contributions.social_insurance_cap {
            Some(cap) => gross.min(cap),
            None => gross,
        };
        insurable * self.contributions.social_insurance_rate
    }

    /// Total claimed reliefs after caps.
    fn relief_total(
        &self,
        claim: &ReliefClaim,
    ) -> Decimal {
        self.reliefs.child_allowance(claim.children)
            + capped(claim.housing_loan_interest, self.reliefs.housing_interest_cap)
            + capped(claim.rent_paid, self.reliefs.rent_cap)
            + capped(claim.green_investment, self.reliefs.green_investment_cap)
            + max(claim.other_deductions, Decimal::ZERO)
    }

    /// Expatriate exemption: a fraction of gross, only above the threshold.
    fn expat_exemption(
        &self,
        gross: Decimal,
        claim: &ReliefClaim,
    ) -> Decimal {
        if claim.is_expat && gross > self.reliefs.expat_income_threshold {
            gross * self.reliefs.expat_exempt_fraction
        } else {
            Decimal::ZERO
        }
    }

    /// Progressive tax: per ascending bracket, the slice of taxable income
    /// falling inside the bracket times its marginal rate.
    fn bracket_tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        let mut tax = Decimal::ZERO;
        for bracket in self.brackets {
            if taxable_income <= bracket.min_income {
                break;
            }
            let ceiling = match bracket.max_income {
                Some(upper) => taxable_income.min(upper),
                None => taxable_income,
            };
            tax += (ceiling - bracket.min_income) * bracket.tax_rate;
        }
        tax
    }
}

/// Clamps a claimed amount into `[0, cap]`.
fn capped(
    amount: Decimal,
    cap: Decimal,
) -> Decimal {
    max(amount, Decimal::ZERO).min(cap)
}
