//! Profit-comparison worksheet: distributed company profit under two rule
//! sets.
//!
//! For each regime the worksheet applies corporate tax to the annual profit,
//! then the special defense contribution (SDC) to the distributed remainder,
//! and reports the owner's net. The signed difference between the two nets
//! classifies which rule set is favorable.
//!
//! # Worksheet structure
//!
//! | Step | Description (per regime) |
//! |------|--------------------------|
//! | 1    | Corporate tax (`profit × corporate rate`) |
//! | 2    | Distributable profit (`profit − corporate tax`) |
//! | 3    | Dividend tax (`distributable × SDC rate`) |
//! | 4    | Net after tax (`distributable − dividend tax`) |
//!
//! The verdict compares exact `Decimal` nets, so an exact tie is reachable
//! and reported as [`Verdict::NoDifference`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use cytax_core::calculations::{ProfitComparisonWorksheet, Verdict};
//!
//! let worksheet = ProfitComparisonWorksheet::default();
//! let result = worksheet.calculate(dec!(100000)).unwrap();
//!
//! assert_eq!(result.baseline.net_after_tax, dec!(72625));
//! assert_eq!(result.reform.net_after_tax, dec!(80750));
//! assert_eq!(result.difference, dec!(8125));
//! assert_eq!(result.verdict, Verdict::ReformFavorable);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ProfitRegime, TaxYear};

/// Errors that can occur during profit-comparison calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfitComparisonError {
    /// Annual profit must be positive for the comparison to apply.
    #[error("annual profit must be positive, got {0}")]
    NonPositiveProfit(Decimal),

    /// A corporate tax rate must be between 0 and 1.
    #[error("corporate tax rate must be between 0 and 1, got {0}")]
    InvalidCorporateRate(Decimal),

    /// An SDC rate must be between 0 and 1.
    #[error("SDC rate must be between 0 and 1, got {0}")]
    InvalidSdcRate(Decimal),
}

/// Outcome of distributing one year's profit under a single regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeOutcome {
    pub tax_year: TaxYear,
    pub corporate_tax: Decimal,
    pub after_corporate_tax: Decimal,
    pub dividend_tax: Decimal,
    pub net_after_tax: Decimal,
}

/// Which rule set leaves the owner more after both tax layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The reform rules leave a higher net.
    ReformFavorable,
    /// The baseline rules leave a higher net.
    BaselineFavorable,
    /// Both rule sets leave exactly the same net.
    NoDifference,
}

impl Verdict {
    fn from_difference(difference: Decimal) -> Self {
        if difference > Decimal::ZERO {
            Verdict::ReformFavorable
        } else if difference < Decimal::ZERO {
            Verdict::BaselineFavorable
        } else {
            Verdict::NoDifference
        }
    }
}

/// Result of the profit comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitComparisonResult {
    /// Annual profit as provided.
    pub annual_profit: Decimal,

    /// Outcome under the baseline regime.
    pub baseline: RegimeOutcome,

    /// Outcome under the reform regime.
    pub reform: RegimeOutcome,

    /// `reform.net_after_tax − baseline.net_after_tax`; positive favors the
    /// reform.
    pub difference: Decimal,

    /// Sign classification of `difference`.
    pub verdict: Verdict,
}

/// Calculator comparing two profit regimes.
#[derive(Debug, Clone)]
pub struct ProfitComparisonWorksheet {
    baseline: ProfitRegime,
    reform: ProfitRegime,
}

impl ProfitComparisonWorksheet {
    pub fn new(
        baseline: ProfitRegime,
        reform: ProfitRegime,
    ) -> Self {
        Self { baseline, reform }
    }

    /// Validates the configured regime rates.
    pub fn validate(&self) -> Result<(), ProfitComparisonError> {
        for regime in [&self.baseline, &self.reform] {
            let corporate = regime.corporate_rate;
            if corporate < Decimal::ZERO || corporate > Decimal::ONE {
                return Err(ProfitComparisonError::InvalidCorporateRate(corporate));
            }
            let sdc = regime.sdc_rate;
            if sdc < Decimal::ZERO || sdc > Decimal::ONE {
                return Err(ProfitComparisonError::InvalidSdcRate(sdc));
            }
        }
        Ok(())
    }

    /// Calculates both regime outcomes and the signed difference.
    ///
    /// # Errors
    ///
    /// Returns [`ProfitComparisonError::NonPositiveProfit`] when
    /// `annual_profit` is zero or negative.
    pub fn calculate(
        &self,
        annual_profit: Decimal,
    ) -> Result<ProfitComparisonResult, ProfitComparisonError> {
        if annual_profit <= Decimal::ZERO {
            return Err(ProfitComparisonError::NonPositiveProfit(annual_profit));
        }

        let baseline = Self::regime_outcome(&self.baseline, annual_profit);
        let reform = Self::regime_outcome(&self.reform, annual_profit);
        let difference = reform.net_after_tax - baseline.net_after_tax;

        Ok(ProfitComparisonResult {
            annual_profit,
            baseline,
            reform,
            difference,
            verdict: Verdict::from_difference(difference),
        })
    }

    fn regime_outcome(
        regime: &ProfitRegime,
        profit: Decimal,
    ) -> RegimeOutcome {
        let corporate_tax = profit * regime.corporate_rate;
        let after_corporate_tax = profit - corporate_tax;
        let dividend_tax = after_corporate_tax * regime.sdc_rate;
        let net_after_tax = after_corporate_tax - dividend_tax;

        RegimeOutcome {
            tax_year: regime.tax_year,
            corporate_tax,
            after_corporate_tax,
            dividend_tax,
            net_after_tax,
        }
    }
}

impl Default for ProfitComparisonWorksheet {
    /// 2025 rules as the baseline, 2026 rules as the reform.
    fn default() -> Self {
        Self::new(
            ProfitRegime::for_year(TaxYear::Y2025),
            ProfitRegime::for_year(TaxYear::Y2026),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn calculate_reference_profit() {
        let worksheet = ProfitComparisonWorksheet::default();

        let result = worksheet.calculate(dec!(100000)).unwrap();

        assert_eq!(result.baseline.tax_year, TaxYear::Y2025);
        assert_eq!(result.baseline.corporate_tax, dec!(12500));
        assert_eq!(result.baseline.after_corporate_tax, dec!(87500));
        assert_eq!(result.baseline.dividend_tax, dec!(14875));
        assert_eq!(result.baseline.net_after_tax, dec!(72625));

        assert_eq!(result.reform.tax_year, TaxYear::Y2026);
        assert_eq!(result.reform.corporate_tax, dec!(15000));
        assert_eq!(result.reform.after_corporate_tax, dec!(85000));
        assert_eq!(result.reform.dividend_tax, dec!(4250));
        assert_eq!(result.reform.net_after_tax, dec!(80750));

        assert_eq!(result.difference, dec!(8125));
        assert_eq!(result.verdict, Verdict::ReformFavorable);
    }

    #[test]
    fn calculate_small_profit_keeps_the_same_verdict() {
        let worksheet = ProfitComparisonWorksheet::default();

        let result = worksheet.calculate(dec!(1)).unwrap();

        // The default regimes scale linearly, so the reform wins at any size.
        assert_eq!(result.verdict, Verdict::ReformFavorable);
        assert_eq!(result.difference, dec!(0.08125));
    }

    #[test]
    fn calculate_baseline_favorable_when_reform_rates_are_higher() {
        let baseline = ProfitRegime::for_year(TaxYear::Y2026);
        let reform = ProfitRegime::for_year(TaxYear::Y2025);
        let worksheet = ProfitComparisonWorksheet::new(baseline, reform);

        let result = worksheet.calculate(dec!(100000)).unwrap();

        assert_eq!(result.difference, dec!(-8125));
        assert_eq!(result.verdict, Verdict::BaselineFavorable);
    }

    #[test]
    fn calculate_identical_regimes_tie_exactly() {
        let regime = ProfitRegime::for_year(TaxYear::Y2026);
        let worksheet = ProfitComparisonWorksheet::new(regime, regime);

        let result = worksheet.calculate(dec!(12345.67)).unwrap();

        assert_eq!(result.difference, dec!(0));
        assert_eq!(result.verdict, Verdict::NoDifference);
    }

    #[test]
    fn calculate_zero_profit_is_an_error() {
        let worksheet = ProfitComparisonWorksheet::default();

        let result = worksheet.calculate(dec!(0));

        assert_eq!(
            result,
            Err(ProfitComparisonError::NonPositiveProfit(dec!(0)))
        );
    }

    #[test]
    fn calculate_negative_profit_is_an_error() {
        let worksheet = ProfitComparisonWorksheet::default();

        let result = worksheet.calculate(dec!(-5000));

        assert_eq!(
            result,
            Err(ProfitComparisonError::NonPositiveProfit(dec!(-5000)))
        );
    }

    #[test]
    fn validate_accepts_the_default_regimes() {
        let worksheet = ProfitComparisonWorksheet::default();

        assert_eq!(worksheet.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_out_of_range_rates() {
        let mut reform = ProfitRegime::for_year(TaxYear::Y2026);
        reform.sdc_rate = dec!(1.05);
        let worksheet =
            ProfitComparisonWorksheet::new(ProfitRegime::for_year(TaxYear::Y2025), reform);

        assert_eq!(
            worksheet.validate(),
            Err(ProfitComparisonError::InvalidSdcRate(dec!(1.05)))
        );
    }
}
