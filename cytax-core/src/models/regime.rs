use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::TaxYear;

/// Corporate-tax and dividend special-defense-contribution (SDC) rates for
/// one rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitRegime {
    pub tax_year: TaxYear,
    pub corporate_rate: Decimal,
    pub sdc_rate: Decimal,
}

impl ProfitRegime {
    pub fn for_year(year: TaxYear) -> Self {
        match year {
            TaxYear::Y2025 => Self {
                tax_year: year,
                corporate_rate: dec!(0.125),
                sdc_rate: dec!(0.17),
            },
            TaxYear::Y2026 => Self {
                tax_year: year,
                corporate_rate: dec!(0.15),
                sdc_rate: dec!(0.05),
            },
        }
    }
}
