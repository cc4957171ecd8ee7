use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Social-insurance and GESY contribution rates charged against gross pay.
///
/// Contributions are computed before tax and are unaffected by reliefs or the
/// expatriate exemption, which reduce only the tax base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionConfig {
    /// Employee social-insurance rate.
    pub social_insurance_rate: Decimal,

    /// Annual insurable-earnings ceiling for social insurance.
    /// `None` applies the rate to the full gross amount.
    pub social_insurance_cap: Option<Decimal>,

    /// General healthcare system (GESY) rate, charged on full gross with no
    /// ceiling.
    pub gesy_rate: Decimal,
}

impl ContributionConfig {
    /// Capped split-rate model: 8.8% social insurance on insurable earnings
    /// up to €66,612, plus 2.65% GESY on full gross.
    pub fn capped() -> Self {
        Self {
            social_insurance_rate: dec!(0.088),
            social_insurance_cap: Some(dec!(66612)),
            gesy_rate: dec!(0.0265),
        }
    }

    /// Legacy flat model: a single 10.95% combined charge on full gross with
    /// no ceiling and no separate GESY line.
    pub fn flat_combined() -> Self {
        Self {
            social_insurance_rate: dec!(0.1095),
            social_insurance_cap: None,
            gesy_rate: dec!(0),
        }
    }
}

impl Default for ContributionConfig {
    fn default() -> Self {
        Self::capped()
    }
}
