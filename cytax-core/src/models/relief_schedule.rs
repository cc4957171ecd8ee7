use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Relief amounts and caps deducted from the tax base.
///
/// All reliefs reduce taxable income only; the social-insurance/GESY base is
/// never reduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefSchedule {
    /// Fixed allowance by number of dependent children; index 0 holds the
    /// one-child amount. A step table, not a per-child multiplier.
    pub child_allowances: Vec<Decimal>,

    /// Ceiling on the housing-loan-interest relief.
    pub housing_interest_cap: Decimal,

    /// Ceiling on the rent relief.
    pub rent_cap: Decimal,

    /// Ceiling on the green-investment relief.
    pub green_investment_cap: Decimal,

    /// Gross income above which the expatriate exemption applies.
    pub expat_income_threshold: Decimal,

    /// Fraction of gross income exempted for qualifying expatriates.
    pub expat_exempt_fraction: Decimal,
}

impl ReliefSchedule {
    /// Allowance for the given number of dependent children.
    ///
    /// The published table stops at five children; counts beyond the table
    /// carry no allowance.
    pub fn child_allowance(&self, children: u32) -> Decimal {
        if children == 0 {
            return Decimal::ZERO;
        }
        match self.child_allowances.get(children as usize - 1) {
            Some(amount) => *amount,
            None => {
                warn!(children, "no child allowance defined for this count; applying none");
                Decimal::ZERO
            }
        }
    }
}

impl Default for ReliefSchedule {
    fn default() -> Self {
        Self {
            child_allowances: vec![
                dec!(1000),
                dec!(2250),
                dec!(3750),
                dec!(5500),
                dec!(7500),
            ],
            housing_interest_cap: dec!(2000),
            rent_cap: dec!(2000),
            green_investment_cap: dec!(1000),
            expat_income_threshold: dec!(55000),
            expat_exempt_fraction: dec!(0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn child_allowance_follows_the_step_table() {
        let schedule = ReliefSchedule::default();

        assert_eq!(schedule.child_allowance(1), dec!(1000));
        assert_eq!(schedule.child_allowance(2), dec!(2250));
        assert_eq!(schedule.child_allowance(3), dec!(3750));
        assert_eq!(schedule.child_allowance(4), dec!(5500));
        assert_eq!(schedule.child_allowance(5), dec!(7500));
    }

    #[test]
    fn child_allowance_zero_children() {
        let schedule = ReliefSchedule::default();

        assert_eq!(schedule.child_allowance(0), Decimal::ZERO);
    }

    #[test]
    fn child_allowance_beyond_the_table_is_none() {
        let schedule = ReliefSchedule::default();

        assert_eq!(schedule.child_allowance(6), Decimal::ZERO);
        assert_eq!(schedule.child_allowance(12), Decimal::ZERO);
    }

    #[test]
    fn default_caps() {
        let schedule = ReliefSchedule::default();

        assert_eq!(schedule.housing_interest_cap, dec!(2000));
        assert_eq!(schedule.rent_cap, dec!(2000));
        assert_eq!(schedule.green_investment_cap, dec!(1000));
        assert_eq!(schedule.expat_income_threshold, dec!(55000));
        assert_eq!(schedule.expat_exempt_fraction, dec!(0.5));
    }
}
