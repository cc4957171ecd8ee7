use std::fmt;
use std::sync::LazyLock;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::TaxBracket;

/// Tax year selector for the progressive income-tax schedule.
///
/// Each year carries its own bracket table; adding a future year is a data
/// addition (a new variant plus its table), not a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaxYear {
    Y2025,
    Y2026,
}

static BRACKETS_2025: LazyLock<Vec<TaxBracket>> = LazyLock::new(|| {
    vec![
        TaxBracket {
            min_income: dec!(0),
            max_income: Some(dec!(19500)),
            tax_rate: dec!(0),
        },
        TaxBracket {
            min_income: dec!(19500),
            max_income: Some(dec!(28000)),
            tax_rate: dec!(0.20),
        },
        TaxBracket {
            min_income: dec!(28000),
            max_income: Some(dec!(36300)),
            tax_rate: dec!(0.25),
        },
        TaxBracket {
            min_income: dec!(36300),
            max_income: Some(dec!(60000)),
            tax_rate: dec!(0.30),
        },
        TaxBracket {
            min_income: dec!(60000),
            max_income: None,
            tax_rate: dec!(0.35),
        },
    ]
});

static BRACKETS_2026: LazyLock<Vec<TaxBracket>> = LazyLock::new(|| {
    vec![
        TaxBracket {
            min_income: dec!(0),
            max_income: Some(dec!(22000)),
            tax_rate: dec!(0),
        },
        TaxBracket {
            min_income: dec!(22000),
            max_income: Some(dec!(32000)),
            tax_rate: dec!(0.20),
        },
        TaxBracket {
            min_income: dec!(32000),
            max_income: Some(dec!(42000)),
            tax_rate: dec!(0.25),
        },
        TaxBracket {
            min_income: dec!(42000),
            max_income: Some(dec!(72000)),
            tax_rate: dec!(0.30),
        },
        TaxBracket {
            min_income: dec!(72000),
            max_income: None,
            tax_rate: dec!(0.35),
        },
    ]
});

impl TaxYear {
    pub const ALL: [TaxYear; 2] = [TaxYear::Y2025, TaxYear::Y2026];

    pub fn from_calendar_year(year: i32) -> Option<Self> {
        match year {
            2025 => Some(TaxYear::Y2025),
            2026 => Some(TaxYear::Y2026),
            _ => None,
        }
    }

    pub fn as_calendar_year(self) -> i32 {
        match self {
            TaxYear::Y2025 => 2025,
            TaxYear::Y2026 => 2026,
        }
    }

    /// Progressive bracket table for this year.
    ///
    /// Tables are sorted by `min_income` ascending, non-overlapping, start at
    /// zero and end with an open bracket (`max_income: None`).
    pub fn brackets(self) -> &'static [TaxBracket] {
        match self {
            TaxYear::Y2025 => &BRACKETS_2025,
            TaxYear::Y2026 => &BRACKETS_2026,
        }
    }
}

impl fmt::Display for TaxYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_calendar_year())
    }
}
