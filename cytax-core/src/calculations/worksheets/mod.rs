//! Calculator worksheet implementations.
//!
//! Each worksheet is a pure function of a typed input record to a typed
//! result record; nothing is retained between invocations.

pub mod business;
pub mod salary;

pub use business::{
    ProfitComparisonError, ProfitComparisonResult, ProfitComparisonWorksheet, RegimeOutcome,
    Verdict,
};
pub use salary::{
    ReliefClaim, SalaryWorksheet, SalaryWorksheetError, SalaryWorksheetInput,
    SalaryWorksheetResult,
};
