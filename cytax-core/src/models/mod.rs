mod contribution_config;
mod regime;
mod relief_schedule;
mod tax_bracket;
mod tax_year;

pub use contribution_config::ContributionConfig;
pub use regime::ProfitRegime;
pub use relief_schedule::ReliefSchedule;
pub use tax_bracket::TaxBracket;
pub use tax_year::TaxYear;
