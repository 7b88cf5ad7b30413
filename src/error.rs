//! Error taxonomy for projection runs
//!
//! Everything here is a configuration or programming error; the engine is a
//! deterministic in-memory computation with no transient failures and no
//! retries.

use thiserror::Error;

/// Fatal configuration errors surfaced before or during a projection run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// No income item whose name contains "salary"
    #[error("no income item matching \"salary\" in the income catalogue")]
    MissingSalaryIncome,

    /// More than one income item matches "salary"
    #[error("{0} income items match \"salary\"; exactly one is required")]
    AmbiguousSalaryIncome(usize),

    /// No account is flagged as the salary deposit account
    #[error("no account is flagged as the salary deposit account")]
    MissingSalaryDepositAccount,

    /// More than one account is flagged as the salary deposit account
    #[error("{0} accounts are flagged as the salary deposit account; exactly one is required")]
    MultipleSalaryDepositAccounts(usize),

    /// A surplus is due for reinvestment but no account is flagged to
    /// receive it
    #[error("surplus of {surplus:.2} is due but no account is flagged as the default investment account")]
    MissingInvestmentAccount { surplus: f64 },

    /// More than one account is flagged as the default investment account
    #[error("{0} accounts are flagged as the default investment account; at most one is allowed")]
    MultipleInvestmentAccounts(usize),
}
