//! Ratio-vs-absolute amount resolution against the month's salary

use crate::error::ProjectionError;
use crate::model::{AmountKind, LedgerEntry};

/// Resolve an entry's nominal amount to an absolute currency amount
///
/// Ratio resolution is a one-way conversion performed fresh every month;
/// callers treat the result as absolute from here on.
pub fn resolve(entry: &LedgerEntry, month_salary: f64) -> f64 {
    match entry.kind {
        AmountKind::Absolute => entry.amount,
        AmountKind::SalaryRatio => entry.amount * month_salary,
    }
}

/// The month's salary: the amount of the single income item whose name
/// contains "salary" (case-insensitive)
///
/// Zero or multiple matches is a configuration error.
pub fn month_salary(income: &[LedgerEntry]) -> Result<f64, ProjectionError> {
    let matches: Vec<&LedgerEntry> = income.iter().filter(|e| e.is_salary()).collect();

    match matches.as_slice() {
        [] => Err(ProjectionError::MissingSalaryIncome),
        [salary] => Ok(salary.amount),
        many => Err(ProjectionError::AmbiguousSalaryIncome(many.len())),
    }
}

/// Total taxable income for the month, with ratio items resolved against
/// the given salary
pub fn taxable_income_total(income: &[LedgerEntry], month_salary: f64) -> f64 {
    income
        .iter()
        .filter(|e| e.taxable)
        .map(|e| resolve(e, month_salary))
        .sum()
}
