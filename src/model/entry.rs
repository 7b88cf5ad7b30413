//! Ledger entry data structures shared by catalogues, schedules, and histories

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a nominal amount is interpreted when resolved for a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountKind {
    /// Amount is a currency value, used as-is
    Absolute,
    /// Amount is a fraction of the month's resolved salary
    SalaryRatio,
}

/// A single signed monetary item: a catalogue template, a scheduled
/// transaction, or a posting in an account's history
///
/// Positive amounts are credits, negative amounts are debits. Once posted
/// to an account's transaction history an entry is never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Display name; income items containing "salary" (any case) are the
    /// month's salary source
    pub name: String,

    /// Signed amount, or salary fraction for `SalaryRatio` entries
    pub amount: f64,

    /// Interpretation of `amount`
    pub kind: AmountKind,

    /// Simulated date the entry was posted (or the template's nominal date)
    pub posted_at: NaiveDate,

    /// Counts toward the month's taxable income total
    #[serde(default)]
    pub taxable: bool,

    /// Purged from the income catalogue after one month of presence
    #[serde(default)]
    pub one_off: bool,
}

impl LedgerEntry {
    /// Create an absolute-amount entry
    pub fn absolute(name: impl Into<String>, amount: f64, posted_at: NaiveDate) -> Self {
        Self {
            name: name.into(),
            amount,
            kind: AmountKind::Absolute,
            posted_at,
            taxable: false,
            one_off: false,
        }
    }

    /// Create a salary-ratio entry (e.g. 0.25 = 25% of the month's salary)
    pub fn salary_ratio(name: impl Into<String>, ratio: f64, posted_at: NaiveDate) -> Self {
        Self {
            name: name.into(),
            amount: ratio,
            kind: AmountKind::SalaryRatio,
            posted_at,
            taxable: false,
            one_off: false,
        }
    }

    /// Mark the entry as taxable income
    pub fn taxable(mut self, taxable: bool) -> Self {
        self.taxable = taxable;
        self
    }

    /// Mark the entry as consumed after one month in the catalogue
    pub fn one_off(mut self, one_off: bool) -> Self {
        self.one_off = one_off;
        self
    }

    /// Whether this entry is the salary income item
    pub fn is_salary(&self) -> bool {
        self.name.to_lowercase().contains("salary")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_salary_match_is_case_insensitive() {
        let d = date(2025, 1, 1);
        assert!(LedgerEntry::absolute("Salary", 5000.0, d).is_salary());
        assert!(LedgerEntry::absolute("NET SALARY", 5000.0, d).is_salary());
        assert!(LedgerEntry::absolute("monthly salary (net)", 5000.0, d).is_salary());
        assert!(!LedgerEntry::absolute("Dividends", 120.0, d).is_salary());
    }

    #[test]
    fn test_builder_flags() {
        let entry = LedgerEntry::absolute("Bonus", 1000.0, date(2025, 12, 1))
            .taxable(true)
            .one_off(true);

        assert!(entry.taxable);
        assert!(entry.one_off);
        assert_eq!(entry.kind, AmountKind::Absolute);
    }
}
