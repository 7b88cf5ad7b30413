//! Account data structures and balance derivation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::LedgerEntry;

/// Behavior class of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    /// Ordinary account, always posted
    Standard,
    /// Recurring-schedule account, always posted
    Repeat,
    /// Stops receiving scheduled deposits once its balance is non-negative
    /// (typically a debt being paid down)
    StopAtZero,
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Standard
    }
}

/// A named financial container with an opening balance, optional interest
/// rate, and an append-only history of posted entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique display name
    pub name: String,

    /// Balance carried into the projection; never part of the posted history
    pub opening_amount: f64,

    /// Annual interest rate, credited monthly as rate / 12
    #[serde(default)]
    pub interest_rate: f64,

    /// Behavior class
    #[serde(default)]
    pub account_type: AccountType,

    /// Credit limit on the account
    #[serde(default)]
    pub credit_limit: f64,

    /// Last date (exclusive) the account participates in monthly posting
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,

    /// Receives all income/expense lines; exactly one per request
    #[serde(default)]
    pub is_salary_deposit_account: bool,

    /// Receives end-of-month surplus; at most one per request
    #[serde(default)]
    pub is_default_investment_account: bool,

    /// Templates re-applied every simulated month
    #[serde(default)]
    pub scheduled_transactions: Vec<LedgerEntry>,

    /// Append-only posted history
    #[serde(default)]
    pub transactions: Vec<LedgerEntry>,
}

impl Account {
    /// Create an account with the given name and opening balance
    pub fn new(name: impl Into<String>, opening_amount: f64) -> Self {
        Self {
            name: name.into(),
            opening_amount,
            interest_rate: 0.0,
            account_type: AccountType::Standard,
            credit_limit: 0.0,
            expiration_date: None,
            is_salary_deposit_account: false,
            is_default_investment_account: false,
            scheduled_transactions: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// Set the annual interest rate
    pub fn with_interest_rate(mut self, rate: f64) -> Self {
        self.interest_rate = rate;
        self
    }

    /// Set the behavior class
    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = account_type;
        self
    }

    /// Set the expiration date
    pub fn with_expiration_date(mut self, date: NaiveDate) -> Self {
        self.expiration_date = Some(date);
        self
    }

    /// Flag as the salary deposit account
    pub fn salary_deposit(mut self) -> Self {
        self.is_salary_deposit_account = true;
        self
    }

    /// Flag as the default investment account
    pub fn default_investment(mut self) -> Self {
        self.is_default_investment_account = true;
        self
    }

    /// Add a scheduled transaction template
    pub fn with_scheduled_transaction(mut self, entry: LedgerEntry) -> Self {
        self.scheduled_transactions.push(entry);
        self
    }

    /// Current balance: opening amount plus everything ever posted
    pub fn balance(&self) -> f64 {
        self.opening_amount + self.posted_total()
    }

    /// Sum of posted transaction amounts, opening balance excluded
    pub fn posted_total(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Append an entry to the posted history
    pub fn post(&mut self, entry: LedgerEntry) {
        self.transactions.push(entry);
    }

    /// Whether the account participates in posting on the given date
    pub fn active_on(&self, date: NaiveDate) -> bool {
        match self.expiration_date {
            Some(expiration) => expiration > date,
            None => true,
        }
    }

    /// Whether a stop-at-zero account has been paid off and no longer
    /// receives scheduled deposits
    pub fn is_settled(&self) -> bool {
        self.account_type == AccountType::StopAtZero && self.balance() >= 0.0
    }

    /// Most recent posted date, if anything has been posted
    pub fn last_posted_date(&self) -> Option<NaiveDate> {
        self.transactions.iter().map(|t| t.posted_at).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_balance_derivation() {
        let mut account = Account::new("Checking", 250.0);
        assert_eq!(account.balance(), 250.0);

        account.post(LedgerEntry::absolute("Salary", 5000.0, date(2025, 1, 1)));
        account.post(LedgerEntry::absolute("Rent", -1800.0, date(2025, 1, 1)));

        assert_eq!(account.posted_total(), 3200.0);
        assert_eq!(account.balance(), 3450.0);
    }

    #[test]
    fn test_expiration_window() {
        let account = Account::new("Car Loan", -9000.0)
            .with_expiration_date(date(2026, 6, 1));

        assert!(account.active_on(date(2026, 5, 1)));
        assert!(!account.active_on(date(2026, 6, 1)));
        assert!(!account.active_on(date(2026, 7, 1)));

        let open_ended = Account::new("Checking", 0.0);
        assert!(open_ended.active_on(date(2099, 1, 1)));
    }

    #[test]
    fn test_stop_at_zero_settled() {
        let mut debt = Account::new("Card", -400.0)
            .with_account_type(AccountType::StopAtZero);
        assert!(!debt.is_settled());

        debt.post(LedgerEntry::absolute("Debt Payment", 400.0, date(2025, 2, 1)));
        assert!(debt.is_settled());

        // Standard accounts never report settled, whatever the balance
        let standard = Account::new("Checking", 100.0);
        assert!(!standard.is_settled());
    }

    #[test]
    fn test_last_posted_date() {
        let mut account = Account::new("Checking", 0.0);
        assert_eq!(account.last_posted_date(), None);

        account.post(LedgerEntry::absolute("A", 1.0, date(2025, 3, 1)));
        account.post(LedgerEntry::absolute("B", 1.0, date(2025, 1, 1)));
        assert_eq!(account.last_posted_date(), Some(date(2025, 3, 1)));
    }
}
