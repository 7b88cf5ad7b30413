//! Projection request: accounts, catalogues, and conditional events

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::entry::LedgerEntry;

/// Predicate deciding whether a conditional event fires in a given month
pub type ConditionFn = dyn Fn(u32, NaiveDate) -> bool + Send + Sync;

/// A conditional financial event: a predicate over (month index, date)
/// paired with the income template injected whenever it fires
///
/// Conditions are kept as an ordered list and evaluated in insertion order,
/// which fixes the intra-month compounding order for salary-ratio templates.
#[derive(Clone)]
pub struct Condition {
    predicate: Arc<ConditionFn>,
    /// Income template materialized on fire
    pub template: LedgerEntry,
}

impl Condition {
    /// Pair a predicate with the template it injects
    pub fn new<F>(predicate: F, template: LedgerEntry) -> Self
    where
        F: Fn(u32, NaiveDate) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            template,
        }
    }

    /// Evaluate the predicate for the given month
    pub fn fires(&self, month_index: u32, date: NaiveDate) -> bool {
        (self.predicate)(month_index, date)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

/// Everything the engine needs to simulate one financial trajectory
///
/// The engine never mutates a caller's request; it works on a [`snapshot`]
/// and returns that snapshot, fully posted, in the response.
///
/// [`snapshot`]: ProjectionRequest::snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// All accounts; exactly one must be flagged as the salary deposit
    /// account and at most one as the default investment account
    pub accounts: Vec<Account>,

    /// Income catalogue, re-resolved and posted every month; exactly one
    /// item must match "salary"
    pub income: Vec<LedgerEntry>,

    /// Expense catalogue, re-resolved, negated, and posted every month
    pub expenses: Vec<LedgerEntry>,

    /// Conditional events; predicates are code, not data, so they are
    /// not serialized
    #[serde(skip)]
    pub conditions: Vec<Condition>,

    /// Date of the first simulated month
    pub projection_start_date: NaiveDate,
}

impl ProjectionRequest {
    /// Create an empty request starting at the given date
    pub fn new(projection_start_date: NaiveDate) -> Self {
        Self {
            accounts: Vec::new(),
            income: Vec::new(),
            expenses: Vec::new(),
            conditions: Vec::new(),
            projection_start_date,
        }
    }

    /// Produce a structurally identical, referentially independent copy
    ///
    /// Accounts, catalogues, and condition templates are deep-copied;
    /// condition predicates are behaviorless closures and are shared by
    /// reference.
    pub fn snapshot(&self) -> Self {
        Self {
            accounts: self.accounts.clone(),
            income: self.income.clone(),
            expenses: self.expenses.clone(),
            conditions: self.conditions.clone(),
            projection_start_date: self.projection_start_date,
        }
    }

    /// Index of the unique salary deposit account, if exactly one is flagged
    pub fn salary_account_index(&self) -> Option<usize> {
        let mut flagged = self
            .accounts
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_salary_deposit_account);
        match (flagged.next(), flagged.next()) {
            (Some((idx, _)), None) => Some(idx),
            _ => None,
        }
    }

    /// Index of the default investment account, if one is flagged
    pub fn investment_account_index(&self) -> Option<usize> {
        self.accounts
            .iter()
            .position(|a| a.is_default_investment_account)
    }

    /// Sum of all posted transaction amounts across accounts, opening
    /// balances excluded
    pub fn net_worth(&self) -> f64 {
        self.accounts.iter().map(|a| a.posted_total()).sum()
    }

    /// Latest posted date across all accounts
    pub fn last_posted_date(&self) -> Option<NaiveDate> {
        self.accounts
            .iter()
            .filter_map(|a| a.last_posted_date())
            .max()
    }
}
