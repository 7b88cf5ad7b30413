//! Monthly ledger posting: income, expenses, scheduled transactions, interest

use chrono::NaiveDate;
use log::debug;

use crate::error::ProjectionError;
use crate::model::{LedgerEntry, ProjectionRequest};

use super::amount;

/// Index of the unique salary deposit account
pub(super) fn salary_account_index(
    request: &ProjectionRequest,
) -> Result<usize, ProjectionError> {
    let flagged: Vec<usize> = request
        .accounts
        .iter()
        .enumerate()
        .filter(|(_, a)| a.is_salary_deposit_account)
        .map(|(idx, _)| idx)
        .collect();

    match flagged.as_slice() {
        [] => Err(ProjectionError::MissingSalaryDepositAccount),
        [idx] => Ok(*idx),
        many => Err(ProjectionError::MultipleSalaryDepositAccounts(many.len())),
    }
}

/// Post one month of activity across all accounts
///
/// Income and expense catalogue lines land on the salary deposit account;
/// each active account then receives its scheduled transactions (funded by
/// a matching deposit from the salary account) and its monthly interest.
pub fn post_month(request: &mut ProjectionRequest, date: NaiveDate) -> Result<(), ProjectionError> {
    let salary = amount::month_salary(&request.income)?;
    let main_idx = salary_account_index(request)?;

    // Income credits and expense debits for the month
    let mut lines: Vec<LedgerEntry> = Vec::with_capacity(request.income.len() + request.expenses.len());
    for item in &request.income {
        lines.push(LedgerEntry::absolute(
            item.name.clone(),
            amount::resolve(item, salary),
            date,
        ));
    }
    for item in &request.expenses {
        lines.push(LedgerEntry::absolute(
            item.name.clone(),
            -amount::resolve(item, salary),
            date,
        ));
    }
    for line in lines {
        request.accounts[main_idx].post(line);
    }

    // Scheduled transactions and interest, account by account
    for idx in 0..request.accounts.len() {
        let account = &request.accounts[idx];

        if !account.active_on(date) {
            continue;
        }
        if account.is_settled() {
            debug!("{} is settled, skipping scheduled deposits", account.name);
            continue;
        }

        let resolved: Vec<LedgerEntry> = account
            .scheduled_transactions
            .iter()
            .map(|t| LedgerEntry::absolute(t.name.clone(), amount::resolve(t, salary), date))
            .collect();

        // Positive scheduled amounts are funded out of the salary account
        let deposit: f64 = resolved.iter().map(|t| t.amount).filter(|&a| a > 0.0).sum();
        if deposit > 0.0 {
            let name = format!("{} Deposit", request.accounts[idx].name);
            request.accounts[main_idx].post(LedgerEntry::absolute(name, -deposit, date));
        }

        for entry in resolved {
            request.accounts[idx].post(entry);
        }

        let account = &mut request.accounts[idx];
        let interest = account.interest_rate * account.posted_total() / 12.0;
        if interest != 0.0 {
            account.post(LedgerEntry::absolute("Interest", interest, date));
        }
    }

    Ok(())
}
