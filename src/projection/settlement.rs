//! Debt settlement sweep and surplus reinvestment

use chrono::NaiveDate;
use log::debug;

use crate::error::ProjectionError;
use crate::model::{LedgerEntry, ProjectionRequest};

use super::posting::salary_account_index;

/// Sweep the salary account's positive balance into outstanding debts,
/// highest interest rate first, then reinvest whatever remains
///
/// The sweep stops the moment the salary account balance reaches zero, so
/// a month either clears every debt or exhausts the salary account.
pub fn settle(request: &mut ProjectionRequest, date: NaiveDate) -> Result<(), ProjectionError> {
    let main_idx = salary_account_index(request)?;

    // Debt targets, highest rate first; stable sort keeps request order on ties
    let mut debt_order: Vec<usize> = (0..request.accounts.len())
        .filter(|&idx| idx != main_idx && request.accounts[idx].balance() < 0.0)
        .collect();
    debt_order.sort_by(|&a, &b| {
        request.accounts[b]
            .interest_rate
            .total_cmp(&request.accounts[a].interest_rate)
    });

    for idx in debt_order {
        let available = request.accounts[main_idx].balance();
        if available <= 0.0 {
            break;
        }

        let owed = -request.accounts[idx].balance();
        let payment = available.min(owed);
        let debt_name = request.accounts[idx].name.clone();

        debug!(
            "paying {:.2} toward {} ({:.2} outstanding)",
            payment, debt_name, owed
        );

        request.accounts[idx].post(LedgerEntry::absolute("Debt Payment", payment, date));
        request.accounts[main_idx].post(LedgerEntry::absolute(
            format!("{} Payment", debt_name),
            -payment,
            date,
        ));
    }

    // Remaining surplus goes to the default investment account
    let surplus = request.accounts[main_idx].balance();
    if surplus > 0.0 {
        let invest_idx = match request.investment_account_index() {
            Some(idx) => idx,
            None => return Err(ProjectionError::MissingInvestmentAccount { surplus }),
        };

        // A salary account doubling as the investment account keeps the
        // surplus where it already is
        if invest_idx != main_idx {
            let invest_name = request.accounts[invest_idx].name.clone();
            debug!("reinvesting surplus {:.2} into {}", surplus, invest_name);

            request.accounts[invest_idx].post(LedgerEntry::absolute(
                "Surplus Reinvestment",
                surplus,
                date,
            ));
            request.accounts[main_idx].post(LedgerEntry::absolute(
                format!("{} Deposit", invest_name),
                -surplus,
                date,
            ));
        }
    }

    Ok(())
}
