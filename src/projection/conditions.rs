//! Conditional event injection into the income catalogue

use chrono::NaiveDate;
use log::debug;

use crate::error::ProjectionError;
use crate::model::{AmountKind, LedgerEntry, ProjectionRequest};

use super::amount;

/// Evaluate every condition for the month and materialize the templates of
/// those that fire into the income catalogue
///
/// Salary-ratio templates resolve against the taxable income total
/// accumulated so far this month, so taxable injections compound with each
/// other in condition order. Injected items are absolute from then on.
pub fn inject(
    request: &mut ProjectionRequest,
    month_index: u32,
    date: NaiveDate,
) -> Result<(), ProjectionError> {
    if request.conditions.is_empty() {
        return Ok(());
    }

    let salary = amount::month_salary(&request.income)?;
    let mut taxable_total = amount::taxable_income_total(&request.income, salary);

    // Split borrow: conditions are read while income grows
    let ProjectionRequest {
        conditions, income, ..
    } = request;

    for condition in conditions.iter() {
        if !condition.fires(month_index, date) {
            continue;
        }

        let mut entry = condition.template.clone();
        entry.amount = match entry.kind {
            AmountKind::Absolute => entry.amount,
            AmountKind::SalaryRatio => entry.amount * taxable_total,
        };
        entry.kind = AmountKind::Absolute;
        entry.posted_at = date;

        debug!(
            "month {}: condition fired, injecting {} = {:.2}",
            month_index, entry.name, entry.amount
        );

        if entry.taxable {
            taxable_total += entry.amount;
        }
        income.push(entry);
    }

    Ok(())
}

/// Remove every one-off item from the income catalogue at month end
///
/// A one-off item is consumed after exactly one month of presence, whether
/// or not it was injected this particular month.
pub fn purge_one_offs(income: &mut Vec<LedgerEntry>) {
    income.retain(|entry| !entry.one_off);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Condition;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn base_request() -> ProjectionRequest {
        let mut request = ProjectionRequest::new(date(2025, 1, 1));
        request
            .income
            .push(LedgerEntry::absolute("Salary", 4000.0, date(2025, 1, 1)).taxable(true));
        request
    }

    #[test]
    fn test_non_firing_condition_injects_nothing() {
        let mut request = base_request();
        request.conditions.push(Condition::new(
            |_, d| d.month() == 12,
            LedgerEntry::absolute("Bonus", 1000.0, date(2025, 1, 1)),
        ));

        inject(&mut request, 0, date(2025, 1, 1)).unwrap();
        assert_eq!(request.income.len(), 1);
    }

    #[test]
    fn test_injection_marks_absolute_and_stamps_date() {
        let mut request = base_request();
        request.conditions.push(Condition::new(
            |month, _| month == 2,
            LedgerEntry::salary_ratio("Leave Payout", 0.5, date(2025, 1, 1)),
        ));

        inject(&mut request, 2, date(2025, 3, 1)).unwrap();

        let injected = request.income.last().unwrap();
        assert_eq!(injected.kind, AmountKind::Absolute);
        // 50% of the 4000 taxable total
        assert_eq!(injected.amount, 2000.0);
        assert_eq!(injected.posted_at, date(2025, 3, 1));
    }

    #[test]
    fn test_taxable_injections_compound_in_order() {
        let mut request = base_request();
        request.conditions.push(Condition::new(
            |_, _| true,
            LedgerEntry::absolute("Bonus", 1000.0, date(2025, 1, 1)).taxable(true),
        ));
        request.conditions.push(Condition::new(
            |_, _| true,
            LedgerEntry::salary_ratio("Profit Share", 0.1, date(2025, 1, 1)),
        ));

        inject(&mut request, 0, date(2025, 1, 1)).unwrap();

        // Second condition sees 4000 + 1000 of taxable income
        let profit_share = request.income.last().unwrap();
        assert_eq!(profit_share.amount, 500.0);
    }

    #[test]
    fn test_non_taxable_injection_does_not_compound() {
        let mut request = base_request();
        request.conditions.push(Condition::new(
            |_, _| true,
            LedgerEntry::absolute("Gift", 1000.0, date(2025, 1, 1)),
        ));
        request.conditions.push(Condition::new(
            |_, _| true,
            LedgerEntry::salary_ratio("Profit Share", 0.1, date(2025, 1, 1)),
        ));

        inject(&mut request, 0, date(2025, 1, 1)).unwrap();

        // Gift is not taxable; the ratio still sees only the 4000 salary
        assert_eq!(request.income.last().unwrap().amount, 400.0);
    }

    #[test]
    fn test_purge_removes_all_one_offs() {
        let mut income = vec![
            LedgerEntry::absolute("Salary", 4000.0, date(2025, 1, 1)),
            LedgerEntry::absolute("Bonus", 1000.0, date(2025, 1, 1)).one_off(true),
            LedgerEntry::absolute("Dividends", 150.0, date(2025, 1, 1)),
        ];

        purge_one_offs(&mut income);

        assert_eq!(income.len(), 2);
        assert!(income.iter().all(|e| !e.one_off));
    }
}
