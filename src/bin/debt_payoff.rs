//! Debt payoff schedule
//!
//! Runs a projection until every debt account clears, using the
//! custom-predicate form of the termination evaluator, and prints the
//! month-by-month paydown.

use chrono::NaiveDate;
use fincast::{Account, AccountType, LedgerEntry, ProjectionEngine, ProjectionRequest};
use std::time::Instant;

/// Hard stop so an unpayable configuration cannot loop forever
const MAX_MONTHS: u32 = 600;

fn build_request() -> ProjectionRequest {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid start date");

    let mut request = ProjectionRequest::new(start);

    request.accounts.push(
        Account::new("Checking", 0.0)
            .salary_deposit()
            .default_investment(),
    );
    request.accounts.push(
        Account::new("Credit Card", -7800.0)
            .with_interest_rate(0.219)
            .with_account_type(AccountType::StopAtZero),
    );
    request.accounts.push(
        Account::new("Car Loan", -15_400.0)
            .with_interest_rate(0.072)
            .with_account_type(AccountType::StopAtZero),
    );
    request.accounts.push(
        Account::new("Student Loan", -22_000.0)
            .with_interest_rate(0.048)
            .with_account_type(AccountType::StopAtZero),
    );

    request
        .income
        .push(LedgerEntry::absolute("Salary", 5900.0, start).taxable(true));

    request.expenses.push(LedgerEntry::absolute("Rent", 1700.0, start));
    request.expenses.push(LedgerEntry::absolute("Living Costs", 1450.0, start));

    request
}

fn main() {
    env_logger::init();

    let start = Instant::now();
    let request = build_request();

    let total_debt: f64 = request
        .accounts
        .iter()
        .map(|a| a.balance().min(0.0))
        .sum();
    println!("Starting debt: {:.2}", total_debt);
    println!("{:>5} {:>12} {:>14}", "Month", "Date", "Remaining");
    println!("{}", "-".repeat(34));

    let engine = ProjectionEngine::with_observer(|request, month, date| {
        let remaining: f64 = request
            .accounts
            .iter()
            .map(|a| a.balance().min(0.0))
            .sum();
        println!("{:>5} {:>12} {:>14.2}", month, date.to_string(), remaining);
    });

    let response = engine
        .project(&request, |request, month, _| {
            month < MAX_MONTHS && request.accounts.iter().any(|a| a.balance() < 0.0)
        })
        .expect("projection failed");

    let months_simulated = response
        .augmented_request
        .accounts
        .iter()
        .flat_map(|a| &a.transactions)
        .map(|t| t.posted_at)
        .collect::<std::collections::BTreeSet<_>>()
        .len();

    println!("\nDebt-free after {} months ({:?})", months_simulated, start.elapsed());
    println!("Debt-free date: {}", response.projection_end_date);
    for (name, balance) in response.balance_sheet() {
        println!("  {:<14} {:>14.2}", name, balance);
    }
}
