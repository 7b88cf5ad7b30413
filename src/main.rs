//! Fincast CLI
//!
//! Command-line interface for running financial trajectory projections

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use fincast::model::loader;
use fincast::{
    Account, AccountType, Condition, LedgerEntry, ProjectionEngine, ProjectionRequest,
};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fincast", about = "Month-by-month financial trajectory projection")]
struct Args {
    /// Number of months to simulate
    #[arg(long, default_value_t = 36)]
    months: u32,

    /// Projection request JSON file; a built-in sample household is used
    /// when omitted
    #[arg(long)]
    request: Option<PathBuf>,

    /// Where to write the full posted ledger as CSV
    #[arg(long, default_value = "projection_ledger.csv")]
    output: PathBuf,
}

/// A sample household: salary into checking, two debts, surplus into an
/// index fund, and a December bonus
fn sample_request() -> ProjectionRequest {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid start date");

    let mut request = ProjectionRequest::new(start);

    request.accounts.push(Account::new("Checking", 800.0).salary_deposit());
    request.accounts.push(
        Account::new("Index Fund", 5000.0)
            .with_interest_rate(0.04)
            .default_investment()
            .with_scheduled_transaction(LedgerEntry::salary_ratio("Monthly Contribution", 0.10, start)),
    );
    request.accounts.push(
        Account::new("Car Loan", -12_500.0)
            .with_interest_rate(0.069)
            .with_account_type(AccountType::StopAtZero)
            .with_scheduled_transaction(LedgerEntry::absolute("Loan Payment", 350.0, start)),
    );
    request
        .accounts
        .push(Account::new("Credit Card", -4200.0).with_interest_rate(0.199));

    request
        .income
        .push(LedgerEntry::absolute("Salary", 6400.0, start).taxable(true));
    request
        .income
        .push(LedgerEntry::absolute("Dividends", 150.0, start));

    request.expenses.push(LedgerEntry::absolute("Rent", 1850.0, start));
    request.expenses.push(LedgerEntry::absolute("Groceries", 600.0, start));
    request.expenses.push(LedgerEntry::absolute("Utilities", 240.0, start));

    // Year-end bonus: half a month of taxable income, consumed immediately
    request.conditions.push(Condition::new(
        |_, date| date.month() == 12,
        LedgerEntry::salary_ratio("Year-End Bonus", 0.5, start)
            .taxable(true)
            .one_off(true),
    ));

    request
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    println!("Fincast v0.1.0");
    println!("==============\n");

    let request = match &args.request {
        Some(path) => loader::load_request(path)
            .map_err(|e| anyhow!("failed to load request from {}: {e}", path.display()))?,
        None => sample_request(),
    };

    println!("Accounts:");
    for account in &request.accounts {
        println!(
            "  {:<12} opening {:>12.2}  rate {:>6.3}  {:?}",
            account.name, account.opening_amount, account.interest_rate, account.account_type
        );
    }
    println!();

    // Progress table, one row per simulated month
    println!("{:>5} {:>12} {:>14} {:>14}", "Month", "Date", "Checking", "Net Worth");
    println!("{}", "-".repeat(50));
    let engine = ProjectionEngine::with_observer(|request, month, date| {
        let main_balance = request
            .salary_account_index()
            .map(|idx| request.accounts[idx].balance())
            .unwrap_or(0.0);
        println!(
            "{:>5} {:>12} {:>14.2} {:>14.2}",
            month,
            date.to_string(),
            main_balance,
            request.net_worth()
        );
    });

    let months = args.months;
    let response = engine.project(&request, |_, month, _| month < months)?;

    // Write the full posted ledger to CSV
    let mut file = File::create(&args.output)
        .with_context(|| format!("unable to create {}", args.output.display()))?;
    writeln!(file, "Account,Date,Name,Amount")?;
    for account in &response.augmented_request.accounts {
        for entry in &account.transactions {
            writeln!(
                file,
                "{},{},{},{:.8}",
                account.name, entry.posted_at, entry.name, entry.amount
            )?;
        }
    }
    println!("\nFull ledger written to: {}", args.output.display());

    // Final position
    println!("\nSummary:");
    println!("  End Date:  {}", response.projection_end_date);
    println!("  Net Worth: {:.2}", response.net_worth);
    println!("\nFinal Balances:");
    for (name, balance) in response.balance_sheet() {
        println!("  {:<12} {:>14.2}", name, balance);
    }

    Ok(())
}
