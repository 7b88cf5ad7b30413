//! Core projection engine: the month-stepping loop and its termination

use chrono::{Months, NaiveDate};
use log::info;

use crate::error::ProjectionError;
use crate::model::ProjectionRequest;

use super::conditions;
use super::posting::{self, salary_account_index};
use super::response::ProjectionResponse;
use super::settlement;

/// Callback invoked once per simulated month, before that month's postings
pub type MonthObserver = Box<dyn Fn(&ProjectionRequest, u32, NaiveDate)>;

/// Main projection engine
///
/// The engine never mutates the caller's request: every run works on a
/// snapshot, which comes back as the response's `augmented_request`. The
/// loop itself is a plain synchronous state machine driven by a
/// "should continue" predicate re-evaluated every month.
#[derive(Default)]
pub struct ProjectionEngine {
    observer: Option<MonthObserver>,
}

impl ProjectionEngine {
    /// Create an engine with no observer
    pub fn new() -> Self {
        Self { observer: None }
    }

    /// Create an engine that notifies the observer once per simulated month
    pub fn with_observer<F>(observer: F) -> Self
    where
        F: Fn(&ProjectionRequest, u32, NaiveDate) + 'static,
    {
        Self {
            observer: Some(Box::new(observer)),
        }
    }

    /// Run the projection while `should_continue` returns true
    ///
    /// Month indices are 0-based; the first simulated month carries the
    /// request's start date. Malformed requests fail before any month is
    /// simulated. A predicate that never returns false runs forever;
    /// bounding it (e.g. with a maximum month index) is the caller's
    /// responsibility.
    pub fn project<F>(
        &self,
        request: &ProjectionRequest,
        mut should_continue: F,
    ) -> Result<ProjectionResponse, ProjectionError>
    where
        F: FnMut(&ProjectionRequest, u32, NaiveDate) -> bool,
    {
        validate(request)?;

        let mut request = request.snapshot();
        let mut month_index: u32 = 0;
        let mut date = request.projection_start_date;

        while should_continue(&request, month_index, date) {
            if let Some(observer) = &self.observer {
                observer(&request, month_index, date);
            }

            conditions::inject(&mut request, month_index, date)?;
            posting::post_month(&mut request, date)?;
            settlement::settle(&mut request, date)?;
            conditions::purge_one_offs(&mut request.income);

            month_index += 1;
            date = date + Months::new(1);
        }

        info!(
            "projection terminated after {} months, net worth {:.2}",
            month_index,
            request.net_worth()
        );

        Ok(ProjectionResponse::from_request(request))
    }

    /// Run until the simulation reaches the target calendar date
    pub fn project_until_date(
        &self,
        request: &ProjectionRequest,
        target: NaiveDate,
    ) -> Result<ProjectionResponse, ProjectionError> {
        self.project(request, |_, _, date| date < target)
    }

    /// Run until aggregate net worth reaches the target
    pub fn project_until_net_worth(
        &self,
        request: &ProjectionRequest,
        target: f64,
    ) -> Result<ProjectionResponse, ProjectionError> {
        self.project(request, |request, _, _| request.net_worth() < target)
    }
}

/// Fail-fast request validation, run before the first simulated month
fn validate(request: &ProjectionRequest) -> Result<(), ProjectionError> {
    salary_account_index(request)?;

    let investment_count = request
        .accounts
        .iter()
        .filter(|a| a.is_default_investment_account)
        .count();
    if investment_count > 1 {
        return Err(ProjectionError::MultipleInvestmentAccounts(investment_count));
    }

    super::amount::month_salary(&request.income)?;

    Ok(())
}
