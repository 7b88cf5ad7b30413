//! Scenario runner for projecting one request under many stopping rules
//!
//! Holds a base request once, then allows running many projections with
//! different termination rules without rebuilding the accounts and
//! catalogues. Each run snapshots the base request, so runs never see each
//! other's postings.

use chrono::NaiveDate;

use crate::error::ProjectionError;
use crate::model::ProjectionRequest;
use crate::projection::{ProjectionEngine, ProjectionResponse};

/// Pre-built scenario runner over a single base request
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(request);
///
/// // Compare horizons without rebuilding the request
/// for months in [12, 60, 120] {
///     let response = runner.run_months(months)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// The request every run starts from
    base_request: ProjectionRequest,
}

impl ScenarioRunner {
    /// Create a runner around a base request
    pub fn new(base_request: ProjectionRequest) -> Self {
        Self { base_request }
    }

    /// Run for a fixed number of months
    pub fn run_months(&self, months: u32) -> Result<ProjectionResponse, ProjectionError> {
        self.run_with(|_, month, _| month < months)
    }

    /// Run until the simulation reaches the target calendar date
    pub fn run_until_date(&self, target: NaiveDate) -> Result<ProjectionResponse, ProjectionError> {
        ProjectionEngine::new().project_until_date(&self.base_request, target)
    }

    /// Run until aggregate net worth reaches the target
    pub fn run_until_net_worth(&self, target: f64) -> Result<ProjectionResponse, ProjectionError> {
        ProjectionEngine::new().project_until_net_worth(&self.base_request, target)
    }

    /// Run under an arbitrary "should continue" predicate
    pub fn run_with<F>(&self, should_continue: F) -> Result<ProjectionResponse, ProjectionError>
    where
        F: FnMut(&ProjectionRequest, u32, NaiveDate) -> bool,
    {
        ProjectionEngine::new().project(&self.base_request, should_continue)
    }

    /// Run a set of fixed horizons against the same base request
    pub fn run_horizons(&self, horizons: &[u32]) -> Result<Vec<ProjectionResponse>, ProjectionError> {
        horizons.iter().map(|&months| self.run_months(months)).collect()
    }

    /// Get reference to the base request for inspection
    pub fn request(&self) -> &ProjectionRequest {
        &self.base_request
    }

    /// Get mutable reference to the base request for customization
    pub fn request_mut(&mut self) -> &mut ProjectionRequest {
        &mut self.base_request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Account, LedgerEntry};
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_request() -> ProjectionRequest {
        let mut request = ProjectionRequest::new(date(2025, 1, 1));
        request.accounts.push(
            Account::new("Checking", 0.0)
                .salary_deposit()
                .default_investment(),
        );
        request
            .income
            .push(LedgerEntry::absolute("Salary", 4000.0, date(2025, 1, 1)).taxable(true));
        request
            .expenses
            .push(LedgerEntry::absolute("Rent", 1500.0, date(2025, 1, 1)));
        request
    }

    #[test]
    fn test_horizons_scale_linearly() {
        let runner = ScenarioRunner::new(sample_request());
        let responses = runner.run_horizons(&[1, 6, 12]).unwrap();

        assert_eq!(responses.len(), 3);
        assert_relative_eq!(responses[0].net_worth, 2500.0);
        assert_relative_eq!(responses[1].net_worth, 15_000.0);
        assert_relative_eq!(responses[2].net_worth, 30_000.0);
    }

    #[test]
    fn test_runs_are_isolated() {
        let runner = ScenarioRunner::new(sample_request());
        runner.run_months(12).unwrap();

        // The base request is untouched by previous runs
        assert!(runner.request().accounts[0].transactions.is_empty());
        let again = runner.run_months(1).unwrap();
        assert_relative_eq!(again.net_worth, 2500.0);
    }

    #[test]
    fn test_net_worth_target() {
        let runner = ScenarioRunner::new(sample_request());
        let response = runner.run_until_net_worth(10_000.0).unwrap();

        // 2500/month surplus crosses 10k in the fourth month
        assert_relative_eq!(response.net_worth, 10_000.0);
        assert_eq!(response.projection_end_date, date(2025, 4, 1));
    }

    #[test]
    fn test_custom_predicate() {
        let runner = ScenarioRunner::new(sample_request());
        let response = runner
            .run_with(|request, month, _| month < 60 && request.net_worth() < 5000.0)
            .unwrap();

        assert_relative_eq!(response.net_worth, 5000.0);
    }
}
