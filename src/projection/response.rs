//! Projection output structures

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::ProjectionRequest;

/// Complete result of a projection run
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionResponse {
    /// Latest posted transaction date across all accounts; the start date
    /// when nothing was ever posted
    pub projection_end_date: NaiveDate,

    /// Sum of all posted transaction amounts across all accounts, opening
    /// balances excluded
    pub net_worth: f64,

    /// The fully posted snapshot, exposing every account's transaction
    /// history for auditing
    pub augmented_request: ProjectionRequest,
}

impl ProjectionResponse {
    /// Aggregate the final figures out of a posted snapshot
    pub(super) fn from_request(request: ProjectionRequest) -> Self {
        let projection_end_date = request
            .last_posted_date()
            .unwrap_or(request.projection_start_date);
        let net_worth = request.net_worth();

        Self {
            projection_end_date,
            net_worth,
            augmented_request: request,
        }
    }

    /// Final balance per account, in request order
    pub fn balance_sheet(&self) -> Vec<(&str, f64)> {
        self.augmented_request
            .accounts
            .iter()
            .map(|a| (a.name.as_str(), a.balance()))
            .collect()
    }
}
