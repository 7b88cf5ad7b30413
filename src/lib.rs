//! Fincast - Month-by-month personal financial projection engine
//!
//! This library provides:
//! - Monthly ledger posting of income, expenses, and scheduled transactions
//! - Debt settlement sweeps, highest interest rate first, with surplus reinvestment
//! - Conditional one-off and recurring financial events (bonuses, raises, payouts)
//! - A termination-predicate-driven simulation loop with convenience wrappers
//! - Request/catalogue loading from JSON and CSV

pub mod error;
pub mod model;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::ProjectionError;
pub use model::{Account, AccountType, AmountKind, Condition, LedgerEntry, ProjectionRequest};
pub use projection::{ProjectionEngine, ProjectionResponse};
pub use scenario::ScenarioRunner;
