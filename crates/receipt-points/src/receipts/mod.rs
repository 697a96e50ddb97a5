//! Receipt intake, scoring, and the points ledger.
//!
//! A submitted [`Receipt`] is scored by [`scoring::score`], fingerprinted by
//! [`identifier::derive`], and recorded in a [`PointsLedger`]. The [`ReceiptService`]
//! composes those steps and [`receipt_router`] exposes them over HTTP.

pub mod domain;
pub mod identifier;
pub mod ledger;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Item, Receipt, ReceiptId, ScoredReceipt};
pub use identifier::derive;
pub use ledger::{InMemoryLedger, PointsLedger};
pub use router::receipt_router;
pub use scoring::{score, score_breakdown, PointsBreakdown, PointsRule, RuleContribution};
pub use service::{ReceiptService, ReceiptServiceError};
