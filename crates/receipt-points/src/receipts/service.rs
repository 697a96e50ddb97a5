use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{Receipt, ReceiptId, ScoredReceipt};
use super::ledger::PointsLedger;
use super::scoring::{self, PointsBreakdown};

/// Service composing the scorer, identifier derivation, and the points ledger.
pub struct ReceiptService<L> {
    ledger: Arc<L>,
}

impl<L> ReceiptService<L>
where
    L: PointsLedger + 'static,
{
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Arc<L> {
        &self.ledger
    }

    /// Score a receipt and record the points under its derived identifier.
    ///
    /// Receipts sharing retailer, date, time, and total map to the same identifier; the
    /// most recent one wins.
    pub fn process(&self, receipt: &Receipt) -> ScoredReceipt {
        let points = scoring::score(receipt);
        let id = receipt.id();

        if let Some(previous) = self.ledger.lookup(&id) {
            debug!(%id, previous, points, "replacing points for existing receipt id");
        }
        self.ledger.record(id.clone(), points);

        info!(%id, points, items = receipt.items.len(), "processed receipt");
        ScoredReceipt { id, points }
    }

    /// Fetch the points recorded for an identifier.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        if id.as_str().trim().is_empty() {
            return Err(ReceiptServiceError::MissingId);
        }

        self.ledger
            .lookup(id)
            .ok_or_else(|| ReceiptServiceError::NotFound(id.clone()))
    }

    pub fn breakdown(&self, receipt: &Receipt) -> PointsBreakdown {
        scoring::score_breakdown(receipt)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error("missing receipt id")]
    MissingId,
    #[error("receipt {0} not found")]
    NotFound(ReceiptId),
}
