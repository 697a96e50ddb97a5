use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::receipts::{InMemoryLedger, ReceiptService};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Ledger and service shared by every request for the life of the process.
pub(crate) fn in_memory_service() -> Arc<ReceiptService<InMemoryLedger>> {
    let ledger = Arc::new(InMemoryLedger::new());
    Arc::new(ReceiptService::new(ledger))
}
