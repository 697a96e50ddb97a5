use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::domain::{Receipt, ReceiptId};
use super::ledger::PointsLedger;
use super::service::{ReceiptService, ReceiptServiceError};

/// Body returned after a receipt is processed.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedView {
    pub id: ReceiptId,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointsView {
    pub points: u64,
}

/// Router builder exposing the receipt intake and points lookup endpoints.
pub fn receipt_router<L>(service: Arc<ReceiptService<L>>) -> Router
where
    L: PointsLedger + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<L>))
        .route("/receipts/", get(missing_id_handler))
        .route("/receipts/:receipt_id", get(points_handler::<L>))
        .route("/receipts/:receipt_id/points", get(points_handler::<L>))
        .with_state(service)
}

pub(crate) async fn process_handler<L>(
    State(service): State<Arc<ReceiptService<L>>>,
    body: Bytes,
) -> Response
where
    L: PointsLedger + 'static,
{
    // Decoded regardless of Content-Type.
    let receipt = match serde_json::from_slice::<Receipt>(&body) {
        Ok(receipt) => receipt,
        Err(err) => {
            warn!(reason = %err, "rejected receipt payload");
            let payload = json!({
                "error": "invalid JSON payload",
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let scored = service.process(&receipt);
    (StatusCode::OK, Json(ProcessedView { id: scored.id })).into_response()
}

pub(crate) async fn points_handler<L>(
    State(service): State<Arc<ReceiptService<L>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    L: PointsLedger + 'static,
{
    let id = ReceiptId(receipt_id);
    match service.points(&id) {
        Ok(points) => (StatusCode::OK, Json(PointsView { points })).into_response(),
        Err(ReceiptServiceError::MissingId) => missing_id_response(),
        Err(ReceiptServiceError::NotFound(_)) => {
            let payload = json!({
                "error": "receipt not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn missing_id_handler() -> Response {
    missing_id_response()
}

fn missing_id_response() -> Response {
    let payload = json!({
        "error": "missing receipt id",
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}
