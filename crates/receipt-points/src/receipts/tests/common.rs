use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt};
use crate::receipts::ledger::InMemoryLedger;
use crate::receipts::router::receipt_router;
use crate::receipts::service::ReceiptService;

pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            Item::new("Mountain Dew 12PK", "6.49"),
            Item::new("Emils Cheese Pizza", "12.25"),
            Item::new("Knorr Creamy Chicken", "1.26"),
            Item::new("Doritos Nacho Cheese", "3.35"),
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            Item::new("Gatorade", "2.25"),
            Item::new("Gatorade", "2.25"),
            Item::new("Gatorade", "2.25"),
            Item::new("Gatorade", "2.25"),
        ],
        total: "9.00".to_string(),
    }
}

pub(super) const TARGET_ID: &str =
    "8ae113f8860703a6590732e046cadc7931bcaa8d4664c0a34ce00b11a6716a3b";

pub(super) fn build_service() -> (Arc<ReceiptService<InMemoryLedger>>, InMemoryLedger) {
    let ledger = InMemoryLedger::new();
    let service = Arc::new(ReceiptService::new(Arc::new(ledger.clone())));
    (service, ledger)
}

pub(super) fn router_with_service(service: Arc<ReceiptService<InMemoryLedger>>) -> axum::Router {
    receipt_router(service)
}

pub(super) fn json_request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request builds")
}

pub(super) fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
