use sha2::{Digest, Sha256};

use super::domain::ReceiptId;

/// Fingerprints a receipt from its identity-bearing fields.
///
/// The raw field text is hashed in a fixed order with no separator, so the result is a
/// pure function of those four values: receipts that differ only in their items share an
/// identifier.
pub fn derive(retailer: &str, purchase_date: &str, purchase_time: &str, total: &str) -> ReceiptId {
    let mut hasher = Sha256::new();
    hasher.update(retailer.as_bytes());
    hasher.update(purchase_date.as_bytes());
    hasher.update(purchase_time.as_bytes());
    hasher.update(total.as_bytes());
    ReceiptId(format!("{:x}", hasher.finalize()))
}
