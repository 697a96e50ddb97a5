use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::identifier;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIME_FORMAT: &str = "%H:%M";

/// Purchase receipt as submitted by the client.
///
/// Every field keeps the text the client sent. Typed views are parsed on demand so a
/// malformed field only affects the rule that reads it, and the identifier is derived
/// from exactly what was submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,
    #[serde(deserialize_with = "deserialize_items")]
    pub items: Vec<Item>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,
}

impl Receipt {
    /// Exact decimal total, or `None` when the text is not a number.
    pub fn total_amount(&self) -> Option<Decimal> {
        parse_amount(&self.total)
    }

    /// Calendar date for a strict `YYYY-MM-DD` value; unpadded fields are rejected.
    pub fn purchase_day(&self) -> Option<NaiveDate> {
        if !has_date_shape(&self.purchase_date) {
            return None;
        }
        NaiveDate::parse_from_str(&self.purchase_date, DATE_FORMAT).ok()
    }

    /// Time of day for `H:MM` or `HH:MM`.
    pub fn purchase_clock(&self) -> Option<NaiveTime> {
        let (_, minutes) = self.purchase_time.split_once(':')?;
        if minutes.len() != 2 {
            return None;
        }
        NaiveTime::parse_from_str(&self.purchase_time, TIME_FORMAT).ok()
    }

    /// Identifier derived from retailer, date, time, and total. Items do not take part.
    pub fn id(&self) -> ReceiptId {
        identifier::derive(
            &self.retailer,
            &self.purchase_date,
            &self.purchase_time,
            &self.total,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }

    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }

    pub fn price_amount(&self) -> Option<Decimal> {
        parse_amount(&self.price)
    }
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw).ok()
}

fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Explicit `null` decodes the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Option<Item>>>::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Opaque receipt identifier (lowercase hex SHA-256 fingerprint).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ledger entry produced once per processed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredReceipt {
    pub id: ReceiptId,
    pub points: u64,
}
