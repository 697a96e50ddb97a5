//! Points rules applied to a processed receipt.
//!
//! Each rule reads the receipt independently and contributes a non-negative amount. A
//! field that fails to parse only zeroes the rule that needed it; scoring itself never
//! fails.

use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::domain::{Item, Receipt};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
const AFTERNOON_HOUR: u32 = 14;

/// The seven scoring rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsRule {
    RetailerAlphanumerics,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl PointsRule {
    pub const ALL: [PointsRule; 7] = [
        PointsRule::RetailerAlphanumerics,
        PointsRule::RoundDollarTotal,
        PointsRule::QuarterMultipleTotal,
        PointsRule::ItemPairs,
        PointsRule::DescriptionLength,
        PointsRule::OddPurchaseDay,
        PointsRule::AfternoonPurchase,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PointsRule::RetailerAlphanumerics => "retailer_alphanumerics",
            PointsRule::RoundDollarTotal => "round_dollar_total",
            PointsRule::QuarterMultipleTotal => "quarter_multiple_total",
            PointsRule::ItemPairs => "item_pairs",
            PointsRule::DescriptionLength => "description_length",
            PointsRule::OddPurchaseDay => "odd_purchase_day",
            PointsRule::AfternoonPurchase => "afternoon_purchase",
        }
    }

    fn apply(&self, receipt: &Receipt) -> (u64, String) {
        match self {
            PointsRule::RetailerAlphanumerics => retailer_alphanumerics(receipt),
            PointsRule::RoundDollarTotal => round_dollar_total(receipt),
            PointsRule::QuarterMultipleTotal => quarter_multiple_total(receipt),
            PointsRule::ItemPairs => item_pairs(receipt),
            PointsRule::DescriptionLength => description_length(receipt),
            PointsRule::OddPurchaseDay => odd_purchase_day(receipt),
            PointsRule::AfternoonPurchase => afternoon_purchase(receipt),
        }
    }
}

/// Points awarded by a single rule with a short human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: PointsRule,
    pub points: u64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub contributions: Vec<RuleContribution>,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        self.contributions
            .iter()
            .fold(0u64, |total, c| total.saturating_add(c.points))
    }

    pub fn points_for(&self, rule: PointsRule) -> u64 {
        self.contributions
            .iter()
            .find(|c| c.rule == rule)
            .map_or(0, |c| c.points)
    }
}

/// Total points for a receipt.
pub fn score(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).total()
}

/// Per-rule points for a receipt, in rule order.
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    let contributions = PointsRule::ALL
        .iter()
        .map(|rule| {
            let (points, notes) = rule.apply(receipt);
            RuleContribution {
                rule: *rule,
                points,
                notes,
            }
        })
        .collect();

    PointsBreakdown { contributions }
}

fn retailer_alphanumerics(receipt: &Receipt) -> (u64, String) {
    let count = receipt
        .retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as u64;
    (count, format!("{count} alphanumeric character(s) in retailer name"))
}

fn round_dollar_total(receipt: &Receipt) -> (u64, String) {
    if receipt.total.ends_with(".00") {
        (ROUND_DOLLAR_POINTS, format!("total {} has no cents", receipt.total))
    } else {
        (0, format!("total {} is not a round dollar amount", receipt.total))
    }
}

fn quarter_multiple_total(receipt: &Receipt) -> (u64, String) {
    let Some(total) = receipt.total_amount() else {
        debug!(total = %receipt.total, "total is not a decimal; quarter rule skipped");
        return (0, format!("total '{}' could not be parsed", receipt.total));
    };

    let quarter = Decimal::new(25, 2);
    match total.checked_rem(quarter) {
        Some(remainder) if remainder.is_zero() => (
            QUARTER_MULTIPLE_POINTS,
            format!("total {total} is a multiple of 0.25"),
        ),
        _ => (0, format!("total {total} is not a multiple of 0.25")),
    }
}

fn item_pairs(receipt: &Receipt) -> (u64, String) {
    let pairs = (receipt.items.len() / 2) as u64;
    (
        pairs.saturating_mul(ITEM_PAIR_POINTS),
        format!("{pairs} pair(s) across {} item(s)", receipt.items.len()),
    )
}

fn description_length(receipt: &Receipt) -> (u64, String) {
    let mut points: u64 = 0;
    let mut qualifying = 0;
    for item in &receipt.items {
        if let Some(awarded) = description_points(item) {
            points = points.saturating_add(awarded);
            qualifying += 1;
        }
    }
    (
        points,
        format!("{qualifying} item(s) with description length divisible by 3"),
    )
}

/// `ceil(price * 0.2)` for items whose trimmed description length is a multiple of three.
/// Length is measured in bytes of the trimmed text.
fn description_points(item: &Item) -> Option<u64> {
    if item.trimmed_description().len() % 3 != 0 {
        return None;
    }

    let Some(price) = item.price_amount() else {
        debug!(price = %item.price, "item price is not a decimal; description rule skipped");
        return None;
    };

    let awarded = price
        .checked_mul(Decimal::new(2, 1))
        .map(|scaled| scaled.ceil())
        .and_then(|ceiled| ceiled.to_u64())
        .unwrap_or(0);
    Some(awarded)
}

fn odd_purchase_day(receipt: &Receipt) -> (u64, String) {
    match receipt.purchase_day() {
        Some(date) if date.day() % 2 == 1 => (
            ODD_DAY_POINTS,
            format!("purchase day {} is odd", date.day()),
        ),
        Some(date) => (0, format!("purchase day {} is even", date.day())),
        None => {
            debug!(purchase_date = %receipt.purchase_date, "purchase date unparseable; odd day rule skipped");
            (
                0,
                format!("purchase date '{}' could not be parsed", receipt.purchase_date),
            )
        }
    }
}

/// Only the 14:00-14:59 hour qualifies.
fn afternoon_purchase(receipt: &Receipt) -> (u64, String) {
    match receipt.purchase_clock() {
        Some(time) if time.hour() == AFTERNOON_HOUR => (
            AFTERNOON_POINTS,
            format!("purchased at {} within the 2pm hour", receipt.purchase_time),
        ),
        Some(_) => (
            0,
            format!("purchased at {} outside the 2pm hour", receipt.purchase_time),
        ),
        None => {
            debug!(purchase_time = %receipt.purchase_time, "purchase time unparseable; afternoon rule skipped");
            (
                0,
                format!("purchase time '{}' could not be parsed", receipt.purchase_time),
            )
        }
    }
}
