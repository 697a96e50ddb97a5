use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{score_breakdown, PointsBreakdown, Receipt, ReceiptId};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document, or `-` to read standard input
    pub(crate) receipt: PathBuf,
    /// Emit the breakdown as JSON instead of a text table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct ScoreReport {
    id: ReceiptId,
    points: u64,
    breakdown: PointsBreakdown,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = read_document(&args.receipt)?;
    let receipt: Receipt = serde_json::from_str(&raw)?;
    let report = build_report(&receipt);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

fn read_document(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn build_report(receipt: &Receipt) -> ScoreReport {
    let breakdown = score_breakdown(receipt);
    ScoreReport {
        id: receipt.id(),
        points: breakdown.total(),
        breakdown,
    }
}

fn render_report(report: &ScoreReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Receipt {}", report.id);
    for contribution in &report.breakdown.contributions {
        let _ = writeln!(
            out,
            "  {:<24} {:>5}  {}",
            contribution.rule.label(),
            contribution.points,
            contribution.notes
        );
    }
    let _ = writeln!(out, "  {:<24} {:>5}", "total", report.points);
    out
}
