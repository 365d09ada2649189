use chrono::NaiveDate;
use serde_json::Value;

use crate::ledger::types::{Transaction, TxnKind};

/// Result of decoding a raw row list fetched from the sheet. Rows the sheet
/// returns in an unreadable shape are dropped and counted, never fatal.
#[derive(Debug, Clone, Default)]
pub struct DecodeOutcome {
    pub rows: Vec<Transaction>,
    pub skipped: i64,
}

pub fn decode_rows(raw_rows: &[Value]) -> DecodeOutcome {
    let mut outcome = DecodeOutcome::default();
    for raw in raw_rows {
        match decode_row(raw) {
            Some(transaction) => outcome.rows.push(transaction),
            None => outcome.skipped += 1,
        }
    }
    outcome
}

fn decode_row(raw: &Value) -> Option<Transaction> {
    let date = raw
        .get("date")
        .and_then(Value::as_str)
        .and_then(parse_remote_date)?;
    let amount = parse_remote_amount(raw.get("amount")?)?;

    // The sheet historically stored rows without a type; the listing pages
    // always classified those as expenses.
    let kind = match raw.get("type").and_then(Value::as_str) {
        Some("Income") => TxnKind::Income,
        _ => TxnKind::Expense,
    };

    let category = raw
        .get("category")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string();
    let description = raw
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    Some(Transaction {
        date,
        kind,
        category,
        amount,
        description,
    })
}

/// Accepts a plain `YYYY-MM-DD` or an ISO datetime (the sheet serializes
/// date cells as full timestamps).
pub fn parse_remote_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let candidate = if trimmed.len() > 10 {
        trimmed.get(..10)?
    } else {
        trimmed
    };
    NaiveDate::parse_from_str(candidate, "%Y-%m-%d").ok()
}

/// Amounts arrive as JSON numbers or as numeric strings depending on the
/// sheet's cell formatting.
fn parse_remote_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    amount.is_finite().then_some(amount)
}
