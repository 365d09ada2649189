use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::ledger::types::{ListFilter, Transaction, TxnKind};
use crate::{ClientError, ClientResult};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("Unknown")
}

/// Validates raw filter arguments into a `ListFilter`. The CLI already
/// rejects most bad input at parse time; this is the seam every caller of
/// the library goes through.
pub fn build_filter(
    year: Option<i32>,
    month: Option<u32>,
    kind: Option<&str>,
    category: Option<&str>,
    command: &str,
) -> ClientResult<ListFilter> {
    if let Some(month) = month
        && !(1..=12).contains(&month)
    {
        return Err(ClientError::invalid_argument_for_command(
            "`month` must be between 1 and 12.",
            Some(command),
        ));
    }

    let parsed_kind = match kind {
        Some(value) => Some(TxnKind::parse(value).ok_or_else(|| {
            ClientError::invalid_argument_for_command(
                "`type` must be `income` or `expense`.",
                Some(command),
            )
        })?),
        None => None,
    };

    let category = category
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    Ok(ListFilter {
        year,
        month,
        kind: parsed_kind,
        category,
    })
}

/// Strict `YYYY-MM-DD` validation for dates supplied as arguments.
pub fn parse_arg_date(value: &str, field_name: &str, command: &str) -> ClientResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(ClientError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format."),
            Some(command),
        ));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ClientError::invalid_argument_for_command(
            &format!("`{field_name}` must use valid calendar values."),
            Some(command),
        )
    })
}

/// Applies every given predicate, keeping input order.
pub fn apply(rows: &[Transaction], filter: &ListFilter) -> Vec<Transaction> {
    rows.iter()
        .filter(|row| matches(row, filter))
        .cloned()
        .collect()
}

fn matches(row: &Transaction, filter: &ListFilter) -> bool {
    if let Some(year) = filter.year
        && row.date.year() != year
    {
        return false;
    }
    if let Some(month) = filter.month
        && row.date.month() != month
    {
        return false;
    }
    if let Some(kind) = filter.kind
        && row.kind != kind
    {
        return false;
    }
    if let Some(category) = &filter.category
        && &row.category != category
    {
        return false;
    }
    true
}

/// Option sets the listing offers for filtering: years newest-first, months
/// in calendar order, categories sorted. Rows without a category contribute
/// no option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub months: Vec<u32>,
    pub categories: Vec<String>,
}

pub fn derive_options(rows: &[Transaction]) -> FilterOptions {
    let mut years = BTreeSet::new();
    let mut months = BTreeSet::new();
    let mut categories = BTreeSet::new();

    for row in rows {
        years.insert(row.date.year());
        months.insert(row.date.month());
        if !row.category.is_empty() {
            categories.insert(row.category.clone());
        }
    }

    FilterOptions {
        years: years.into_iter().rev().collect(),
        months: months.into_iter().collect(),
        categories: categories.into_iter().collect(),
    }
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}
