use std::path::Path;

use serde_json::{Value, json};

use crate::cache;
use crate::commands::common::{applied_filters, totals_data, transaction_row};
use crate::config::{self, ConfigContext};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{FilterOptionsData, MonthOption, TxnAddData, TxnListData};
use crate::ledger::{decode, filter, summary};
use crate::remote::{self, HttpTransport, Transport};
use crate::{ClientError, ClientResult};

#[derive(Default)]
pub struct ListOptions<'a> {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub kind: Option<String>,
    pub category: Option<String>,
    pub offline: bool,
    pub home_override: Option<&'a Path>,
    pub transport: Option<&'a dyn Transport>,
}

#[derive(Default)]
pub struct FiltersOptions<'a> {
    pub offline: bool,
    pub home_override: Option<&'a Path>,
    pub transport: Option<&'a dyn Transport>,
}

#[derive(Default)]
pub struct AddOptions<'a> {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub home_override: Option<&'a Path>,
    pub transport: Option<&'a dyn Transport>,
}

pub fn list(
    year: Option<i32>,
    month: Option<u32>,
    kind: Option<&str>,
    category: Option<&str>,
    offline: bool,
) -> ClientResult<SuccessEnvelope> {
    list_with_options(ListOptions {
        year,
        month,
        kind: kind.map(str::to_string),
        category: category.map(str::to_string),
        offline,
        ..ListOptions::default()
    })
}

#[doc(hidden)]
pub fn list_with_options(options: ListOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let context = config::load(options.home_override)?;
    let list_filter = filter::build_filter(
        options.year,
        options.month,
        options.kind.as_deref(),
        options.category.as_deref(),
        "txn list",
    )?;

    let http_transport;
    let transport: &dyn Transport = match options.transport {
        Some(transport) => transport,
        None => {
            http_transport = HttpTransport::new();
            &http_transport
        }
    };

    let source = load_raw_rows(&context, transport, options.offline)?;
    let decoded = decode::decode_rows(&source.raw_rows);

    let all_time = summary::totals(&decoded.rows);
    let mut visible = filter::apply(&decoded.rows, &list_filter);
    let filtered = summary::totals(&visible);
    visible.sort_by(|left, right| right.date.cmp(&left.date));

    let data = TxnListData {
        source: source.label.to_string(),
        snapshot_taken_at: source.snapshot_taken_at,
        snapshot_written: source.snapshot_written,
        currency_symbol: context.currency_symbol.clone(),
        applied: applied_filters(&list_filter),
        all_time: totals_data(all_time),
        filtered: totals_data(filtered),
        rows: visible.iter().map(transaction_row).collect(),
        rows_skipped: decoded.skipped,
    };
    success("txn list", data)
}

pub fn filters(offline: bool) -> ClientResult<SuccessEnvelope> {
    filters_with_options(FiltersOptions {
        offline,
        ..FiltersOptions::default()
    })
}

#[doc(hidden)]
pub fn filters_with_options(options: FiltersOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let context = config::load(options.home_override)?;

    let http_transport;
    let transport: &dyn Transport = match options.transport {
        Some(transport) => transport,
        None => {
            http_transport = HttpTransport::new();
            &http_transport
        }
    };

    let source = load_raw_rows(&context, transport, options.offline)?;
    let decoded = decode::decode_rows(&source.raw_rows);
    let option_sets = filter::derive_options(&decoded.rows);

    let data = FilterOptionsData {
        source: source.label.to_string(),
        years: option_sets.years,
        months: option_sets
            .months
            .iter()
            .map(|&month| MonthOption {
                month,
                name: filter::month_name(month).to_string(),
            })
            .collect(),
        categories: option_sets.categories,
        rows_skipped: decoded.skipped,
    };
    success("txn filters", data)
}

pub fn add(
    date: &str,
    category: &str,
    amount: f64,
    description: Option<&str>,
) -> ClientResult<SuccessEnvelope> {
    add_with_options(AddOptions {
        date: date.to_string(),
        category: category.to_string(),
        amount,
        description: description.map(str::to_string),
        ..AddOptions::default()
    })
}

#[doc(hidden)]
pub fn add_with_options(options: AddOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let context = config::load(options.home_override)?;

    let date = filter::parse_arg_date(&options.date, "date", "txn add")?;
    let category = options.category.trim().to_string();
    if category.is_empty() {
        return Err(ClientError::invalid_argument_for_command(
            "Category cannot be empty.",
            Some("txn add"),
        ));
    }
    if !options.amount.is_finite() || options.amount < 0.0 {
        return Err(ClientError::invalid_argument_for_command(
            "`amount` must be a non-negative number.",
            Some("txn add"),
        ));
    }
    let amount = summary::round2(options.amount);

    let http_transport;
    let transport: &dyn Transport = match options.transport {
        Some(transport) => transport,
        None => {
            http_transport = HttpTransport::new();
            &http_transport
        }
    };

    // The transaction kind is never supplied by the caller; the category's
    // scope on the sheet decides it.
    let sets = remote::fetch_categories(transport, &context.endpoint_url)?;
    let Some(kind) = sets.kind_of(&category) else {
        return Err(ClientError::unknown_category(
            &category,
            &sets.income,
            &sets.expense,
        ));
    };

    let description = options
        .description
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    let date_string = date.format("%Y-%m-%d").to_string();
    // Amounts go over the wire as two-decimal strings; that is the shape the
    // sheet has always received.
    let payload = json!({
        "date": date_string.clone(),
        "category": category.clone(),
        "type": kind.label(),
        "amount": format!("{amount:.2}"),
        "description": description.clone().unwrap_or_default(),
    });
    remote::post_action(
        transport,
        &context.endpoint_url,
        remote::ACTION_ADD_TRANSACTION,
        payload,
    )?;

    let data = TxnAddData {
        date: date_string,
        kind: kind.label().to_string(),
        category,
        amount,
        currency_symbol: context.currency_symbol.clone(),
        description,
        message: "Transaction saved.".to_string(),
    };
    success("txn add", data)
}

struct RawRowSource {
    raw_rows: Vec<Value>,
    label: &'static str,
    snapshot_taken_at: Option<String>,
    snapshot_written: bool,
}

fn load_raw_rows(
    context: &ConfigContext,
    transport: &dyn Transport,
    offline: bool,
) -> ClientResult<RawRowSource> {
    if offline {
        let snapshot = cache::load(&context.paths.snapshot_path)?;
        return Ok(RawRowSource {
            raw_rows: snapshot.rows,
            label: "snapshot",
            snapshot_taken_at: Some(snapshot.taken_at),
            snapshot_written: false,
        });
    }

    let raw_rows = remote::fetch_transactions(transport, &context.endpoint_url)?;
    let snapshot_written = cache::store_best_effort(&context.paths.snapshot_path, &raw_rows);
    Ok(RawRowSource {
        raw_rows,
        label: "remote",
        snapshot_taken_at: None,
        snapshot_written,
    })
}
