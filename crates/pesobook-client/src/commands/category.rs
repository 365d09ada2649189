use std::path::Path;

use serde_json::json;

use crate::config;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CategoryChangeData, CategorySetsData};
use crate::ledger::types::TxnKind;
use crate::remote::{self, HttpTransport, Transport};
use crate::{ClientError, ClientResult};

#[derive(Default)]
pub struct CategoryOptions<'a> {
    pub home_override: Option<&'a Path>,
    pub transport: Option<&'a dyn Transport>,
}

pub fn list() -> ClientResult<SuccessEnvelope> {
    list_with_options(CategoryOptions::default())
}

#[doc(hidden)]
pub fn list_with_options(options: CategoryOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let context = config::load(options.home_override)?;

    let http_transport;
    let transport: &dyn Transport = match options.transport {
        Some(transport) => transport,
        None => {
            http_transport = HttpTransport::new();
            &http_transport
        }
    };

    let mut sets = remote::fetch_categories(transport, &context.endpoint_url)?;
    sets.income.sort();
    sets.expense.sort();

    let data = CategorySetsData {
        income: sets.income,
        expense: sets.expense,
    };
    success("category list", data)
}

pub fn add(name: &str, kind: &str) -> ClientResult<SuccessEnvelope> {
    add_with_options(name, kind, CategoryOptions::default())
}

#[doc(hidden)]
pub fn add_with_options(
    name: &str,
    kind: &str,
    options: CategoryOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let context = config::load(options.home_override)?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ClientError::invalid_argument_for_command(
            "Category name cannot be empty.",
            Some("category add"),
        ));
    }
    let kind = TxnKind::parse(kind).ok_or_else(|| {
        ClientError::invalid_argument_for_command(
            "`type` must be `income` or `expense`.",
            Some("category add"),
        )
    })?;

    let http_transport;
    let transport: &dyn Transport = match options.transport {
        Some(transport) => transport,
        None => {
            http_transport = HttpTransport::new();
            &http_transport
        }
    };

    let payload = json!({
        "category": name.clone(),
        "type": kind.category_key(),
    });
    remote::post_action(
        transport,
        &context.endpoint_url,
        remote::ACTION_ADD_CATEGORY,
        payload,
    )?;

    let data = CategoryChangeData {
        category: name,
        kind: Some(kind.category_key().to_string()),
        message: "Category added.".to_string(),
    };
    success("category add", data)
}

pub fn remove(name: &str) -> ClientResult<SuccessEnvelope> {
    remove_with_options(name, CategoryOptions::default())
}

#[doc(hidden)]
pub fn remove_with_options(
    name: &str,
    options: CategoryOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let context = config::load(options.home_override)?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ClientError::invalid_argument_for_command(
            "Category name cannot be empty.",
            Some("category remove"),
        ));
    }

    let http_transport;
    let transport: &dyn Transport = match options.transport {
        Some(transport) => transport,
        None => {
            http_transport = HttpTransport::new();
            &http_transport
        }
    };

    // Removal is by name alone; the sheet strips the name from whichever
    // scope holds it and is the authority on unknown names.
    let payload = json!({
        "category": name.clone(),
    });
    remote::post_action(
        transport,
        &context.endpoint_url,
        remote::ACTION_REMOVE_CATEGORY,
        payload,
    )?;

    let data = CategoryChangeData {
        category: name,
        kind: None,
        message: "Category removed.".to_string(),
    };
    success("category remove", data)
}
