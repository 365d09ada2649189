use std::time::Duration;

use serde_json::{Value, json};

use crate::ledger::types::CategorySets;
use crate::{ClientError, ClientResult};

pub const ACTION_GET_CATEGORIES: &str = "getCategories";
pub const ACTION_ADD_TRANSACTION: &str = "addTransaction";
pub const ACTION_ADD_CATEGORY: &str = "addCategory";
pub const ACTION_REMOVE_CATEGORY: &str = "removeCategory";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The sheet endpoint speaks two verbs: a GET with an optional `action`
/// query, and a POST whose body is `{"action": .., "payload": ..}`.
/// Command logic talks to this trait; tests substitute a stub.
pub trait Transport {
    fn get(&self, endpoint_url: &str, action: Option<&str>) -> ClientResult<Value>;
    fn post(&self, endpoint_url: &str, body: &Value) -> ClientResult<Value>;
}

pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self { agent }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn get(&self, endpoint_url: &str, action: Option<&str>) -> ClientResult<Value> {
        let mut request = self.agent.get(endpoint_url);
        if let Some(action) = action {
            request = request.query("action", action);
        }
        let response = request
            .call()
            .map_err(|error| map_transport_error(endpoint_url, &error))?;
        response
            .into_json::<Value>()
            .map_err(|error| ClientError::endpoint_malformed_response(endpoint_url, &error.to_string()))
    }

    fn post(&self, endpoint_url: &str, body: &Value) -> ClientResult<Value> {
        let response = self
            .agent
            .post(endpoint_url)
            .send_json(body.clone())
            .map_err(|error| map_transport_error(endpoint_url, &error))?;
        response
            .into_json::<Value>()
            .map_err(|error| ClientError::endpoint_malformed_response(endpoint_url, &error.to_string()))
    }
}

fn map_transport_error(endpoint_url: &str, error: &ureq::Error) -> ClientError {
    match error {
        ureq::Error::Status(status, _) => ClientError::endpoint_status(endpoint_url, *status),
        ureq::Error::Transport(transport) => {
            ClientError::endpoint_unreachable(endpoint_url, &transport.to_string())
        }
    }
}

/// A bare GET returns the full transaction list as a JSON array.
pub fn fetch_transactions(
    transport: &dyn Transport,
    endpoint_url: &str,
) -> ClientResult<Vec<Value>> {
    match transport.get(endpoint_url, None)? {
        Value::Array(rows) => Ok(rows),
        _ => Err(ClientError::endpoint_malformed_response(
            endpoint_url,
            "expected a JSON array of transactions",
        )),
    }
}

pub fn fetch_categories(
    transport: &dyn Transport,
    endpoint_url: &str,
) -> ClientResult<CategorySets> {
    let body = transport.get(endpoint_url, Some(ACTION_GET_CATEGORIES))?;
    let income = string_list(&body, "income").ok_or_else(|| {
        ClientError::endpoint_malformed_response(
            endpoint_url,
            "category response is missing the `income` list",
        )
    })?;
    let expense = string_list(&body, "expense").ok_or_else(|| {
        ClientError::endpoint_malformed_response(
            endpoint_url,
            "category response is missing the `expense` list",
        )
    })?;
    Ok(CategorySets { income, expense })
}

/// Posts one action and enforces the endpoint's `result` contract: anything
/// but `"success"` is a rejection, with the endpoint's own message when it
/// gives one.
pub fn post_action(
    transport: &dyn Transport,
    endpoint_url: &str,
    action: &str,
    payload: Value,
) -> ClientResult<Value> {
    let body = json!({
        "action": action,
        "payload": payload,
    });
    let response = transport.post(endpoint_url, &body)?;

    if response.get("result").and_then(Value::as_str) != Some("success") {
        let message = response
            .pointer("/error/message")
            .and_then(Value::as_str)
            .unwrap_or("the endpoint reported an unknown error");
        return Err(ClientError::endpoint_rejected(action, message));
    }

    Ok(response)
}

fn string_list(body: &Value, key: &str) -> Option<Vec<String>> {
    let values = body.get(key)?.as_array()?;
    let mut names = Vec::with_capacity(values.len());
    for value in values {
        names.push(value.as_str()?.to_string());
    }
    Some(names)
}
