use std::cell::RefCell;
use std::path::PathBuf;

use pesobook_client::ClientResult;
use pesobook_client::remote::Transport;
use serde_json::{Value, json};
use tempfile::TempDir;

pub const TEST_ENDPOINT: &str = "https://example.test/exec";

/// A pesobook home directory with a valid config file already in place.
/// The `TempDir` must stay alive for the duration of the test.
pub fn configured_home(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::Builder::new().prefix(prefix).tempdir()?;
    let home = dir.path().to_path_buf();
    let config = json!({
        "endpoint_url": TEST_ENDPOINT,
        "currency_symbol": "₱",
    });
    std::fs::write(home.join("config.json"), config.to_string())?;
    Ok((dir, home))
}

pub fn transaction(
    date: &str,
    kind: &str,
    category: &str,
    amount: f64,
    description: Option<&str>,
) -> Value {
    let mut row = json!({
        "date": date,
        "type": kind,
        "category": category,
        "amount": amount,
    });
    if let Some(description) = description {
        row["description"] = Value::String(description.to_string());
    }
    row
}

/// In-memory stand-in for the sheet endpoint. GETs serve canned data and
/// POSTs are recorded for assertion.
pub struct StubTransport {
    pub transactions: Vec<Value>,
    pub categories: Value,
    pub posts: RefCell<Vec<Value>>,
    pub post_response: Value,
}

impl StubTransport {
    pub fn new(transactions: Vec<Value>) -> Self {
        Self {
            transactions,
            categories: json!({
                "income": ["Salary", "Bonus"],
                "expense": ["Food", "Transport"],
            }),
            posts: RefCell::new(Vec::new()),
            post_response: json!({"result": "success"}),
        }
    }

    pub fn with_post_error(mut self, message: &str) -> Self {
        self.post_response = json!({
            "result": "error",
            "error": {"message": message},
        });
        self
    }

    pub fn recorded_posts(&self) -> Vec<Value> {
        self.posts.borrow().clone()
    }
}

impl Transport for StubTransport {
    fn get(&self, _endpoint_url: &str, action: Option<&str>) -> ClientResult<Value> {
        match action {
            Some("getCategories") => Ok(self.categories.clone()),
            _ => Ok(Value::Array(self.transactions.clone())),
        }
    }

    fn post(&self, _endpoint_url: &str, body: &Value) -> ClientResult<Value> {
        self.posts.borrow_mut().push(body.clone());
        Ok(self.post_response.clone())
    }
}
