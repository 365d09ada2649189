use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const CONFIG_SET_ENDPOINT_COMMAND: &str = "pesobook config set endpoint <url>";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `pesobook {cmd} --help` for usage."),
            None => "Run `pesobook --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn unknown_category(category: &str, income: &[String], expense: &[String]) -> Self {
        Self::new(
            "unknown_category",
            &format!("Category `{category}` is not defined on the sheet."),
            vec![
                "Run `pesobook category list` to see the defined categories.".to_string(),
                format!(
                    "Add it first with `pesobook category add \"{category}\" --type <income|expense>`."
                ),
            ],
        )
        .with_data(json!({
            "category": category,
            "income_categories": income,
            "expense_categories": expense,
        }))
    }

    pub fn endpoint_not_configured(config_path: &Path) -> Self {
        let location = config_path.display().to_string();
        Self::new(
            "endpoint_not_configured",
            &format!("No endpoint URL is configured at `{location}`."),
            vec![
                format!("Run `{CONFIG_SET_ENDPOINT_COMMAND}` with your sheet deployment URL."),
                "Run `pesobook config show` to inspect the current configuration.".to_string(),
            ],
        )
    }

    pub fn config_invalid(config_path: &Path, detail: &str) -> Self {
        let location = config_path.display().to_string();
        Self::new(
            "config_invalid",
            &format!("Configuration at `{location}` could not be parsed: {detail}"),
            vec![
                format!("Fix or delete `{location}`."),
                format!("Then run `{CONFIG_SET_ENDPOINT_COMMAND}` to recreate it."),
            ],
        )
    }

    pub fn config_io(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "config_io_error",
            &format!("Could not access `{location}`: {detail}"),
            vec![format!(
                "Grant read/write access to `{location}` or set `PESOBOOK_HOME` to a writable directory."
            )],
        )
    }

    pub fn endpoint_unreachable(endpoint_url: &str, detail: &str) -> Self {
        Self::new(
            "endpoint_unreachable",
            &format!("Could not reach the sheet endpoint: {detail}"),
            vec![
                "Check your network connection.".to_string(),
                "Run `pesobook config show` and verify the endpoint URL.".to_string(),
            ],
        )
        .with_data(json!({
            "endpoint_url": endpoint_url,
        }))
    }

    pub fn endpoint_status(endpoint_url: &str, status: u16) -> Self {
        Self::new(
            "endpoint_error_status",
            &format!("The sheet endpoint answered with HTTP status {status}."),
            vec![
                "Verify the deployment URL is current; redeployed scripts change URLs.".to_string(),
                format!("Update it with `{CONFIG_SET_ENDPOINT_COMMAND}` if it moved."),
            ],
        )
        .with_data(json!({
            "endpoint_url": endpoint_url,
            "status": status,
        }))
    }

    pub fn endpoint_malformed_response(endpoint_url: &str, detail: &str) -> Self {
        Self::new(
            "endpoint_malformed_response",
            &format!("The sheet endpoint returned a response pesobook could not read: {detail}"),
            vec![
                "Confirm the configured URL points at the sheet web app, not another service."
                    .to_string(),
                "Retry once; the endpoint occasionally serves transient HTML error pages."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "endpoint_url": endpoint_url,
        }))
    }

    pub fn endpoint_rejected(action: &str, message: &str) -> Self {
        Self::new(
            "endpoint_rejected",
            &format!("The sheet endpoint rejected `{action}`: {message}"),
            vec!["Fix the reported problem and retry the command.".to_string()],
        )
        .with_data(json!({
            "action": action,
        }))
    }

    pub fn snapshot_missing(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "snapshot_missing",
            &format!("No local snapshot exists at `{location}`."),
            vec![
                "Run `pesobook txn list` online once; a successful fetch writes the snapshot."
                    .to_string(),
            ],
        )
    }

    pub fn snapshot_invalid(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "snapshot_invalid",
            &format!("The local snapshot at `{location}` could not be read: {detail}"),
            vec![
                format!("Delete `{location}`."),
                "Run `pesobook txn list` online to write a fresh snapshot.".to_string(),
            ],
        )
    }

    pub fn home_unresolvable(detail: &str) -> Self {
        Self::new(
            "home_unresolvable",
            &format!("Could not resolve a pesobook home directory: {detail}"),
            vec!["Set `PESOBOOK_HOME` to a writable directory.".to_string()],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
