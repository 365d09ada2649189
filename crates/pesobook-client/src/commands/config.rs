use std::path::Path;

use crate::config;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{ConfigSetData, ConfigShowData};
use crate::{ClientError, ClientResult};

pub fn show() -> ClientResult<SuccessEnvelope> {
    show_with_home_override(None)
}

#[doc(hidden)]
pub fn show_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let (paths, file) = config::load_optional(home_override)?;
    let file = file.unwrap_or_default();

    let endpoint_url = file
        .endpoint_url
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    let data = ConfigShowData {
        home: paths.home.display().to_string(),
        config_path: paths.config_path.display().to_string(),
        snapshot_path: paths.snapshot_path.display().to_string(),
        configured: endpoint_url.is_some(),
        endpoint_url,
        currency_symbol: file.currency_symbol,
    };
    success("config show", data)
}

pub fn set(key: &str, value: &str) -> ClientResult<SuccessEnvelope> {
    set_with_home_override(key, value, None)
}

#[doc(hidden)]
pub fn set_with_home_override(
    key: &str,
    value: &str,
    home_override: Option<&Path>,
) -> ClientResult<SuccessEnvelope> {
    let (paths, file) = config::load_optional(home_override)?;
    let mut file = file.unwrap_or_default();

    let value = value.trim();
    match key {
        "endpoint" => {
            if !value.starts_with("https://") && !value.starts_with("http://") {
                return Err(ClientError::invalid_argument_for_command(
                    "`endpoint` must be an http(s) URL.",
                    Some("config set"),
                ));
            }
            file.endpoint_url = Some(value.to_string());
        }
        "currency" => {
            if value.is_empty() {
                return Err(ClientError::invalid_argument_for_command(
                    "`currency` cannot be empty.",
                    Some("config set"),
                ));
            }
            file.currency_symbol = value.to_string();
        }
        _ => {
            return Err(ClientError::invalid_argument_for_command(
                "`key` must be `endpoint` or `currency`.",
                Some("config set"),
            ));
        }
    }

    config::store(&paths, &file)?;

    let data = ConfigSetData {
        key: key.to_string(),
        value: value.to_string(),
        config_path: paths.config_path.display().to_string(),
        message: format!("Saved `{key}`."),
    };
    success("config set", data)
}
