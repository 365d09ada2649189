use std::io;

use serde_json::Value;

use super::format;

pub fn render_show(data: &Value) -> io::Result<String> {
    let field = |key: &str| {
        data.get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };

    let endpoint = data
        .get("endpoint_url")
        .and_then(Value::as_str)
        .unwrap_or("(not set)")
        .to_string();

    let mut lines = vec!["Pesobook configuration:".to_string(), String::new()];
    lines.extend(format::key_value_rows(
        &[
            ("Home:", field("home")),
            ("Config file:", field("config_path")),
            ("Snapshot file:", field("snapshot_path")),
            ("Endpoint URL:", endpoint),
            ("Currency symbol:", field("currency_symbol")),
        ],
        2,
    ));

    if data.get("configured").and_then(Value::as_bool) != Some(true) {
        lines.push(String::new());
        lines.push("Not configured yet. Set the sheet endpoint first:".to_string());
        lines.push("  pesobook config set endpoint <url>".to_string());
    }

    Ok(lines.join("\n"))
}

pub fn render_set(data: &Value) -> io::Result<String> {
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("config set output requires a message"))?;
    let config_path = data.get("config_path").and_then(Value::as_str).unwrap_or("");

    Ok(format!("{message}\n  Config file: {config_path}"))
}
