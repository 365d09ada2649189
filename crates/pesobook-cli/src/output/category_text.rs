use std::io;

use serde_json::Value;

pub fn render_list(data: &Value) -> io::Result<String> {
    let income = scope_names(data, "income")?;
    let expense = scope_names(data, "expense")?;

    let mut lines = vec!["Income categories:".to_string()];
    lines.extend(scope_lines(&income));
    lines.push(String::new());
    lines.push("Expense categories:".to_string());
    lines.extend(scope_lines(&expense));

    Ok(lines.join("\n"))
}

pub fn render_change(data: &Value) -> io::Result<String> {
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("category output requires a message"))?;
    let category = data.get("category").and_then(Value::as_str).unwrap_or("");

    let mut lines = vec![message.to_string()];
    match data.get("type").and_then(Value::as_str) {
        Some(kind) => lines.push(format!("  {category} ({kind})")),
        None => lines.push(format!("  {category}")),
    }
    lines.push(String::new());
    lines.push("Run `pesobook category list` to see the updated sets.".to_string());

    Ok(lines.join("\n"))
}

fn scope_names(data: &Value, scope: &str) -> io::Result<Vec<String>> {
    data.get(scope)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .ok_or_else(|| io::Error::other(format!("category output requires the `{scope}` list")))
}

fn scope_lines(names: &[String]) -> Vec<String> {
    if names.is_empty() {
        return vec!["  (none)".to_string()];
    }
    names.iter().map(|name| format!("  {name}")).collect()
}
