use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_list(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("txn list output requires rows"))?;
    let currency = currency_symbol(data);

    let source = data.get("source").and_then(Value::as_str).unwrap_or("remote");
    let mut lines = vec![format!("Transactions ({source}):")];
    if let Some(taken_at) = data.get("snapshot_taken_at").and_then(Value::as_str) {
        lines.push(format!("  Snapshot taken at {taken_at}."));
    }

    lines.push(String::new());
    lines.push("All-time totals:".to_string());
    lines.extend(totals_rows(data.get("all_time"), &currency));

    let applied = applied_filter_line(data.get("applied"));
    if let Some(applied) = applied {
        lines.push(String::new());
        lines.push(format!("Filtered totals ({applied}):"));
        lines.extend(totals_rows(data.get("filtered"), &currency));
    }

    lines.push(String::new());
    if rows.is_empty() {
        lines.push("No transactions found for the selected filters.".to_string());
    } else {
        lines.extend(transaction_table(rows, &currency));
    }

    let skipped = data.get("rows_skipped").and_then(Value::as_i64).unwrap_or(0);
    if skipped > 0 {
        lines.push(String::new());
        lines.push(format!(
            "Skipped {skipped} row(s) the sheet returned in an unreadable shape."
        ));
    }

    Ok(lines.join("\n"))
}

pub fn render_add(data: &Value) -> io::Result<String> {
    let currency = currency_symbol(data);
    let amount = data.get("amount").and_then(Value::as_f64).unwrap_or(0.0);

    let mut entries = vec![
        (
            "Date:",
            data.get("date").and_then(Value::as_str).unwrap_or("").to_string(),
        ),
        (
            "Type:",
            data.get("type").and_then(Value::as_str).unwrap_or("").to_string(),
        ),
        (
            "Category:",
            data.get("category")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
        ),
        ("Amount:", format!("{currency} {amount:.2}")),
    ];
    if let Some(description) = data.get("description").and_then(Value::as_str) {
        entries.push(("Description:", description.to_string()));
    }

    let mut lines = vec![
        data.get("message")
            .and_then(Value::as_str)
            .unwrap_or("Transaction saved.")
            .to_string(),
        String::new(),
    ];
    lines.extend(format::key_value_rows(&entries, 2));
    Ok(lines.join("\n"))
}

pub fn render_filters(data: &Value) -> io::Result<String> {
    let years = data
        .get("years")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("txn filters output requires years"))?;
    let months = data
        .get("months")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("txn filters output requires months"))?;
    let categories = data
        .get("categories")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("txn filters output requires categories"))?;

    if years.is_empty() && months.is_empty() && categories.is_empty() {
        return Ok("No transactions yet; there are no filter options to offer.".to_string());
    }

    let mut lines = vec!["Available filters:".to_string(), String::new()];

    lines.push("Years:".to_string());
    for year in years {
        lines.push(format!("  {year}"));
    }

    lines.push(String::new());
    lines.push("Months:".to_string());
    for month in months {
        let name = month.get("name").and_then(Value::as_str).unwrap_or("Unknown");
        let number = month.get("month").and_then(Value::as_i64).unwrap_or(0);
        lines.push(format!("  {name} ({number})"));
    }

    lines.push(String::new());
    lines.push("Categories:".to_string());
    for category in categories {
        let name = category.as_str().unwrap_or("");
        lines.push(format!("  {name}"));
    }

    Ok(lines.join("\n"))
}

fn currency_symbol(data: &Value) -> String {
    data.get("currency_symbol")
        .and_then(Value::as_str)
        .unwrap_or("₱")
        .to_string()
}

fn totals_rows(totals: Option<&Value>, currency: &str) -> Vec<String> {
    let amount = |key: &str| {
        totals
            .and_then(|value| value.get(key))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    };
    format::key_value_rows(
        &[
            ("Income:", format!("{currency} {:.2}", amount("income"))),
            ("Expense:", format!("{currency} {:.2}", amount("expense"))),
            ("Net:", format!("{currency} {:.2}", amount("net"))),
        ],
        2,
    )
}

fn applied_filter_line(applied: Option<&Value>) -> Option<String> {
    let applied = applied?.as_object()?;
    let mut pieces = Vec::new();
    for (key, value) in applied {
        match value {
            Value::String(text) => pieces.push(format!("{key}={text}")),
            Value::Number(number) => pieces.push(format!("{key}={number}")),
            _ => {}
        }
    }
    if pieces.is_empty() {
        return None;
    }
    Some(pieces.join(", "))
}

fn transaction_table(rows: &[Value], currency: &str) -> Vec<String> {
    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Type",
            align: Align::Left,
        },
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Description",
            align: Align::Left,
        },
    ];

    let table_rows = rows
        .iter()
        .map(|row| {
            let kind = row.get("type").and_then(Value::as_str).unwrap_or("Expense");
            let amount = row.get("amount").and_then(Value::as_f64).unwrap_or(0.0);
            // Expenses carry a leading minus in the listing, as the pages
            // always rendered them.
            let amount_cell = if kind == "Expense" {
                format!("-{currency} {amount:.2}")
            } else {
                format!("{currency} {amount:.2}")
            };
            vec![
                row.get("date").and_then(Value::as_str).unwrap_or("").to_string(),
                kind.to_string(),
                row.get("category")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string(),
                amount_cell,
                row.get("description")
                    .and_then(Value::as_str)
                    .unwrap_or("N/A")
                    .to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    format::render_table(&columns, &table_rows, format::terminal_width())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_add, render_filters, render_list};

    fn list_data() -> serde_json::Value {
        json!({
            "source": "remote",
            "snapshot_written": true,
            "currency_symbol": "₱",
            "applied": {"year": 2026},
            "all_time": {"income": 1000.0, "expense": 350.0, "net": 650.0},
            "filtered": {"income": 1000.0, "expense": 250.0, "net": 750.0},
            "rows": [
                {"date": "2026-01-12", "type": "Expense", "category": "Food",
                 "amount": 250.0, "description": "groceries"},
                {"date": "2026-01-05", "type": "Income", "category": "Salary", "amount": 1000.0}
            ],
            "rows_skipped": 0
        })
    }

    #[test]
    fn list_renders_both_summaries_and_rows() {
        let rendered = render_list(&list_data());
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Transactions (remote):"));
            assert!(text.contains("All-time totals:"));
            assert!(text.contains("Filtered totals (year=2026):"));
            assert!(text.contains("₱ 650.00"));
            assert!(text.contains("-₱ 250.00"));
            assert!(text.contains("₱ 1000.00"));
            assert!(text.contains("groceries"));
            assert!(text.contains("N/A"));
        }
    }

    #[test]
    fn list_without_filters_omits_the_filtered_section() {
        let mut data = list_data();
        data["applied"] = json!({});
        let rendered = render_list(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(!text.contains("Filtered totals"));
        }
    }

    #[test]
    fn empty_listing_renders_notice_instead_of_table() {
        let mut data = list_data();
        data["rows"] = json!([]);
        let rendered = render_list(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("No transactions found for the selected filters."));
        }
    }

    #[test]
    fn snapshot_listing_shows_when_it_was_taken() {
        let mut data = list_data();
        data["source"] = json!("snapshot");
        data["snapshot_taken_at"] = json!("2026-03-01 10:15:00");
        let rendered = render_list(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Transactions (snapshot):"));
            assert!(text.contains("Snapshot taken at 2026-03-01 10:15:00."));
        }
    }

    #[test]
    fn skipped_rows_are_reported() {
        let mut data = list_data();
        data["rows_skipped"] = json!(2);
        let rendered = render_list(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Skipped 2 row(s)"));
        }
    }

    #[test]
    fn add_renders_echo_with_currency() {
        let data = json!({
            "date": "2026-03-01",
            "type": "Income",
            "category": "Salary",
            "amount": 1200.5,
            "currency_symbol": "₱",
            "description": "march payroll",
            "message": "Transaction saved."
        });
        let rendered = render_add(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Transaction saved."));
            assert!(text.contains("₱ 1200.50"));
            assert!(text.contains("march payroll"));
        }
    }

    #[test]
    fn filters_render_names_and_numbers() {
        let data = json!({
            "source": "remote",
            "years": [2026, 2025],
            "months": [{"month": 1, "name": "January"}, {"month": 3, "name": "March"}],
            "categories": ["Food", "Salary"],
            "rows_skipped": 0
        });
        let rendered = render_filters(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("January (1)"));
            assert!(text.contains("March (3)"));
            assert!(text.contains("Food"));
            assert!(text.contains("2026"));
        }
    }

    #[test]
    fn filters_over_empty_data_render_a_notice() {
        let data = json!({
            "source": "remote",
            "years": [],
            "months": [],
            "categories": [],
            "rows_skipped": 0
        });
        let rendered = render_filters(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("No transactions yet"));
        }
    }
}
