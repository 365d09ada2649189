use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

pub fn parse_month(value: &str) -> Result<u32, String> {
    let month = value
        .parse::<u32>()
        .map_err(|_| "month must be a number between 1 and 12".to_string())?;
    if !(1..=12).contains(&month) {
        return Err("month must be between 1 and 12".to_string());
    }
    Ok(month)
}

pub fn parse_txn_kind(value: &str) -> Result<String, String> {
    match value.to_ascii_lowercase().as_str() {
        "income" | "expense" => Ok(value.to_ascii_lowercase()),
        _ => Err("type must be `income` or `expense`".to_string()),
    }
}

pub fn parse_amount(value: &str) -> Result<f64, String> {
    let amount = value
        .parse::<f64>()
        .map_err(|_| "amount must be a number".to_string())?;
    if !amount.is_finite() || amount < 0.0 {
        return Err("amount must be a non-negative number".to_string());
    }
    Ok(amount)
}

pub fn parse_config_key(value: &str) -> Result<String, String> {
    match value {
        "endpoint" | "currency" => Ok(value.to_string()),
        _ => Err("key must be one of: endpoint, currency".to_string()),
    }
}

/// Extended help shown after `pesobook txn add --help`.
pub const TXN_ADD_AFTER_HELP: &str = "\
How recording works:
  The transaction is appended to the configured sheet endpoint; nothing is
  stored locally. The income/expense type is never passed on the command
  line: the category decides it, based on which scope the category belongs
  to on the sheet.

What to do next:
  1. Run `pesobook category list` to see the categories the sheet defines.
  2. Add a missing category with `pesobook category add <name> --type <scope>`.
  3. Record the transaction:
     pesobook txn add --category Food --amount 250 --description \"groceries\"

Field rules:
  --date (optional):
    Date only, exactly `YYYY-MM-DD`. Defaults to today.

  --category (required):
    Must already exist on the sheet, in either scope.

  --amount (required):
    A non-negative number. Stored at two decimal places.

  --description (optional):
    Free text. Blank descriptions are dropped.
";

#[derive(Debug, Parser)]
#[command(
    name = "pesobook",
    version,
    about = "personal finance tracker for a spreadsheet-backed sheet endpoint",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record and list transactions stored on the sheet
    #[command(arg_required_else_help = true)]
    Txn {
        #[command(subcommand)]
        command: TxnCommand,
    },
    /// Manage income and expense category definitions
    #[command(arg_required_else_help = true)]
    Category {
        #[command(subcommand)]
        command: CategoryCommand,
    },
    /// Inspect or update the local pesobook configuration
    #[command(arg_required_else_help = true)]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TxnCommand {
    /// Record one transaction on the sheet
    #[command(after_long_help = TXN_ADD_AFTER_HELP)]
    Add {
        /// Transaction date (YYYY-MM-DD); defaults to today
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<IsoDate>,
        /// Category the transaction belongs to; decides income vs expense
        #[arg(long)]
        category: String,
        /// Non-negative amount, stored at two decimal places
        #[arg(long, value_parser = parse_amount)]
        amount: f64,
        /// Optional free-text note
        #[arg(long)]
        description: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List stored transactions with summary totals
    List {
        /// Keep only transactions from this year
        #[arg(long)]
        year: Option<i32>,
        /// Keep only transactions from this month (1-12)
        #[arg(long, value_parser = parse_month)]
        month: Option<u32>,
        /// Keep only `income` or `expense` transactions
        #[arg(long = "type", value_parser = parse_txn_kind)]
        kind: Option<String>,
        /// Keep only transactions in this category
        #[arg(long)]
        category: Option<String>,
        /// Render the last fetched snapshot instead of fetching
        #[arg(long)]
        offline: bool,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show the filter options the stored transactions offer
    Filters {
        /// Derive options from the last fetched snapshot instead of fetching
        #[arg(long)]
        offline: bool,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CategoryCommand {
    /// List the category definitions, by scope
    List {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Define a new category on the sheet
    Add {
        /// Category name
        name: String,
        /// Scope of the category: `income` or `expense`
        #[arg(long = "type", value_parser = parse_txn_kind)]
        kind: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Remove a category definition from the sheet
    Remove {
        /// Category name to remove
        name: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Show the resolved home, paths, and configured values
    Show {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value (`endpoint` or `currency`)
    Set {
        /// Configuration key: endpoint, currency
        #[arg(value_parser = parse_config_key)]
        key: String,
        /// New value for the key
        value: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{CategoryCommand, Commands, ConfigCommand, TxnCommand, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 16] = [
            vec!["pesobook", "txn", "add", "--category", "Food", "--amount", "250"],
            vec![
                "pesobook", "txn", "add", "--date", "2026-03-01", "--category", "Salary",
                "--amount", "1200.50", "--description", "payroll", "--json",
            ],
            vec!["pesobook", "txn", "list"],
            vec!["pesobook", "txn", "list", "--year", "2026", "--month", "3"],
            vec!["pesobook", "txn", "list", "--type", "expense", "--category", "Food"],
            vec!["pesobook", "txn", "list", "--offline"],
            vec!["pesobook", "txn", "list", "--json"],
            vec!["pesobook", "txn", "filters"],
            vec!["pesobook", "txn", "filters", "--offline", "--json"],
            vec!["pesobook", "category", "list"],
            vec!["pesobook", "category", "add", "Utilities", "--type", "expense"],
            vec!["pesobook", "category", "add", "Bonus", "--type", "income", "--json"],
            vec!["pesobook", "category", "remove", "Utilities"],
            vec!["pesobook", "config", "show"],
            vec!["pesobook", "config", "set", "endpoint", "https://example.test/exec"],
            vec!["pesobook", "config", "set", "currency", "$", "--json"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn txn_list_type_flag_maps_to_kind_field() {
        let parsed = parse_from(["pesobook", "txn", "list", "--type", "Income"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Txn {
                    command: TxnCommand::List { kind: Some(kind), .. }
                } if kind == "income"
            ));
        }
    }

    #[test]
    fn invalid_date_is_rejected() {
        let parsed = parse_from([
            "pesobook", "txn", "add", "--date", "2026-99-01", "--category", "Food", "--amount",
            "10",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        let parsed = parse_from(["pesobook", "txn", "list", "--month", "13"]);
        assert!(parsed.is_err());

        let parsed_zero = parse_from(["pesobook", "txn", "list", "--month", "0"]);
        assert!(parsed_zero.is_err());
    }

    #[test]
    fn negative_amount_is_rejected() {
        let parsed = parse_from([
            "pesobook", "txn", "add", "--category", "Food", "--amount", "-5",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_type_filter_is_rejected() {
        let parsed = parse_from(["pesobook", "txn", "list", "--type", "transfer"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_config_key_is_rejected() {
        let parsed = parse_from(["pesobook", "config", "set", "color", "green"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn config_set_parses_key_and_value() {
        let parsed = parse_from([
            "pesobook", "config", "set", "endpoint", "https://example.test/exec",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Config {
                    command: ConfigCommand::Set { key, value, .. }
                } if key == "endpoint" && value == "https://example.test/exec"
            ));
        }
    }

    #[test]
    fn category_add_requires_a_type() {
        let parsed = parse_from(["pesobook", "category", "add", "Utilities"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn category_add_accepts_mixed_case_type() {
        let parsed = parse_from([
            "pesobook", "category", "add", "Bonus", "--type", "Income",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Category {
                    command: CategoryCommand::Add { kind, .. }
                } if kind == "income"
            ));
        }
    }

    #[test]
    fn bare_group_commands_show_help() {
        for group in ["txn", "category", "config"] {
            let parsed = parse_from(["pesobook", group]);
            assert!(parsed.is_err());
            if let Err(err) = parsed {
                assert_eq!(
                    err.kind(),
                    ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                );
            }
        }
    }

    #[test]
    fn help_command_is_rejected() {
        let parsed = parse_from(["pesobook", "help"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn txn_add_help_uses_clap_display_help() {
        let parsed = parse_from(["pesobook", "txn", "add", "--help"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }
}
