mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use pesobook_client::ClientError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Pesobook - personal finance tracker over a sheet endpoint

Usage:
  pesobook <command>

Start here:
  pesobook config set endpoint <url>
  pesobook txn list
  pesobook txn add --help
";

const TOP_LEVEL_HELP: &str = "Pesobook — personal finance tracker over a sheet endpoint

USAGE: pesobook <command>

First run:
  pesobook config set endpoint <url>                 Point pesobook at your sheet deployment
  pesobook config show                               Inspect the resolved configuration

Record transactions:
  pesobook txn add --category Food --amount 250      Record an expense (type comes from the category)
  pesobook txn add --help                            Read the full recording workflow

View your transactions:
  pesobook txn list                                  Full listing with all-time totals
  pesobook txn list --year 2026 --month 3            Filtered listing with filtered totals
  pesobook txn list --type expense --category Food   Filter by type and category
  pesobook txn list --offline                        Render the last fetched snapshot
  pesobook txn filters                               Show the filter options your data offers

Manage categories:
  pesobook category list                             List income and expense categories
  pesobook category add <name> --type <scope>        Define a category
  pesobook category remove <name>                    Remove a category definition

Every data command accepts `--json` for machine-readable output.
Run `pesobook <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) && is_top_level_help_request(&raw_args)
                {
                    if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information"
/// hint) so the recovery steps are the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Builds the subcommand path from raw CLI args for use in help hints.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();
    if non_flags.is_empty() {
        return None;
    }

    let hint = match non_flags.as_slice() {
        ["txn", "add", ..] => Some("txn add"),
        ["txn", "list", ..] => Some("txn list"),
        ["txn", "filters", ..] => Some("txn filters"),
        ["txn", ..] => Some("txn"),
        ["category", "list", ..] => Some("category list"),
        ["category", "add", ..] => Some("category add"),
        ["category", "remove", ..] => Some("category remove"),
        ["category", ..] => Some("category"),
        ["config", "show", ..] => Some("config show"),
        ["config", "set", ..] => Some("config set"),
        ["config", ..] => Some("config"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if is_internal_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

/// Environment and endpoint failures exit 2; user-correctable problems
/// exit 1.
fn is_internal_error(error: &ClientError) -> bool {
    error.code.starts_with("internal_")
        || matches!(
            error.code.as_str(),
            "endpoint_unreachable"
                | "endpoint_error_status"
                | "endpoint_malformed_response"
                | "config_io_error"
                | "home_unresolvable"
        )
}

#[cfg(test)]
mod tests {
    use pesobook_client::ClientError;

    use super::{
        command_path_from_args, is_internal_error, is_top_level_help_request,
        strip_clap_boilerplate,
    };

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn command_hints_follow_the_subcommand_path() {
        let hint = command_path_from_args(&args(&["pesobook", "txn", "add", "--amount", "x"]));
        assert_eq!(hint.as_deref(), Some("txn add"));

        let group_hint = command_path_from_args(&args(&["pesobook", "category"]));
        assert_eq!(group_hint.as_deref(), Some("category"));

        let none = command_path_from_args(&args(&["pesobook", "--json"]));
        assert_eq!(none, None);
    }

    #[test]
    fn top_level_help_detection_only_matches_bare_flags() {
        assert!(is_top_level_help_request(&args(&["pesobook", "--help"])));
        assert!(is_top_level_help_request(&args(&["pesobook", "-h"])));
        assert!(!is_top_level_help_request(&args(&[
            "pesobook", "txn", "--help"
        ])));
    }

    #[test]
    fn boilerplate_stripping_cuts_usage_sections() {
        let message = "bad value\n\nUsage: pesobook txn list\n\nFor more information, try '--help'.";
        assert_eq!(strip_clap_boilerplate(message), "bad value");
    }

    #[test]
    fn endpoint_environment_errors_are_internal() {
        let unreachable = ClientError::endpoint_unreachable("https://example.test", "timed out");
        assert!(is_internal_error(&unreachable));

        let rejected = ClientError::endpoint_rejected("addCategory", "duplicate");
        assert!(!is_internal_error(&rejected));

        let invalid = ClientError::invalid_argument("bad month");
        assert!(!is_internal_error(&invalid));
    }
}
