use crate::cli::{CategoryCommand, Commands, ConfigCommand, TxnCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Txn { command } => match command {
            TxnCommand::Add { json, .. }
            | TxnCommand::List { json, .. }
            | TxnCommand::Filters { json, .. } => *json,
        },
        Commands::Category { command } => match command {
            CategoryCommand::List { json }
            | CategoryCommand::Add { json, .. }
            | CategoryCommand::Remove { json, .. } => *json,
        },
        Commands::Config { command } => match command {
            ConfigCommand::Show { json } | ConfigCommand::Set { json, .. } => *json,
        },
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn json_flag_selects_json_mode() {
        let cases: [Vec<&str>; 4] = [
            vec!["pesobook", "txn", "list", "--json"],
            vec![
                "pesobook", "txn", "add", "--category", "Food", "--amount", "10", "--json",
            ],
            vec!["pesobook", "category", "list", "--json"],
            vec!["pesobook", "config", "show", "--json"],
        ];
        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
            if let Ok(cli) = parsed {
                assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
            }
        }
    }

    #[test]
    fn commands_default_to_text_mode() {
        let parsed = parse_from(["pesobook", "txn", "list"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }

        let parsed_config = parse_from(["pesobook", "config", "show"]);
        assert!(parsed_config.is_ok());
        if let Ok(cli) = parsed_config {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }
    }
}
