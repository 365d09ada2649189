use pesobook_client::commands;
use pesobook_client::{ClientResult, SuccessEnvelope};

use crate::cli::{CategoryCommand, Cli, Commands, ConfigCommand, TxnCommand};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Txn { command } => match command {
            TxnCommand::Add {
                date,
                category,
                amount,
                description,
                json: _,
            } => {
                let date_value = date
                    .as_ref()
                    .map(|value| value.as_str().to_string())
                    .unwrap_or_else(today_iso);
                commands::txn::add(&date_value, category, *amount, description.as_deref())
            }
            TxnCommand::List {
                year,
                month,
                kind,
                category,
                offline,
                json: _,
            } => commands::txn::list(
                *year,
                *month,
                kind.as_deref(),
                category.as_deref(),
                *offline,
            ),
            TxnCommand::Filters { offline, json: _ } => commands::txn::filters(*offline),
        },
        Commands::Category { command } => match command {
            CategoryCommand::List { .. } => commands::category::list(),
            CategoryCommand::Add { name, kind, .. } => commands::category::add(name, kind),
            CategoryCommand::Remove { name, .. } => commands::category::remove(name),
        },
        Commands::Config { command } => match command {
            ConfigCommand::Show { .. } => commands::config::show(),
            ConfigCommand::Set { key, value, .. } => commands::config::set(key, value),
        },
    }
}

fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
