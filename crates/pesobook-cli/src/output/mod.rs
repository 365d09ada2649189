mod category_text;
mod config_text;
mod error_text;
mod format;
mod json;
mod mode;
mod txn_text;

use std::io;

use pesobook_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    println!("{body}");
    Ok(())
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    println!("{body}");
    Ok(())
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "txn add" => txn_text::render_add(&success.data),
        "txn list" => txn_text::render_list(&success.data),
        "txn filters" => txn_text::render_filters(&success.data),
        "category list" => category_text::render_list(&success.data),
        "category add" | "category remove" => category_text::render_change(&success.data),
        "config show" => config_text::render_show(&success.data),
        "config set" => config_text::render_set(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
