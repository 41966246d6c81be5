use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use deepl_cli::DeeplError;
use deepl_cli::cli::commands::{key, translate};
use deepl_cli::cli::{Args, Command};
use deepl_cli::credentials::CredentialStore;
use deepl_cli::output::{self, OutputConfig};
use deepl_cli::translation::print_languages;
use deepl_cli::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", Style::error("Error:"));
            ExitCode::from(u8::try_from(exit_code_for(&err)).unwrap_or(1))
        }
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Languages => {
            print_languages();
        }
        Command::ViewKey => {
            key::run_view_key(&CredentialStore::new()?)?;
        }
        Command::UpdateKey { key } => {
            key::run_update_key(&CredentialStore::new()?, key)?;
        }
        Command::DeleteKey => {
            key::run_delete_key(&CredentialStore::new()?)?;
        }
        Command::Translate { from, to, text } => {
            let options = translate::TranslateOptions { from, to, text };
            translate::run_translate(options, &CredentialStore::new()?).await?;
        }
    }

    Ok(())
}

fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    match err.downcast_ref::<DeeplError>() {
        Some(DeeplError::Validation(_)) => exitcode::USAGE,
        Some(DeeplError::Storage { .. }) => exitcode::IOERR,
        Some(DeeplError::Network(_) | DeeplError::Api { .. }) => exitcode::UNAVAILABLE,
        Some(DeeplError::ResponseFormat(_)) => exitcode::PROTOCOL,
        None => exitcode::SOFTWARE,
    }
}
