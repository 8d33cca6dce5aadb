//! mundoctor - identity reconciliation CLI
//!
//! Inspects and migrates the legacy local login of a Mundoctor install
//! against the managed identity provider. Every command prints JSON.
//!
//! # Examples
//!
//! ```bash
//! # Where does the current user stand?
//! mundoctor status --pretty
//!
//! # Store a legacy login
//! mundoctor legacy-login --id 1 --name "Juan Pérez" --email juan@mail.com --role professional
//!
//! # Move it into the signed-in managed identity
//! mundoctor migrate --user-id user_2abc
//! ```

use md_cli::{App, Cli, CliErrorResult, logger};
use md_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let result = match run(cli).await {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let output = if pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<Value> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let app = App::from_config(&config, cli.user_id, cli.session_id).await?;
    app.run(cli.command).await
}
