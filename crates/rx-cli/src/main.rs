//! rx - Rx ordering platform session client
//!
//! Signs in to the admin or customer surface and keeps the session token on
//! disk, the way the browser front-ends keep it in local storage.
//!
//! # Examples
//!
//! ```bash
//! # Sign in as a customer (password from RX_PASSWORD)
//! rx login --email orders@sunrisemedicals.in
//!
//! # Check whether the stored admin session is still valid
//! rx --surface admin status --pretty
//!
//! # Check a registration form without submitting it
//! rx validate --form registration.json
//! ```

use rx_cli::{Cli, CliResult, logger, run};
use rx_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(e.exit_status());
        }
    };

    match run(&cli, &config).await {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::from(e.exit_status())
        }
    }
}

/// Load, override, validate, then start logging
fn load_config(cli: &Cli) -> CliResult<Config> {
    let mut config = Config::load()?;
    if let Some(ref server) = cli.server {
        config.api.base_url = server.clone();
    }
    config.validate()?;

    let log_file = match config.logging.file {
        Some(ref file) => Some(Config::config_dir()?.join(file)),
        None => None,
    };
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    config.log_summary();
    Ok(config)
}
