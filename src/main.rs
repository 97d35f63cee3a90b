//! Nataris API Example
//!
//! Walks through the Nataris inference API: balance, models, inference,
//! chat completion and an orchestrated workflow

use nataris_example::config::settings::{LoggingConfig, API_KEY_VAR};
use nataris_example::{run_walkthrough, version_info, NatarisClient, Settings};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    // Credential is a precondition: fail before any request goes out
    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_credential() {
                eprintln!("Usage: {}=your_key nataris-example", API_KEY_VAR);
            }
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);
    info!("{}", version_info());

    let client = match NatarisClient::new(settings.api.clone()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Using API at {}", client.base_url());

    let mut stdout = std::io::stdout();
    match run_walkthrough(&client, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging system (stderr, so stdout carries only walkthrough output)
fn init_logging(config: &LoggingConfig) {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        // JSON format logs
        Box::new(tracing_subscriber::fmt()
            .with_env_filter(config.level.as_str())
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .finish())
    } else {
        // Human readable format
        Box::new(tracing_subscriber::fmt()
            .with_env_filter(config.level.as_str())
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .finish())
    };

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}
