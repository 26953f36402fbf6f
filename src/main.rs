use anyhow::Result;
use chat_client::{ChatClient, Error, HttpChatClient, config};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Send one message to a chat endpoint and print the JSON reply")]
struct Cli {
    /// Message to send
    #[arg(default_value = "Привет!")]
    message: String,

    /// Chat endpoint URL, overrides `client.endpoint` from the config file
    #[arg(long, env = "CHAT_ENDPOINT")]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// Builds the log filter, treating a malformed `RUST_LOG` directive as a config error
fn build_env_filter(directives: &str) -> chat_client::Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| Error::config(format!("Invalid log filter '{}': {}", directives, e)))
}

fn exit_code(error: &Error) -> i32 {
    match error {
        Error::Transport { .. } => 1,
        Error::Decode(_) => 2,
        Error::Config(_) | Error::Yaml(_) | Error::Io(_) => 3,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging setup)
    let mut config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(exit_code(&e));
        }
    };
    config.apply_overrides(cli.endpoint, cli.timeout);

    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        std::process::exit(exit_code(&e));
    }

    // RUST_LOG wins over the config file
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    // Only a bare level is checked; RUST_LOG directives are left to EnvFilter
    if std::env::var("RUST_LOG").is_err() {
        if let Err(e) = validate_log_level(&log_level) {
            eprintln!("{}", e);
            std::process::exit(3);
        }
    }

    let env_filter = match build_env_filter(&log_level) {
        Ok(env_filter) => env_filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(exit_code(&e));
        }
    };

    // Logs go to stderr so stdout carries only the reply
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!("Using chat endpoint: {}", config.client.endpoint);

    let client = match HttpChatClient::new(config.client) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(exit_code(&e));
        }
    };

    match client.send(&cli.message).await {
        Ok(response) => {
            println!("{}", response.to_pretty_string());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}
