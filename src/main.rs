//! cancel-insight service entry point.
//!
//! Usage:
//!   cargo run -- serve
//!   cargo run -- analyze --file reasons.txt
//!   cat reasons.txt | cargo run -- analyze

use anyhow::Result;
use cancel_insight::{
    analyzer::Analyzer, config::Config, normalize::normalize_reasons, providers::create_model,
    server::run_http,
};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "cancel-insight")]
#[command(about = "Cancellation-reason analysis service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve,
    /// Analyze reasons from a file or stdin and print the result as JSON
    Analyze {
        /// File with one reason per line; stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    cancel_insight::load_env();

    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    let log_level = config
        .runtime
        .log_level
        .as_deref()
        .unwrap_or("cancel_insight=info")
        .to_string();
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let model = create_model(&config)?;
    let analyzer = Arc::new(Analyzer::new(model));

    match cli.command {
        Commands::Serve => {
            info!(
                provider = %config.provider.kind,
                model = %config.provider.model,
                "starting cancel-insight"
            );
            run_http(&config, analyzer).await?;
        }
        Commands::Analyze { file } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(&path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let reasons = normalize_reasons(&raw);
            let result = analyzer.analyze(&reasons).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
