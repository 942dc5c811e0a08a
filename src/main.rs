#![warn(clippy::all, clippy::pedantic)]

use clap::Parser;
use connaudit::{AuditError, Cli, Config, app};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    let result = match Config::from_env() {
        Ok(config) => app::dispatch(cli, &config).await,
        Err(error) => Err(AuditError::from(error).into()),
    };

    if let Err(error) = result {
        eprintln!("✗ {error:#}");
        std::process::exit(1);
    }
}
