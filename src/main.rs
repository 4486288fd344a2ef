use ferrumkv::{shell, Config};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // Initialize logging on stderr, stdout belongs to the shell.
    // RUST_LOG wins over the configured level.
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level))
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("FerrumKV starting...");

    match shell::run(&config).await {
        Ok(summary) => info!("FerrumKV stopped ({} commands)", summary.commands),
        Err(e) => {
            error!("Shell error: {:#}", e);
            std::process::exit(1);
        }
    }
}
