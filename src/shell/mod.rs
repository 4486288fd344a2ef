//! Shell module
//!
//! Runs the interactive command loop on the process's stdin and stdout.
//! Command processing is delegated to the dispatcher.

mod session;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;

pub use session::{Session, SessionSummary};

/// Run the shell
///
/// Creates a fresh store sized from the configuration and serves one
/// session on stdin/stdout until it ends.
pub async fn run(config: &Config) -> Result<SessionSummary> {
    let dispatcher = Dispatcher::with_capacity(config.initial_capacity);
    info!(
        "Store ready (initial capacity {}), reading commands from stdin",
        config.initial_capacity
    );

    let mut session = Session::new(dispatcher, config.prompt.clone());
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    session.run(stdin, &mut stdout).await
}
