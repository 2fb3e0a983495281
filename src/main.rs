use anyhow::Result;
use patchup::commands::Cli;
use patchup::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> Result<()> {
    // Route msg_* output through tracing when debug mode is requested.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
            .init();
    }

    Cli::menu().await
}
