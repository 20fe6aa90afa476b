pub mod modules;
mod schema;
pub mod server;
pub mod shared;

use shared::config::Settings;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Entry point of the `enrollment-api` binary
pub async fn run() -> anyhow::Result<()> {
    // Also picks up `log` records from the library code
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,enrollment_lib=debug,tower_http=debug")),
        )
        .init();

    // Configuration problems stop startup; an unreachable database does not
    let settings = Settings::from_env()?;
    info!(
        "Starting enrollment API on port {} (database {}, policy {})",
        settings.server_port,
        settings.database.target(),
        settings.connection_policy
    );

    server::start_server(settings).await?;
    Ok(())
}
