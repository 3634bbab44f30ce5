use configuration::Settings;
use tracing_subscriber::EnvFilter;

/// The main entry point for the roster service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file, if one exists.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Read DB_* and PORT from the process environment. A missing or
    // malformed value is fatal; there is no degraded mode.
    let settings = Settings::load()?;

    web_server::run_server(settings).await
}
