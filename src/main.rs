use craftbot::errors::Result;
use craftbot::store::{LoadOutcome, ResponseStore};
use craftbot::{bot, config};
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration (fatal if the token is missing)
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Load (or create) the response store
    let mut store = ResponseStore::new(&app_config.responses_path);
    match store.load() {
        LoadOutcome::Clean => info!(
            "Loaded {} response(s) from {}",
            store.len(),
            app_config.responses_path.display()
        ),
        LoadOutcome::Degraded => warn!(
            "Response store degraded to defaults, check {}",
            app_config.responses_path.display()
        ),
    }

    // 5. Run the bot
    bot::run_bot(app_config, store).await?;

    Ok(())
}
