//! Bot layer - Discord-specific interface and command handlers
//!
//! Wires the poise framework around the response store: shared command state,
//! error reporting, and slash-command registration (guild-scoped or global).

/// Discord command implementations (recipes, text management, general)
pub mod commands;

use crate::config::AppConfig;
use crate::errors;
use crate::store::ResponseStore;
use poise::serenity_prelude as serenity;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{error, info};

/// Shared data available to all bot commands.
pub struct Data {
    /// The response store, guarded because serenity dispatches handlers
    /// concurrently. Guards are never held across an `.await`.
    store: Mutex<ResponseStore>,
    /// Location of the crafting image attached by `/crafting`.
    pub image_path: PathBuf,
}

impl Data {
    /// Creates the shared context handed to every command invocation.
    pub fn new(store: ResponseStore, image_path: PathBuf) -> Self {
        Self {
            store: Mutex::new(store),
            image_path,
        }
    }

    /// Locks the response store. A poisoned lock is absorbed: the mapping has
    /// no invariants a panicked handler could have broken.
    pub fn store(&self) -> MutexGuard<'_, ResponseStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Error type poise threads through every command.
pub(crate) type Error = errors::Error;
/// Poise context alias used by all command handlers.
pub(crate) type Context<'a> = poise::Context<'a, Data, Error>;

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {error:?}", ctx.command().name);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Connects to Discord and runs the bot until the gateway connection ends.
///
/// Commands are registered in the configured guild when a guild id is set
/// (instant visibility, useful for a single-guild deployment), globally
/// otherwise.
pub async fn run_bot(config: AppConfig, store: ResponseStore) -> errors::Result<()> {
    let AppConfig {
        token,
        guild_id,
        image_path,
        ..
    } = config;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::lockpicks(),
                commands::nine_mm(),
                commands::vaskemaskine(),
                commands::blaeser(),
                commands::vasketoejskurv(),
                commands::crafting(),
                commands::showtext(),
                commands::settext(),
                commands::reload(),
                commands::ping(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                match guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            &framework.options().commands,
                            guild_id,
                        )
                        .await?;
                        info!("Registered commands in guild {guild_id}");
                    }
                    None => {
                        poise::builtins::register_globally(ctx, &framework.options().commands)
                            .await?;
                        info!("Registered commands globally");
                    }
                }
                Ok(Data::new(store, image_path))
            })
        })
        .build();

    // Slash commands only, no privileged intents needed.
    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    client.start().await.map_err(Into::into)
}
