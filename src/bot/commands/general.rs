//! General Discord commands - liveness checks and other store-free utilities.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::bot::{Context, Error};
    use crate::bot::commands::ephemeral;

    /// Replies with a fixed acknowledgement to confirm the bot is running.
    #[poise::command(slash_command, description_localized("da", "Tjek at botten kører"))]
    pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
        ctx.send(ephemeral("Pong ✅")).await?;
        Ok(())
    }
}

pub use inner::ping;
