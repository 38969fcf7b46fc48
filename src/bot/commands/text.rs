//! Response text management commands.
//!
//! `/showtext` looks up an arbitrary key; `/settext` and `/reload` are the
//! admin-gated mutation and reload paths over the response store.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::bot::commands::ephemeral;
    use crate::bot::{Context, Error};
    use crate::store::LoadOutcome;
    use tracing::{info, warn};

    /// True if the invoking user holds Administrator in the current guild.
    ///
    /// Interactions carry the member's resolved permissions; outside a guild
    /// (DMs) there is no member and the gate fails closed.
    async fn is_admin(ctx: &Context<'_>) -> bool {
        match ctx.author_member().await {
            Some(member) => member
                .permissions
                .is_some_and(|perms| perms.administrator()),
            None => false,
        }
    }

    /// Shows the stored text for an arbitrary key.
    ///
    /// Unlike the fixed recipe commands, an unknown key is echoed back
    /// explicitly instead of answering with the generic placeholder.
    #[poise::command(
        slash_command,
        description_localized("da", "Vis teksten for en nøgle (fx lockpicks)")
    )]
    pub async fn showtext(
        ctx: Context<'_>,
        #[description = "Nøglen i responses.json, fx lockpicks"] key: String,
    ) -> Result<(), Error> {
        let msg = ctx.data().store().get(&key).map(str::to_owned);
        match msg {
            Some(text) => ctx.send(ephemeral(format!("**{key}:**\n{text}"))).await?,
            None => ctx.send(ephemeral(format!("Ukendt nøgle: `{key}`"))).await?,
        };
        Ok(())
    }

    /// Creates or overwrites the text for a key and persists it immediately.
    ///
    /// Admin-only. The key is trimmed here, not in the store; an empty key is
    /// rejected before any mutation happens.
    #[poise::command(
        slash_command,
        description_localized("da", "(Admin) Sæt/ændr tekst for en nøgle i responses.json")
    )]
    pub async fn settext(
        ctx: Context<'_>,
        #[description = "Nøglen der skal oprettes/ændres (fx lockpicks)"] key: String,
        #[description = "Teksten der skal gemmes"] text: String,
    ) -> Result<(), Error> {
        if !is_admin(&ctx).await {
            ctx.send(ephemeral("Kun admins kan bruge denne kommando."))
                .await?;
            return Ok(());
        }

        let key = key.trim();
        if key.is_empty() {
            ctx.send(ephemeral("Key må ikke være tom.")).await?;
            return Ok(());
        }

        ctx.data().store().set(key, text)?;
        info!("Updated response text for key `{key}`");

        ctx.send(ephemeral(format!(
            "Gemte tekst for `{key}` (responses.json opdateret)."
        )))
        .await?;
        Ok(())
    }

    /// Reloads `responses.json` from disk without restarting the bot.
    ///
    /// Admin-only. Used to pick up manual edits to the backing file; a file
    /// that fails to load leaves the store on its built-in defaults.
    #[poise::command(
        slash_command,
        description_localized("da", "(Admin) Genindlæs responses.json uden at genstarte botten")
    )]
    pub async fn reload(ctx: Context<'_>) -> Result<(), Error> {
        if !is_admin(&ctx).await {
            ctx.send(ephemeral("Kun admins kan bruge denne kommando."))
                .await?;
            return Ok(());
        }

        let outcome = ctx.data().store().load();
        if outcome == LoadOutcome::Degraded {
            warn!("Reload fell back to the default response mapping");
        }

        ctx.send(ephemeral("Genindlæste responses.json ✅")).await?;
        Ok(())
    }
}

pub use inner::{reload, settext, showtext};
