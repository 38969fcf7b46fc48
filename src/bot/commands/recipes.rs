//! Recipe lookup commands.
//!
//! One slash command per known recipe key, each a thin wrapper over the same
//! store lookup, plus `/crafting` which answers with the crafting-location
//! image when it is present on disk.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::bot::commands::ephemeral;
    use crate::bot::{Context, Error};
    use poise::serenity_prelude as serenity;
    use tracing::debug;

    /// Replies with the stored text for `key`, or the fixed placeholder when
    /// no text has been set yet.
    async fn recipe_reply(ctx: Context<'_>, key: &str) -> Result<(), Error> {
        let msg = ctx
            .data()
            .store()
            .get(key)
            .map_or_else(|| format!("Ingen tekst sat for '{key}' endnu."), str::to_owned);
        ctx.send(ephemeral(msg)).await?;
        Ok(())
    }

    /// Shows the recipe stored under `lockpicks`.
    #[poise::command(slash_command, description_localized("da", "Vis opskrift for Lockpicks"))]
    pub async fn lockpicks(ctx: Context<'_>) -> Result<(), Error> {
        recipe_reply(ctx, "lockpicks").await
    }

    /// Shows the recipe stored under `9mm`.
    #[poise::command(
        slash_command,
        rename = "9mm",
        description_localized("da", "Vis opskrift for 9mm")
    )]
    pub async fn nine_mm(ctx: Context<'_>) -> Result<(), Error> {
        recipe_reply(ctx, "9mm").await
    }

    /// Shows the recipe stored under `vaskemaskine`.
    #[poise::command(
        slash_command,
        description_localized("da", "Vis opskrift for Vaskemaskine")
    )]
    pub async fn vaskemaskine(ctx: Context<'_>) -> Result<(), Error> {
        recipe_reply(ctx, "vaskemaskine").await
    }

    /// Shows the recipe stored under `blæser`.
    #[poise::command(
        slash_command,
        rename = "blæser",
        description_localized("da", "Vis opskrift for Blæser")
    )]
    pub async fn blaeser(ctx: Context<'_>) -> Result<(), Error> {
        recipe_reply(ctx, "blæser").await
    }

    /// Shows the recipe stored under `vasketøjskurv`.
    #[poise::command(
        slash_command,
        rename = "vasketøjskurv",
        description_localized("da", "Vis opskrift for Vasketøjskurv")
    )]
    pub async fn vasketoejskurv(ctx: Context<'_>) -> Result<(), Error> {
        recipe_reply(ctx, "vasketøjskurv").await
    }

    /// Shows the primary crafting location as an embedded image.
    ///
    /// Falls back to a text-only reply when the image file is missing, so a
    /// botched deployment still answers something useful.
    #[poise::command(
        slash_command,
        description_localized("da", "Vis primære crafting lokation")
    )]
    pub async fn crafting(ctx: Context<'_>) -> Result<(), Error> {
        let image_path = &ctx.data().image_path;

        match serenity::CreateAttachment::path(image_path).await {
            Ok(attachment) => {
                let embed = serenity::CreateEmbed::default()
                    .title("Primære crafting lokation")
                    .description("Her er vores primære lokation for crafting.")
                    .image(format!("attachment://{}", attachment.filename));

                ctx.send(
                    poise::CreateReply::default()
                        .embed(embed)
                        .attachment(attachment)
                        .ephemeral(true),
                )
                .await?;
            }
            Err(e) => {
                debug!("Crafting image {} unavailable: {e}", image_path.display());
                ctx.send(ephemeral(format!(
                    "Her er lokation for primær crafting\n\n(Billedet mangler: {})",
                    image_path.display()
                )))
                .await?;
            }
        }

        Ok(())
    }
}

pub use inner::{blaeser, crafting, lockpicks, nine_mm, vaskemaskine, vasketoejskurv};
