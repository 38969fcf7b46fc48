//! Startup configuration from environment variables.
//!
//! The bot reads its settings from the environment (optionally seeded from a
//! `.env` file by `main`): a required `DISCORD_TOKEN` and an optional
//! `GUILD_ID` restricting command registration to a single guild. File paths
//! are fixed relative to the working directory, matching the deployment layout.

use crate::errors::{Error, Result};
use poise::serenity_prelude::GuildId;
use std::{env, path::PathBuf};

/// Default location of the response store next to the binary.
pub const RESPONSES_FILE: &str = "responses.json";
/// Image attached by the `/crafting` command, if present.
pub const CRAFTING_IMAGE_FILE: &str = "parkeringcrafting.png";

/// Application configuration assembled at startup.
#[derive(Debug)]
pub struct AppConfig {
    /// Discord bot token used to authenticate the gateway connection.
    pub token: String,
    /// Guild to register commands in; `None` registers them globally.
    pub guild_id: Option<GuildId>,
    /// Path of the JSON response store.
    pub responses_path: PathBuf,
    /// Path of the crafting-location image.
    pub image_path: PathBuf,
}

/// Builds the [`AppConfig`] from the environment.
///
/// Fails with [`Error::Config`] if `DISCORD_TOKEN` is absent or `GUILD_ID` is
/// set to something that is not an integer.
pub fn load_app_configuration() -> Result<AppConfig> {
    let token = env::var("DISCORD_TOKEN").map_err(|_| {
        Error::Config(
            "DISCORD_TOKEN is missing. Check that .env sits next to the binary and contains \
             DISCORD_TOKEN=<token> (no quotes, no spaces around '=')."
                .to_string(),
        )
    })?;

    let guild_id = match env::var("GUILD_ID") {
        Ok(raw) => parse_guild_id(&raw)?,
        Err(_) => None,
    };

    Ok(AppConfig {
        token,
        guild_id,
        responses_path: PathBuf::from(RESPONSES_FILE),
        image_path: PathBuf::from(CRAFTING_IMAGE_FILE),
    })
}

/// Parses a `GUILD_ID` value. Empty or `0` means "register globally".
fn parse_guild_id(raw: &str) -> Result<Option<GuildId>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let id: u64 = raw
        .parse()
        .map_err(|e| Error::Config(format!("GUILD_ID must be an integer, got {raw:?}: {e}")))?;
    Ok((id != 0).then(|| GuildId::new(id)))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_guild_id_set() {
        let parsed = parse_guild_id("123456789012345678").unwrap();
        assert_eq!(parsed, Some(GuildId::new(123_456_789_012_345_678)));
    }

    #[test]
    fn test_parse_guild_id_zero_means_global() {
        assert_eq!(parse_guild_id("0").unwrap(), None);
        assert_eq!(parse_guild_id("").unwrap(), None);
        assert_eq!(parse_guild_id("  ").unwrap(), None);
    }

    #[test]
    fn test_parse_guild_id_rejects_garbage() {
        assert!(matches!(
            parse_guild_id("not-a-number"),
            Err(Error::Config(_))
        ));
    }
}
