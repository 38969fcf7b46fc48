//! Discord command implementations organized by category.
//!
//! Every command replies ephemerally - the bot's answers are meant for the
//! invoking user, not the channel.

/// General utility commands
pub mod general;
/// Recipe lookup commands and the crafting-location image
pub mod recipes;
/// Response text management - lookup, admin edit, admin reload
pub mod text;

pub use general::ping;
pub use recipes::{blaeser, crafting, lockpicks, nine_mm, vaskemaskine, vasketoejskurv};
pub use text::{reload, settext, showtext};

/// Builds a reply visible only to the invoking user.
fn ephemeral(text: impl Into<String>) -> poise::CreateReply {
    poise::CreateReply::default().content(text).ephemeral(true)
}
