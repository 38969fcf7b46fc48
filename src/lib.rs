//! `CraftBot` - a Discord bot serving the guild's crafting recipes
//!
//! This crate provides a small set of slash commands backed by a key-value
//! response store persisted as `responses.json`. Admins can edit entries and
//! reload the file at runtime without restarting the bot.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
)]

// Note: `missing_docs` is set to `warn` instead of `deny` because
// macro-generated code (e.g., `poise::command`) doesn't include docs.

/// Discord bot interface - commands and bot context
pub mod bot;
/// Startup configuration read from the environment
pub mod config;
/// Unified error types and result handling
pub mod errors;
/// The JSON-file-backed response store
pub mod store;
