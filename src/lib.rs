//! Core logic for a Slime Rancher (SRML) mod manager.
//!
//! The crate owns two things: a single TOML record store (game path, sort
//! preference, cached mod list) and the managed `SRML/mods` directory sitting
//! next to the configured game executable. Mods are plain files flipped
//! between the `.dll` (active) and `.disabled` (inert) markers. The directory
//! is always the source of truth: every read of the mod list rescans it and
//! rewrites the store's cached copy.
//!
//! The presentation layer lives in a separate crate and drives
//! [`ModManager`]; nothing here blocks on user interaction or holds file
//! handles across calls.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod utils;

pub use config::ConfigStore;
pub use core::manager::ModManager;
pub use models::entry::ModEntry;
pub use models::error::Error;
pub use models::settings::{SortColumn, SortDirection, SortPreference};
