//! Wallet module - Bevy-side session over the wallet crate
//!
//! Owns the [`WalletSession`] resource (the UI's view of the connection),
//! runs wallet operations on background tasks so the UI never blocks, and
//! persists the last-connected address the way the web client used browser
//! local storage.

pub mod persistence;
pub mod plugin;

pub use plugin::{WalletPlugin, WalletSession, WalletTaskResult};
