//! Persisted wallet address
//!
//! A single JSON record in the user's configuration directory remembering
//! the last-connected wallet address. Read on startup to pre-populate the
//! session, written on connect, removed on disconnect. Load and save
//! failures are logged and never interrupt the app.

use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::error::CoreResult;

/// Wallet record filename
const WALLET_FILENAME: &str = "wallet.json";

#[derive(Serialize, Deserialize)]
struct StoredWallet {
    address: String,
}

/// Helper to resolve the wallet record path
///
/// Falls back to a local `wallet.json` if the system config dir cannot be
/// found.
fn wallet_record_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "SolMate") {
        proj_dirs.config_dir().join(WALLET_FILENAME)
    } else {
        PathBuf::from(WALLET_FILENAME)
    }
}

fn read_record(path: &PathBuf) -> CoreResult<StoredWallet> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_record(path: &PathBuf, record: &StoredWallet) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(record)?)?;
    Ok(())
}

/// Load the remembered address, if any.
pub fn load_address() -> Option<String> {
    let path = wallet_record_path();
    if !path.exists() {
        return None;
    }
    match read_record(&path) {
        Ok(record) => {
            info!("[WALLET] Restored address from {:?}", path);
            Some(record.address)
        }
        Err(e) => {
            warn!("[WALLET] Failed to read wallet record at {:?}: {}", path, e);
            None
        }
    }
}

/// Remember an address across sessions.
pub fn save_address(address: &str) {
    let path = wallet_record_path();
    let record = StoredWallet {
        address: address.to_string(),
    };
    match write_record(&path, &record) {
        Ok(()) => info!("[WALLET] Saved address to {:?}", path),
        Err(e) => error!("[WALLET] Failed to write wallet record at {:?}: {}", path, e),
    }
}

/// Forget the remembered address.
pub fn clear_address() {
    let path = wallet_record_path();
    if !path.exists() {
        return;
    }
    match fs::remove_file(&path) {
        Ok(()) => info!("[WALLET] Removed wallet record at {:?}", path),
        Err(e) => error!("[WALLET] Failed to remove wallet record at {:?}: {}", path, e),
    }
}
