//! Endpoint configuration for the wallet boundary.
//!
//! Three external endpoints are read from the process environment, each with
//! a testnet default baked in, plus the address of the local signer agent.

use std::env;

/// Solana devnet JSON-RPC endpoint, used when `SOLMATE_LEDGER_RPC_URL` is unset.
pub const DEFAULT_LEDGER_RPC_URL: &str = "https://api.devnet.solana.com";

/// RPC endpoint for the game-program layer, used when `SOLMATE_PROGRAM_RPC_URL` is unset.
pub const DEFAULT_PROGRAM_RPC_URL: &str = "https://api.devnet.solana.com";

/// Network identifier, used when `SOLMATE_NETWORK_ID` is unset.
pub const DEFAULT_NETWORK_ID: &str = "devnet";

/// Local signer-agent endpoint, used when `SOLMATE_WALLET_AGENT_URL` is unset.
pub const DEFAULT_AGENT_URL: &str = "http://127.0.0.1:8191";

/// Resolved wallet configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletConfig {
    /// Ledger HTTP endpoint (account state, blockhash, submission).
    pub ledger_rpc_url: String,
    /// Smart-contract RPC endpoint for the on-chain game program.
    pub program_rpc_url: String,
    /// Network identifier string (e.g. `devnet`, `mainnet-beta`).
    pub network_id: String,
    /// HTTP endpoint of the local wallet signer agent.
    pub agent_url: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            ledger_rpc_url: DEFAULT_LEDGER_RPC_URL.to_string(),
            program_rpc_url: DEFAULT_PROGRAM_RPC_URL.to_string(),
            network_id: DEFAULT_NETWORK_ID.to_string(),
            agent_url: DEFAULT_AGENT_URL.to_string(),
        }
    }
}

impl WalletConfig {
    /// Build a configuration from the environment, falling back to the
    /// testnet defaults for any unset variable.
    pub fn from_env() -> Self {
        Self {
            ledger_rpc_url: env_or("SOLMATE_LEDGER_RPC_URL", DEFAULT_LEDGER_RPC_URL),
            program_rpc_url: env_or("SOLMATE_PROGRAM_RPC_URL", DEFAULT_PROGRAM_RPC_URL),
            network_id: env_or("SOLMATE_NETWORK_ID", DEFAULT_NETWORK_ID),
            agent_url: env_or("SOLMATE_WALLET_AGENT_URL", DEFAULT_AGENT_URL),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_testnet() {
        let config = WalletConfig::default();
        assert_eq!(config.ledger_rpc_url, DEFAULT_LEDGER_RPC_URL);
        assert_eq!(config.program_rpc_url, DEFAULT_PROGRAM_RPC_URL);
        assert_eq!(config.network_id, "devnet");
    }

    #[test]
    fn env_or_ignores_blank_values() {
        // An unset or blank variable falls back to the default.
        assert_eq!(env_or("SOLMATE_TEST_UNSET_VARIABLE", "fallback"), "fallback");
    }
}
