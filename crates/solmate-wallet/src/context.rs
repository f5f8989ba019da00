//! The wallet connection context.
//!
//! [`WalletContext`] is an explicit object the client creates at startup and
//! passes by reference to whichever views need it; there is no process-wide
//! singleton. It owns the signer adapter picked at connect time, the active
//! address, and the connection status machine:
//!
//! ```text
//! Disconnected → Connecting → Connected
//!                     ↓
//!                   Error
//! ```
//!
//! Failures move the status to `Error` and stay there until the user acts
//! again; nothing is retried automatically.

use solana_client::rpc_client::RpcClient;
use solana_sdk::hash::Hash;
use solana_sdk::message::Message;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use tracing::{debug, info, warn};

use crate::config::WalletConfig;
use crate::error::{WalletError, WalletResult};
use crate::signer::{detect_signer, SignerKind, WalletSigner};

/// Connection status of the wallet context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletStatus {
    /// No connection and no operation in flight.
    #[default]
    Disconnected,
    /// A connect round trip to the signer agent is in flight.
    Connecting,
    /// Signer selected and address known.
    Connected,
    /// The last operation failed; shown to the user, not retried.
    Error,
}

/// Explicit wallet connection state.
pub struct WalletContext {
    config: WalletConfig,
    ledger: RpcClient,
    signer: Option<Box<dyn WalletSigner>>,
    address: Option<Pubkey>,
    status: WalletStatus,
}

impl WalletContext {
    /// Create a disconnected context over the configured ledger endpoint.
    pub fn new(config: WalletConfig) -> Self {
        let ledger = RpcClient::new(config.ledger_rpc_url.clone());
        Self {
            config,
            ledger,
            signer: None,
            address: None,
            status: WalletStatus::Disconnected,
        }
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    pub fn status(&self) -> WalletStatus {
        self.status
    }

    pub fn address(&self) -> Option<&Pubkey> {
        self.address.as_ref()
    }

    /// Which agent generation the active signer speaks, if connected.
    pub fn signer_kind(&self) -> Option<SignerKind> {
        self.signer.as_ref().map(|s| s.kind())
    }

    /// Pre-populate the address from a persisted record without connecting.
    ///
    /// Used at startup to restore the last-connected account; the status
    /// stays `Disconnected` until the user connects again.
    pub fn restore_address(&mut self, address: &str) -> WalletResult<()> {
        let address: Pubkey = address.parse().map_err(|e| WalletError::InvalidAddress {
            address: address.to_string(),
            reason: format!("{e}"),
        })?;
        if self.status == WalletStatus::Disconnected {
            self.address = Some(address);
        }
        Ok(())
    }

    /// Connect to the signer agent and fetch the active public key.
    ///
    /// Selects the agent adapter exactly once; every later call goes through
    /// the selected [`WalletSigner`].
    pub fn connect(&mut self) -> WalletResult<Pubkey> {
        self.status = WalletStatus::Connecting;
        match self.try_connect() {
            Ok(address) => {
                info!(%address, network = %self.config.network_id, "wallet connected");
                self.address = Some(address);
                self.status = WalletStatus::Connected;
                Ok(address)
            }
            Err(e) => {
                warn!("wallet connect failed: {e}");
                self.signer = None;
                self.status = WalletStatus::Error;
                Err(e)
            }
        }
    }

    fn try_connect(&mut self) -> WalletResult<Pubkey> {
        let signer = detect_signer(&self.config.agent_url)?;
        let address = signer.public_key()?;
        self.signer = Some(signer);
        Ok(address)
    }

    /// Drop the signer and the active address.
    pub fn disconnect(&mut self) {
        self.signer = None;
        self.address = None;
        self.status = WalletStatus::Disconnected;
        info!("wallet disconnected");
    }

    /// Build, sign and submit a native-asset payment.
    ///
    /// The transaction carries a fresh blockhash; its expiry window is the
    /// only timeout applied to the submission.
    pub fn send_payment(&self, destination: &str, amount_sol: f64) -> WalletResult<Signature> {
        let signer = self.signer.as_ref().ok_or(WalletError::NotConnected)?;
        let payer = self.address.ok_or(WalletError::NotConnected)?;
        let destination: Pubkey =
            destination
                .parse()
                .map_err(|e| WalletError::InvalidAddress {
                    address: destination.to_string(),
                    reason: format!("{e}"),
                })?;
        let lamports = sol_to_lamports(amount_sol);

        let blockhash = self.ledger.get_latest_blockhash()?;
        let message = build_payment_message(&payer, &destination, lamports, blockhash);
        let mut transaction = Transaction::new_unsigned(message);

        let signature = signer.sign_message(&transaction.message_data())?;
        transaction.signatures[0] = signature;
        transaction
            .verify()
            .map_err(|e| WalletError::Agent(format!("agent signature failed verification: {e}")))?;

        debug!(%destination, lamports, "submitting payment");
        self.ledger
            .send_transaction(&transaction)
            .map_err(|e| WalletError::Submission(e.to_string()))
    }

    /// Invoke the on-chain game program.
    ///
    /// Not implemented yet: the program's instruction interface is still in
    /// flux, so this always fails until it lands.
    pub fn invoke_program(
        &self,
        program_id: &str,
        entry_point: &str,
        args: &[serde_json::Value],
    ) -> WalletResult<Signature> {
        if self.signer.is_none() {
            return Err(WalletError::NotConnected);
        }
        program_id
            .parse::<Pubkey>()
            .map_err(|e| WalletError::InvalidAddress {
                address: program_id.to_string(),
                reason: format!("{e}"),
            })?;
        debug!(
            program_id,
            entry_point,
            args = args.len(),
            rpc = %self.config.program_rpc_url,
            "program invocation requested"
        );
        Err(WalletError::MissingProgramInterface {
            program_id: program_id.to_string(),
        })
    }
}

/// Whole-SOL amount to lamports, rounding to the nearest lamport.
fn sol_to_lamports(amount_sol: f64) -> u64 {
    (amount_sol * LAMPORTS_PER_SOL as f64).round() as u64
}

/// Build the unsigned single-transfer payment message.
fn build_payment_message(
    payer: &Pubkey,
    destination: &Pubkey,
    lamports: u64,
    blockhash: Hash,
) -> Message {
    let transfer = system_instruction::transfer(payer, destination, lamports);
    Message::new_with_blockhash(&[transfer], Some(payer), &blockhash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn dead_agent_config() -> WalletConfig {
        WalletConfig {
            // Discard port: guaranteed-unreachable agent for offline tests.
            agent_url: "http://127.0.0.1:9".to_string(),
            ..WalletConfig::default()
        }
    }

    #[test]
    fn fresh_context_is_disconnected() {
        let context = WalletContext::new(WalletConfig::default());
        assert_eq!(context.status(), WalletStatus::Disconnected);
        assert!(context.address().is_none());
        assert!(context.signer_kind().is_none());
    }

    #[test]
    fn connect_without_agent_errors_as_not_installed() {
        let mut context = WalletContext::new(dead_agent_config());
        let result = context.connect();
        assert_matches!(result, Err(WalletError::NotInstalled));
        // Status lands on Error, never Connected.
        assert_eq!(context.status(), WalletStatus::Error);
        assert!(context.address().is_none());
    }

    #[test]
    fn restored_address_does_not_connect() {
        let mut context = WalletContext::new(dead_agent_config());
        context
            .restore_address("11111111111111111111111111111111")
            .unwrap();
        assert_eq!(context.status(), WalletStatus::Disconnected);
        assert_eq!(
            context.address().map(|a| a.to_string()).as_deref(),
            Some("11111111111111111111111111111111")
        );
    }

    #[test]
    fn restoring_a_garbage_address_fails_cleanly() {
        let mut context = WalletContext::new(dead_agent_config());
        assert_matches!(
            context.restore_address("not-an-address"),
            Err(WalletError::InvalidAddress { .. })
        );
        assert!(context.address().is_none());
    }

    #[test]
    fn payment_requires_a_connection() {
        let context = WalletContext::new(dead_agent_config());
        let result = context.send_payment("11111111111111111111111111111111", 1.0);
        assert_matches!(result, Err(WalletError::NotConnected));
    }

    #[test]
    fn program_invocation_requires_a_connection() {
        let context = WalletContext::new(dead_agent_config());
        let result = context.invoke_program("11111111111111111111111111111111", "create_game", &[]);
        assert_matches!(result, Err(WalletError::NotConnected));
    }

    #[test]
    fn disconnect_clears_address_and_status() {
        let mut context = WalletContext::new(dead_agent_config());
        context
            .restore_address("11111111111111111111111111111111")
            .unwrap();
        context.disconnect();
        assert_eq!(context.status(), WalletStatus::Disconnected);
        assert!(context.address().is_none());
    }

    #[test]
    fn lamport_conversion_rounds() {
        assert_eq!(sol_to_lamports(1.0), LAMPORTS_PER_SOL);
        assert_eq!(sol_to_lamports(0.5), LAMPORTS_PER_SOL / 2);
        assert_eq!(sol_to_lamports(0.000000001), 1);
    }

    #[test]
    fn payment_message_carries_one_transfer() {
        let payer = Pubkey::new_unique();
        let destination = Pubkey::new_unique();
        let message = build_payment_message(&payer, &destination, 42, Hash::default());
        assert_eq!(message.instructions.len(), 1);
        assert_eq!(message.header.num_required_signatures, 1);
        // Fee payer is the first account key.
        assert_eq!(message.account_keys[0], payer);
    }
}
