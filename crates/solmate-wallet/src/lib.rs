//! Wallet boundary for SolMate.
//!
//! Everything that touches the chain lives here: endpoint configuration, the
//! signer-agent adapters, and the [`WalletContext`] that the client drives.
//! The crate deliberately knows nothing about the board or the UI; the chess
//! game is fully playable without it.
//!
//! # Architecture
//!
//! - [`WalletConfig`]: ledger RPC, program RPC, network id and signer-agent
//!   endpoints, read from the environment with testnet defaults.
//! - [`WalletSigner`]: capability adapter over the local signer agent. One
//!   implementation per known agent version, selected once at connect time by
//!   [`detect_signer`]; call sites never probe shapes themselves.
//! - [`WalletContext`]: explicit connection state machine
//!   (`Disconnected → Connecting → Connected | Error`) exposing connect,
//!   disconnect, native payment submission and (not yet implemented) program
//!   invocation.
//!
//! All operations are blocking; callers that need them off the UI thread run
//! them on a worker (see the client's wallet panel).

pub mod config;
pub mod context;
pub mod error;
pub mod signer;

pub use config::WalletConfig;
pub use context::{WalletContext, WalletStatus};
pub use error::{ErrorCategory, WalletError};
pub use signer::{detect_signer, SignerKind, WalletSigner};
