//! Error types for the wallet boundary.
//!
//! Every failure a wallet operation can produce is funneled into
//! [`WalletError`], and each error maps to one of three user-facing
//! categories via [`WalletError::category`]: the agent is not installed, the
//! user rejected the request, or the operation simply failed. The client
//! surfaces the category; the full error is logged.

use thiserror::Error;

/// Errors that can occur at the wallet boundary.
#[derive(Error, Debug)]
pub enum WalletError {
    /// No signer agent is reachable at the configured endpoint.
    #[error("no wallet agent found; install a signer agent and try again")]
    NotInstalled,

    /// The user declined the request in the signer agent.
    #[error("request rejected by the wallet")]
    UserRejected,

    /// An operation that requires a connection was called while disconnected.
    #[error("no wallet connected")]
    NotConnected,

    /// The signer agent answered with something other than success.
    #[error("wallet agent error: {0}")]
    Agent(String),

    /// A destination or account address failed to parse.
    #[error("invalid address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// HTTP transport failure talking to the signer agent.
    #[error("wallet agent transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Ledger RPC failure (account lookup, blockhash, submission).
    #[error("ledger request failed: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    /// The signed transaction was rejected at submission time.
    #[error("transaction submission failed: {0}")]
    Submission(String),

    /// Program invocation is pending the on-chain interface definition.
    #[error("program interface for `{program_id}` is not available yet")]
    MissingProgramInterface { program_id: String },
}

/// User-facing classification of a wallet failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The signer agent is absent.
    NotInstalled,
    /// The user declined in the signer agent.
    UserRejected,
    /// Anything else: transport, ledger, submission, bad input.
    Failure,
}

impl WalletError {
    /// Map this error to its user-facing category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            WalletError::NotInstalled => ErrorCategory::NotInstalled,
            WalletError::UserRejected => ErrorCategory::UserRejected,
            _ => ErrorCategory::Failure,
        }
    }
}

/// Result type alias for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_cover_the_three_user_facing_classes() {
        assert_eq!(
            WalletError::NotInstalled.category(),
            ErrorCategory::NotInstalled
        );
        assert_eq!(
            WalletError::UserRejected.category(),
            ErrorCategory::UserRejected
        );
        assert_eq!(
            WalletError::NotConnected.category(),
            ErrorCategory::Failure
        );
        assert_eq!(
            WalletError::Submission("blockhash expired".into()).category(),
            ErrorCategory::Failure
        );
        assert_eq!(
            WalletError::MissingProgramInterface {
                program_id: "SoLMaTe111".into()
            }
            .category(),
            ErrorCategory::Failure
        );
    }
}
