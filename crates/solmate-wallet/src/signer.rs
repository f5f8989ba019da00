//! Signer-agent capability adapters.
//!
//! Key management lives outside the client, in a local signer agent the user
//! installs separately. Two agent generations are in the wild and they do not
//! speak the same protocol, so each one gets its own [`WalletSigner`]
//! implementation. [`detect_signer`] probes for an agent exactly once, at
//! connect time; after that every call site talks through the trait and never
//! inspects the agent shape again.
//!
//! Protocol summary:
//!
//! - **v2**: single `POST {agent}/rpc` endpoint taking
//!   `{"method": ..., "params": ...}` and answering
//!   `{"result": ...}` or `{"error": {"code", "message"}}`.
//! - **v1**: one path per operation: `GET /version`, `GET /public-key`
//!   (base58 body), `POST /sign` (base64 request body, base58 response body).

use std::time::Duration;

use base64::prelude::*;
use serde::Deserialize;
use serde_json::json;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use tracing::{debug, warn};

use crate::error::{WalletError, WalletResult};

/// How long the connect-time probe waits for an agent before concluding
/// none is installed.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// How long a signing request may sit in the agent while the user decides.
const SIGNING_TIMEOUT: Duration = Duration::from_secs(120);

/// The agent generations this client knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerKind {
    /// Current JSON-RPC style agent.
    AgentV2,
    /// Legacy path-per-operation agent.
    AgentV1,
}

/// Capability adapter over a local signer agent.
///
/// Implementations hold whatever transport state they need; the rest of the
/// crate only ever sees this trait.
pub trait WalletSigner: Send + Sync {
    /// Which agent generation this adapter speaks to.
    fn kind(&self) -> SignerKind;

    /// Ask the agent for the active account's public key.
    fn public_key(&self) -> WalletResult<Pubkey>;

    /// Ask the agent to sign raw message bytes with the active account.
    fn sign_message(&self, message: &[u8]) -> WalletResult<Signature>;
}

/// Probe the configured endpoint for a signer agent, newest protocol first.
///
/// Returns [`WalletError::NotInstalled`] when nothing answers either probe.
pub fn detect_signer(agent_url: &str) -> WalletResult<Box<dyn WalletSigner>> {
    if let Some(v2) = AgentV2::probe(agent_url)? {
        debug!(agent_url, "signer agent v2 detected");
        return Ok(Box::new(v2));
    }
    if let Some(v1) = AgentV1::probe(agent_url)? {
        debug!(agent_url, "signer agent v1 detected");
        return Ok(Box::new(v1));
    }
    warn!(agent_url, "no signer agent reachable");
    Err(WalletError::NotInstalled)
}

fn agent_client(timeout: Duration) -> WalletResult<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?)
}

fn parse_pubkey(raw: &str) -> WalletResult<Pubkey> {
    raw.trim()
        .parse::<Pubkey>()
        .map_err(|e| WalletError::Agent(format!("unparseable public key from agent: {e}")))
}

fn parse_signature(raw: &str) -> WalletResult<Signature> {
    raw.trim()
        .parse::<Signature>()
        .map_err(|e| WalletError::Agent(format!("unparseable signature from agent: {e}")))
}

// --- v2: JSON-RPC shaped agent ---

#[derive(Deserialize)]
struct RpcEnvelope {
    result: Option<serde_json::Value>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    code: String,
    message: String,
}

/// Adapter for the current-generation agent.
pub struct AgentV2 {
    endpoint: String,
}

impl AgentV2 {
    /// Probe for a v2 agent. `Ok(None)` means "nothing there", not an error.
    fn probe(agent_url: &str) -> WalletResult<Option<Self>> {
        let endpoint = format!("{}/rpc", agent_url.trim_end_matches('/'));
        let client = agent_client(PROBE_TIMEOUT)?;
        let response = client.post(&endpoint).json(&json!({ "method": "ping" })).send();
        match response {
            Ok(resp) if resp.status().is_success() => Ok(Some(Self { endpoint })),
            Ok(resp) => {
                debug!(status = %resp.status(), "v2 probe answered non-success");
                Ok(None)
            }
            Err(e) => {
                debug!("v2 probe failed: {e}");
                Ok(None)
            }
        }
    }

    fn call(&self, method: &str, params: serde_json::Value) -> WalletResult<serde_json::Value> {
        let client = agent_client(SIGNING_TIMEOUT)?;
        let envelope: RpcEnvelope = client
            .post(&self.endpoint)
            .json(&json!({ "method": method, "params": params }))
            .send()?
            .json()?;
        if let Some(err) = envelope.error {
            if err.code == "user_rejected" {
                return Err(WalletError::UserRejected);
            }
            return Err(WalletError::Agent(format!("{}: {}", err.code, err.message)));
        }
        envelope
            .result
            .ok_or_else(|| WalletError::Agent(format!("{method}: empty response")))
    }
}

impl WalletSigner for AgentV2 {
    fn kind(&self) -> SignerKind {
        SignerKind::AgentV2
    }

    fn public_key(&self) -> WalletResult<Pubkey> {
        let result = self.call("get_public_key", json!({}))?;
        let raw = result
            .get("public_key")
            .and_then(|v| v.as_str())
            .ok_or_else(|| WalletError::Agent("get_public_key: missing field".into()))?;
        parse_pubkey(raw)
    }

    fn sign_message(&self, message: &[u8]) -> WalletResult<Signature> {
        let encoded = BASE64_STANDARD.encode(message);
        let result = self.call("sign_message", json!({ "message": encoded }))?;
        let raw = result
            .get("signature")
            .and_then(|v| v.as_str())
            .ok_or_else(|| WalletError::Agent("sign_message: missing field".into()))?;
        parse_signature(raw)
    }
}

// --- v1: legacy path-per-operation agent ---

/// Adapter for the legacy agent.
pub struct AgentV1 {
    base_url: String,
}

impl AgentV1 {
    fn probe(agent_url: &str) -> WalletResult<Option<Self>> {
        let base_url = agent_url.trim_end_matches('/').to_string();
        let client = agent_client(PROBE_TIMEOUT)?;
        match client.get(format!("{base_url}/version")).send() {
            Ok(resp) if resp.status().is_success() => Ok(Some(Self { base_url })),
            Ok(_) | Err(_) => Ok(None),
        }
    }

    fn check_rejection(status: reqwest::StatusCode, body: &str) -> WalletResult<()> {
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(WalletError::UserRejected);
        }
        if !status.is_success() {
            return Err(WalletError::Agent(format!("{status}: {body}")));
        }
        Ok(())
    }
}

impl WalletSigner for AgentV1 {
    fn kind(&self) -> SignerKind {
        SignerKind::AgentV1
    }

    fn public_key(&self) -> WalletResult<Pubkey> {
        let client = agent_client(SIGNING_TIMEOUT)?;
        let resp = client.get(format!("{}/public-key", self.base_url)).send()?;
        let status = resp.status();
        let body = resp.text()?;
        Self::check_rejection(status, &body)?;
        parse_pubkey(&body)
    }

    fn sign_message(&self, message: &[u8]) -> WalletResult<Signature> {
        let client = agent_client(SIGNING_TIMEOUT)?;
        let resp = client
            .post(format!("{}/sign", self.base_url))
            .body(BASE64_STANDARD.encode(message))
            .send()?;
        let status = resp.status();
        let body = resp.text()?;
        Self::check_rejection(status, &body)?;
        parse_signature(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // 127.0.0.1:9 is the discard port; nothing answers there in CI.
    const DEAD_AGENT: &str = "http://127.0.0.1:9";

    #[test]
    fn detect_with_no_agent_reports_not_installed() {
        let result = detect_signer(DEAD_AGENT);
        assert_matches!(result, Err(WalletError::NotInstalled));
    }

    #[test]
    fn pubkey_parsing_rejects_garbage() {
        assert_matches!(parse_pubkey("not-a-key"), Err(WalletError::Agent(_)));
    }

    #[test]
    fn pubkey_parsing_accepts_base58() {
        // The system program id is a well-formed base58 key.
        let parsed = parse_pubkey("11111111111111111111111111111111");
        assert!(parsed.is_ok());
    }

    #[test]
    fn signature_parsing_rejects_garbage() {
        assert_matches!(parse_signature("zzz"), Err(WalletError::Agent(_)));
    }
}
