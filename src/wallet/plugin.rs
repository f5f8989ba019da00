//! Wallet session plugin
//!
//! The [`WalletContext`] lives behind an `Arc<Mutex<_>>` so its blocking
//! operations can run on a background task; [`WalletSession`] is the UI's
//! mirror of the connection state. Operations are spawned on the compute
//! task pool with the actual blocking work in a scoped thread, and a poll
//! system applies the result when it lands. While a task is in flight the
//! mirror holds `Connecting`/busy state; failures land in an explicit error
//! state and are never retried automatically.

use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use futures_lite::future;

use solmate_wallet::{ErrorCategory, WalletConfig, WalletContext, WalletStatus};

use super::persistence;

/// The UI's view of the wallet connection.
#[derive(Resource)]
pub struct WalletSession {
    pub context: Arc<Mutex<WalletContext>>,
    pub status: WalletStatus,
    pub address: Option<String>,
    pub error: Option<String>,
    /// Signature of the last submitted payment, for display.
    pub last_payment: Option<String>,
    /// A wallet task is in flight; actions are disabled meanwhile.
    pub busy: bool,
}

impl WalletSession {
    pub fn new(config: WalletConfig) -> Self {
        Self {
            context: Arc::new(Mutex::new(WalletContext::new(config))),
            status: WalletStatus::Disconnected,
            address: None,
            error: None,
            last_payment: None,
            busy: false,
        }
    }

    /// Short display form of the address, e.g. `3nH7...9xQf`.
    pub fn short_address(&self) -> Option<String> {
        self.address.as_ref().map(|a| {
            if a.len() > 10 {
                format!("{}...{}", &a[..4], &a[a.len() - 4..])
            } else {
                a.clone()
            }
        })
    }
}

/// Result of a background wallet operation.
pub enum WalletTaskResult {
    Connected(String),
    PaymentSubmitted(String),
    Failed {
        category: ErrorCategory,
        message: String,
    },
}

/// The in-flight wallet task, if any.
#[derive(Resource)]
pub struct WalletTask(Task<WalletTaskResult>);

/// Spawn a connect round trip.
pub fn spawn_connect(commands: &mut Commands, session: &mut WalletSession) {
    if session.busy {
        return;
    }
    session.busy = true;
    session.status = WalletStatus::Connecting;
    session.error = None;

    let context = Arc::clone(&session.context);
    let task = AsyncComputeTaskPool::get().spawn(async move {
        // Blocking HTTP in a plain thread, off the task pool's executors.
        std::thread::spawn(move || {
            let mut guard = match context.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            match guard.connect() {
                Ok(address) => WalletTaskResult::Connected(address.to_string()),
                Err(e) => WalletTaskResult::Failed {
                    category: e.category(),
                    message: e.to_string(),
                },
            }
        })
        .join()
        .unwrap_or(WalletTaskResult::Failed {
            category: ErrorCategory::Failure,
            message: "wallet worker thread panicked".to_string(),
        })
    });
    commands.insert_resource(WalletTask(task));
}

/// Spawn a payment submission.
pub fn spawn_payment(
    commands: &mut Commands,
    session: &mut WalletSession,
    destination: String,
    amount_sol: f64,
) {
    if session.busy {
        return;
    }
    session.busy = true;
    session.error = None;

    let context = Arc::clone(&session.context);
    let task = AsyncComputeTaskPool::get().spawn(async move {
        std::thread::spawn(move || {
            let guard = match context.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            match guard.send_payment(&destination, amount_sol) {
                Ok(signature) => WalletTaskResult::PaymentSubmitted(signature.to_string()),
                Err(e) => WalletTaskResult::Failed {
                    category: e.category(),
                    message: e.to_string(),
                },
            }
        })
        .join()
        .unwrap_or(WalletTaskResult::Failed {
            category: ErrorCategory::Failure,
            message: "wallet worker thread panicked".to_string(),
        })
    });
    commands.insert_resource(WalletTask(task));
}

/// Disconnect: no network round trip, so it runs inline.
pub fn disconnect(session: &mut WalletSession) {
    if session.busy {
        return;
    }
    if let Ok(mut guard) = session.context.try_lock() {
        guard.disconnect();
    }
    session.status = WalletStatus::Disconnected;
    session.address = None;
    session.error = None;
    session.last_payment = None;
    persistence::clear_address();
}

/// Restore the remembered address on startup.
///
/// Pre-populates the session's address; the status stays `Disconnected`
/// until the user connects again.
fn restore_session(mut session: ResMut<WalletSession>) {
    let Some(address) = persistence::load_address() else {
        return;
    };
    let restored = match session.context.try_lock() {
        Ok(mut guard) => guard.restore_address(&address).is_ok(),
        Err(_) => false,
    };
    if restored {
        session.address = Some(address);
    } else {
        warn!("[WALLET] Discarding unusable persisted address");
        persistence::clear_address();
    }
}

/// Apply a finished wallet task to the session mirror.
fn handle_wallet_task(
    mut commands: Commands,
    task: Option<ResMut<WalletTask>>,
    mut session: ResMut<WalletSession>,
) {
    let Some(mut task) = task else {
        return;
    };
    let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
        return;
    };
    session.busy = false;
    match result {
        WalletTaskResult::Connected(address) => {
            info!("[WALLET] Connected as {address}");
            persistence::save_address(&address);
            session.address = Some(address);
            session.status = WalletStatus::Connected;
        }
        WalletTaskResult::PaymentSubmitted(signature) => {
            info!("[WALLET] Payment submitted: {signature}");
            session.last_payment = Some(signature);
        }
        WalletTaskResult::Failed { category, message } => {
            warn!("[WALLET] Operation failed ({category:?}): {message}");
            session.error = Some(message);
            // A failed payment keeps the connection; a failed connect does not.
            if session.status == WalletStatus::Connecting {
                session.status = WalletStatus::Error;
            }
        }
    }
    commands.remove_resource::<WalletTask>();
}

/// Plugin owning the wallet session lifecycle.
pub struct WalletPlugin;

impl Plugin for WalletPlugin {
    fn build(&self, app: &mut App) {
        let config = WalletConfig::from_env();
        info!(
            "[WALLET] Network `{}`, ledger {}",
            config.network_id, config.ledger_rpc_url
        );
        app.insert_resource(WalletSession::new(config))
            .add_systems(Startup, restore_session)
            .add_systems(Update, handle_wallet_task);
    }
}
