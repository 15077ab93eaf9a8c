//! QR-code login as a cancellable timed task.
//!
//! One controller owns every state transition. The background task polls
//! the backend on a fixed 2-second tick with a hard 5-minute expiry and is
//! cancelled either explicitly or by dropping the controller, so no timer
//! can outlive the screen that started it. Poll failures are not terminal;
//! the next tick simply retries.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;

use timevalue_core::constants::{QR_LOGIN_EXPIRY_SECS, QR_POLL_INTERVAL_SECS};
use timevalue_core::errors::Result;

use crate::client::ApiClient;
use crate::models::{QrCodeSession, QrCodeStatus, QrScanStatus};
use crate::session::Session;

/// Observable state of a QR login attempt.
///
/// `Confirmed`, `Expired`, `Cancelled`, and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrLoginState {
    /// Waiting for the code to be scanned.
    Pending,
    /// Scanned on the phone, waiting for in-app confirmation.
    Scanned,
    /// Confirmed; the session has been established.
    Confirmed,
    /// The QR session outlived its 5-minute validity.
    Expired,
    /// Cancelled locally before completion.
    Cancelled,
    /// The backend confirmed without delivering credentials.
    Failed(String),
}

impl QrLoginState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, QrLoginState::Pending | QrLoginState::Scanned)
    }
}

/// Backend surface the poller needs; implemented by [`ApiClient`].
#[async_trait]
pub trait QrLoginApi: Send + Sync {
    async fn create_qr_session(&self) -> Result<QrCodeSession>;
    async fn qr_session_status(&self, qr_code_id: &str) -> Result<QrCodeStatus>;
}

#[async_trait]
impl QrLoginApi for ApiClient {
    async fn create_qr_session(&self) -> Result<QrCodeSession> {
        ApiClient::create_qr_session(self).await
    }

    async fn qr_session_status(&self, qr_code_id: &str) -> Result<QrCodeStatus> {
        ApiClient::qr_session_status(self, qr_code_id).await
    }
}

/// Controller for one QR login attempt.
pub struct QrLoginController {
    qr_code_url: String,
    state_rx: watch::Receiver<QrLoginState>,
    cancel: Arc<Notify>,
    task: JoinHandle<()>,
}

impl QrLoginController {
    /// Creates a QR session on the backend and starts polling it.
    pub async fn start(api: Arc<dyn QrLoginApi>, session: Arc<Session>) -> Result<Self> {
        let qr = api.create_qr_session().await?;
        debug!("[QrLogin] Started session {}", qr.qr_code_id);

        let (state_tx, state_rx) = watch::channel(QrLoginState::Pending);
        let cancel = Arc::new(Notify::new());

        let task = tokio::spawn(poll_loop(
            api,
            session,
            qr.qr_code_id,
            state_tx,
            cancel.clone(),
        ));

        Ok(QrLoginController {
            qr_code_url: qr.qr_code_url,
            state_rx,
            cancel,
            task,
        })
    }

    /// URL to render as the QR image.
    pub fn qr_code_url(&self) -> &str {
        &self.qr_code_url
    }

    /// Current state snapshot.
    pub fn state(&self) -> QrLoginState {
        self.state_rx.borrow().clone()
    }

    /// A receiver for observing state transitions.
    pub fn subscribe(&self) -> watch::Receiver<QrLoginState> {
        self.state_rx.clone()
    }

    /// Waits until the attempt reaches a terminal state and returns it.
    pub async fn wait(&self) -> QrLoginState {
        let mut rx = self.state_rx.clone();
        loop {
            let state = rx.borrow().clone();
            if state.is_terminal() {
                return state;
            }
            if rx.changed().await.is_err() {
                // Poller gone without a terminal transition
                return QrLoginState::Cancelled;
            }
        }
    }

    /// Cancels the attempt. Idempotent; a no-op once terminal.
    pub fn cancel(&self) {
        self.cancel.notify_one();
    }
}

impl Drop for QrLoginController {
    fn drop(&mut self) {
        // The task must not outlive the controller
        self.task.abort();
    }
}

async fn poll_loop(
    api: Arc<dyn QrLoginApi>,
    session: Arc<Session>,
    qr_code_id: String,
    state_tx: watch::Sender<QrLoginState>,
    cancel: Arc<Notify>,
) {
    let mut ticker = tokio::time::interval(Duration::from_secs(QR_POLL_INTERVAL_SECS));
    let expiry = tokio::time::sleep(Duration::from_secs(QR_LOGIN_EXPIRY_SECS));
    tokio::pin!(expiry);

    loop {
        tokio::select! {
            _ = cancel.notified() => {
                debug!("[QrLogin] Session {} cancelled", qr_code_id);
                let _ = state_tx.send(QrLoginState::Cancelled);
                return;
            }
            _ = &mut expiry => {
                debug!("[QrLogin] Session {} expired", qr_code_id);
                let _ = state_tx.send(QrLoginState::Expired);
                return;
            }
            _ = ticker.tick() => {
                match api.qr_session_status(&qr_code_id).await {
                    Ok(status) => {
                        if handle_status(&session, &state_tx, status) {
                            return;
                        }
                    }
                    Err(e) => {
                        // Transient; the next tick retries
                        warn!("[QrLogin] Poll failed for {}: {}", qr_code_id, e);
                    }
                }
            }
        }
    }
}

/// Applies one poll result. Returns true when the attempt is finished.
fn handle_status(
    session: &Session,
    state_tx: &watch::Sender<QrLoginState>,
    status: QrCodeStatus,
) -> bool {
    match status.status {
        QrScanStatus::Pending => false,
        QrScanStatus::Scanned => {
            let _ = state_tx.send(QrLoginState::Scanned);
            false
        }
        QrScanStatus::Confirmed => {
            match (status.token, status.user_info) {
                (Some(token), Some(user)) => {
                    session.establish(token, user);
                    let _ = state_tx.send(QrLoginState::Confirmed);
                }
                _ => {
                    let _ = state_tx.send(QrLoginState::Failed(
                        "Login confirmed but no credentials were returned".to_string(),
                    ));
                }
            }
            true
        }
        QrScanStatus::Expired => {
            let _ = state_tx.send(QrLoginState::Expired);
            true
        }
    }
}
