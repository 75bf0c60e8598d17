//! Login coordination service.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::notification::{LoginMessage, NotificationEvent};
use crate::domain::ports::AuthPort;
use crate::domain::status::LoginStatus;

/// Snapshot of the current login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    /// Whether an attempt is currently underway.
    pub in_progress: bool,
    /// Terminal outcome of the most recent attempt, if any.
    pub last_result: Option<LoginStatus>,
}

/// Coordinates automatic login attempts against an [`AuthPort`].
///
/// The coordinator owns the login-in-progress state, consumes the
/// provider's status stream, and republishes it through three observables
/// for the UI layer:
///
/// - [`login_in_progress`](Self::login_in_progress) - whether an attempt
///   is underway;
/// - [`current_status`](Self::current_status) - the latest
///   [`LoginStatus`] event;
/// - [`notifications`](Self::notifications) - a one-shot
///   [`NotificationEvent`] per terminal event.
///
/// At most one provider subscription is active at any time; requesting a
/// login while one is pending is a no-op. A failed attempt is not retried,
/// the coordinator simply returns to idle so the caller can request again.
pub struct LoginCoordinator {
    provider: Arc<dyn AuthPort>,
    in_progress: watch::Sender<bool>,
    status: watch::Sender<Option<LoginStatus>>,
    notification: watch::Sender<Option<Arc<NotificationEvent>>>,
}

impl LoginCoordinator {
    /// Creates an idle coordinator over the given provider.
    #[must_use]
    pub fn new(provider: Arc<dyn AuthPort>) -> Self {
        Self {
            provider,
            in_progress: watch::Sender::new(false),
            status: watch::Sender::new(None),
            notification: watch::Sender::new(None),
        }
    }

    /// Requests an automatic login attempt.
    ///
    /// Returns immediately. If an attempt is already in progress the call
    /// is ignored, so button double-taps or replayed UI events never open
    /// a second provider subscription. The attempt itself runs on a
    /// spawned task which processes status events in emission order.
    ///
    /// Must be called from within a tokio runtime.
    pub fn request_login(&self) {
        // The guard check and set happen under the watch channel's lock,
        // so two racing calls cannot both start an attempt.
        let started = self.in_progress.send_if_modified(|active| {
            if *active {
                false
            } else {
                *active = true;
                true
            }
        });

        if !started {
            debug!("login already in progress, ignoring request");
            return;
        }

        debug!("starting automatic login attempt");
        let mut source = self.provider.auto_login();

        let in_progress = self.in_progress.clone();
        let status = self.status.clone();
        let notification = self.notification.clone();

        tokio::spawn(async move {
            let message = loop {
                match source.recv().await {
                    Some(LoginStatus::Loading) => {
                        debug!("login status update: loading");
                        status.send_replace(Some(LoginStatus::Loading));
                    }
                    Some(LoginStatus::Error {
                        message,
                        recoverable,
                    }) => {
                        warn!(%message, recoverable, "automatic login failed");
                        status.send_replace(Some(LoginStatus::Error {
                            message,
                            recoverable,
                        }));
                        break LoginMessage::FailedToConnect;
                    }
                    Some(LoginStatus::Success(token)) => {
                        info!(token = %token, "automatic login succeeded");
                        status.send_replace(Some(LoginStatus::Success(token)));
                        break LoginMessage::Connected;
                    }
                    None => {
                        warn!("status stream closed without a terminal event");
                        break LoginMessage::FailedToConnect;
                    }
                }
            };

            // Dropping the receiver is the unsubscription; a stale source
            // cannot re-trigger state after this point.
            drop(source);

            notification.send_replace(Some(Arc::new(NotificationEvent::new(message))));
            in_progress.send_replace(false);
        });
    }

    /// Observable for whether a login attempt is underway.
    #[must_use]
    pub fn login_in_progress(&self) -> watch::Receiver<bool> {
        self.in_progress.subscribe()
    }

    /// Observable for the latest status event of the current attempt.
    ///
    /// Starts absent; holds the most recent event afterwards.
    #[must_use]
    pub fn current_status(&self) -> watch::Receiver<Option<LoginStatus>> {
        self.status.subscribe()
    }

    /// Observable for one-shot login notifications.
    ///
    /// A fresh event is published per terminal status; consuming it is
    /// at-most-once across all observers, so re-attaching after a
    /// configuration change does not replay the message.
    #[must_use]
    pub fn notifications(&self) -> watch::Receiver<Option<Arc<NotificationEvent>>> {
        self.notification.subscribe()
    }

    /// Returns whether a login attempt is currently underway.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        *self.in_progress.borrow()
    }

    /// Returns a snapshot of the current attempt.
    #[must_use]
    pub fn attempt(&self) -> LoginAttempt {
        let last_result = self
            .status
            .borrow()
            .clone()
            .filter(LoginStatus::is_terminal);

        LoginAttempt {
            in_progress: *self.in_progress.borrow(),
            last_result,
        }
    }
}
