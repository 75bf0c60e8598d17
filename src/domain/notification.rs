//! One-shot user-facing notification events.

use std::sync::atomic::{AtomicBool, Ordering};

/// Message identifier carried by a login notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMessage {
    /// Login attempt succeeded.
    Connected,
    /// Login attempt failed.
    FailedToConnect,
}

impl LoginMessage {
    /// Returns the stable message key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::FailedToConnect => "failed_to_connect",
        }
    }

    /// Returns the user-facing text.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Connected => "Connected to the UNESverse",
            Self::FailedToConnect => "Failed to connect to the UNESverse",
        }
    }
}

impl std::fmt::Display for LoginMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A notification delivered at most once.
///
/// Observers that re-attach after the message has been consumed (a screen
/// rebuild, a second subscriber) see the event but get nothing out of it,
/// which prevents duplicate toasts for a single terminal login event.
#[derive(Debug)]
pub struct NotificationEvent {
    message: LoginMessage,
    consumed: AtomicBool,
}

impl NotificationEvent {
    /// Creates a fresh, unconsumed event.
    #[must_use]
    pub const fn new(message: LoginMessage) -> Self {
        Self {
            message,
            consumed: AtomicBool::new(false),
        }
    }

    /// Takes the message, marking the event consumed.
    ///
    /// Returns `None` on every call after the first, across all holders
    /// of the event.
    #[must_use]
    pub fn consume(&self) -> Option<LoginMessage> {
        if self.consumed.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(self.message)
        }
    }

    /// Reads the message without consuming the event.
    #[must_use]
    pub const fn peek(&self) -> LoginMessage {
        self.message
    }

    /// Returns whether the message was already consumed.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use test_case::test_case;

    #[test_case(LoginMessage::Connected, "connected")]
    #[test_case(LoginMessage::FailedToConnect, "failed_to_connect")]
    fn test_message_keys(message: LoginMessage, key: &str) {
        assert_eq!(message.key(), key);
    }

    #[test]
    fn test_consume_is_one_shot() {
        let event = NotificationEvent::new(LoginMessage::Connected);

        assert_eq!(event.consume(), Some(LoginMessage::Connected));
        assert_eq!(event.consume(), None);
        assert!(event.is_consumed());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let event = NotificationEvent::new(LoginMessage::FailedToConnect);

        assert_eq!(event.peek(), LoginMessage::FailedToConnect);
        assert!(!event.is_consumed());
        assert_eq!(event.consume(), Some(LoginMessage::FailedToConnect));
    }

    #[test]
    fn test_concurrent_consumers_get_one_delivery() {
        let event = Arc::new(NotificationEvent::new(LoginMessage::Connected));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let event = Arc::clone(&event);
                std::thread::spawn(move || event.consume().is_some())
            })
            .collect();

        let deliveries = handles
            .into_iter()
            .map(|h| h.join().unwrap_or(false))
            .filter(|&delivered| delivered)
            .count();

        assert_eq!(deliveries, 1);
    }
}
