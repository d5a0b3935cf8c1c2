//! Error types raised by listener callbacks.
//!
//! [`ListenerError`] is the single error type flowing through every capability
//! method. The multicaster and its groups never create, wrap or log one: the
//! first error returned by a member is handed back to the caller as-is.
//!
//! Helper methods (`as_label`, `as_message`) are provided for logging/metrics
//! on the engine side.

use thiserror::Error;

/// Borrowed error observed by a listener (step failure, read failure, ...).
pub type DynError = dyn std::error::Error + Send + Sync + 'static;

/// Result type returned by every listener callback.
pub type ListenerResult<T = ()> = Result<T, ListenerError>;

/// # Errors raised by listeners.
///
/// - `Stream` is the checked failure of a stream lifecycle call (`open`, `update`, `close`).
/// - `Callback` is a listener refusing or failing an event.
/// - `Other` carries an arbitrary error produced inside a listener.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ListenerError {
    /// A stream could not be opened, updated or closed.
    #[error("stream error: {reason}")]
    Stream {
        /// The underlying error message.
        reason: String,
    },

    /// A listener callback failed.
    #[error("listener `{listener}` failed: {reason}")]
    Callback {
        /// Name of the failing listener.
        listener: String,
        /// The underlying error message.
        reason: String,
    },

    /// Any other error raised from inside a listener.
    #[error(transparent)]
    Other(#[from] Box<DynError>),
}

impl ListenerError {
    /// Creates a [`ListenerError::Stream`].
    pub fn stream(reason: impl Into<String>) -> Self {
        ListenerError::Stream {
            reason: reason.into(),
        }
    }

    /// Creates a [`ListenerError::Callback`] attributed to `listener`.
    pub fn callback(listener: impl Into<String>, reason: impl Into<String>) -> Self {
        ListenerError::Callback {
            listener: listener.into(),
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use stepcast::ListenerError;
    ///
    /// let err = ListenerError::stream("file not found");
    /// assert_eq!(err.as_label(), "listener_stream");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenerError::Stream { .. } => "listener_stream",
            ListenerError::Callback { .. } => "listener_callback",
            ListenerError::Other(_) => "listener_other",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ListenerError::Stream { reason } => format!("stream: {reason}"),
            ListenerError::Callback { listener, reason } => {
                format!("callback: listener={listener} reason={reason}")
            }
            ListenerError::Other(err) => format!("other: {err}"),
        }
    }

    /// Indicates whether this is a stream lifecycle failure.
    pub fn is_stream(&self) -> bool {
        matches!(self, ListenerError::Stream { .. })
    }
}
