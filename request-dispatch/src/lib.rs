//! Request Dispatch - one call, classified
//!
//! Issues a single request against a configured base path, classifies the
//! reply (accepted, server fault, expired session, business error, or no reply
//! at all) and drives the side effects each class calls for: caller callbacks,
//! token refresh, session wipe and a user-facing notification.

// Core modules
pub mod config;
pub mod error;
pub mod types;
pub mod traits;

// Main functionality modules
pub mod classify;
pub mod dispatcher;
pub mod http;
pub mod notification;
pub mod store;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export main types for convenience
pub use config::{DispatchConfig, DispatchConfigBuilder};
pub use types::{
    AuthExpiry, Callbacks, Completion, Failure, Outcome, RequestSpec, ResponseBody,
    ResponseEnvelope, TerminalEvent, TransportFailure,
};
pub use traits::{KeyValueStore, Notifier, OutgoingRequest, Transport};
pub use classify::{classify, Classification};
pub use dispatcher::RequestDispatcher;
pub use http::ReqwestTransport;
pub use notification::Notification;
pub use store::{FileStore, MemoryStore};
pub use error::{DispatchError, Result};

/// Dispatcher wired to the reqwest transport
pub type HttpDispatcher<S, N> = RequestDispatcher<ReqwestTransport, S, N>;

/// Build a dispatcher over HTTP from a validated configuration
pub fn http_dispatcher<S, N>(config: DispatchConfig, store: S, notifier: N) -> Result<HttpDispatcher<S, N>>
where
    S: KeyValueStore,
    N: Notifier,
{
    config.validate()?;
    let transport = ReqwestTransport::new(&config)?;
    Ok(RequestDispatcher::new(transport, store, notifier, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNotifier;

    #[test]
    fn test_error_types() {
        let error = DispatchError::invalid_config("test error");
        assert!(error.to_string().contains("Invalid configuration"));

        let error = DispatchError::storage("disk full");
        assert!(error.to_string().contains("Storage error"));
    }

    #[test]
    fn test_http_dispatcher_requires_valid_config() {
        let result = http_dispatcher(DispatchConfig::default(), MemoryStore::new(), RecordingNotifier::new());
        assert!(result.is_err());

        let dispatcher = http_dispatcher(
            DispatchConfig::with_base_path("http://localhost:8080"),
            MemoryStore::new(),
            RecordingNotifier::new(),
        )
        .unwrap();
        assert_eq!(dispatcher.config().base_path, "http://localhost:8080");
    }

    #[test]
    fn test_outcome_predicates() {
        let outcome = Outcome::TransportError(TransportFailure::new("offline"));
        assert!(outcome.is_failure());
        assert!(!outcome.is_accepted());
    }
}
