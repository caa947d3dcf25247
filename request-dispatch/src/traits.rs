use crate::error::Result;
use crate::notification::Notification;
use crate::types::{ResponseEnvelope, TransportFailure};
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// Request as handed to the transport: everything already composed
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingRequest {
    pub url: String,
    pub method: String,
    pub payload: Option<Value>,
    pub headers: HashMap<String, String>,
}

/// Performs the actual network call.
///
/// Resolves exactly once: with the response (any status) or with a failure
/// when no response could be obtained.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: OutgoingRequest,
    ) -> impl Future<Output = std::result::Result<ResponseEnvelope, TransportFailure>> + Send;
}

/// Persistent key-value storage holding the session token
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove every key, not only the token
    fn clear_all(&self) -> Result<()>;
}

/// User-facing notifications. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn show_loading(&self, notification: &Notification);

    fn hide_loading(&self);

    fn show(&self, notification: &Notification);
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    fn validate(&self, config: &Self::Config) -> Result<()>;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(
        &self,
        request: OutgoingRequest,
    ) -> impl Future<Output = std::result::Result<ResponseEnvelope, TransportFailure>> + Send {
        (**self).send(request)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn clear_all(&self) -> Result<()> {
        (**self).clear_all()
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn show_loading(&self, notification: &Notification) {
        (**self).show_loading(notification)
    }

    fn hide_loading(&self) {
        (**self).hide_loading()
    }

    fn show(&self, notification: &Notification) {
        (**self).show(notification)
    }
}
