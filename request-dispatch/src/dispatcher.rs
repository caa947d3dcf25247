use crate::classify::{classify, Classification};
use crate::config::DispatchConfig;
use crate::notification::Notification;
use crate::traits::{KeyValueStore, Notifier, OutgoingRequest, Transport};
use crate::types::{
    Callbacks, Outcome, RequestSpec, ResponseEnvelope, TerminalEvent, TransportFailure,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn, Instrument};
use uuid::Uuid;

/// Header carrying the session token in both directions
pub const TOKEN_HEADER: &str = "token";
/// Content type sent with every request
pub const CONTENT_TYPE: &str = "application/json";

/// Issues one request per call and resolves it into callbacks and side effects.
///
/// Per call: show the loading indicator, read the token once, send, hide the
/// indicator, then classify. An accepted response hands `body.data` to
/// `on_success` and persists any refreshed token. Every other outcome shows
/// exactly one toast and hands the response (or transport failure) to
/// `on_fail`; auth-expiry responses also wipe the whole store. `on_complete`
/// runs last on every terminal event. Nothing is ever returned as an error.
///
/// Concurrent calls share the store without coordination. Two in-flight
/// requests that both refresh the token race, and whichever settles last wins,
/// even if it was issued first.
pub struct RequestDispatcher<T, S, N> {
    transport: T,
    store: S,
    notifier: N,
    config: DispatchConfig,
}

impl<T, S, N> RequestDispatcher<T, S, N>
where
    T: Transport,
    S: KeyValueStore,
    N: Notifier,
{
    pub fn new(transport: T, store: S, notifier: N, config: DispatchConfig) -> Self {
        Self {
            transport,
            store,
            notifier,
            config,
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one request and return its classified outcome
    pub async fn execute(&self, spec: RequestSpec) -> Outcome {
        self.run(spec, Callbacks::default()).await
    }

    /// Run one request, delivering the result through `callbacks` only
    pub async fn dispatch(&self, spec: RequestSpec, callbacks: Callbacks) {
        self.run(spec, callbacks).await;
    }

    /// Fire-and-forget form of [`dispatch`](Self::dispatch) on the tokio runtime
    pub fn spawn(self: &Arc<Self>, spec: RequestSpec, callbacks: Callbacks) -> JoinHandle<()>
    where
        T: 'static,
        S: 'static,
        N: 'static,
    {
        let dispatcher = Arc::clone(self);
        tokio::spawn(async move { dispatcher.dispatch(spec, callbacks).await })
    }

    async fn run(&self, spec: RequestSpec, callbacks: Callbacks) -> Outcome {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!(
            "dispatch",
            %request_id,
            method = %spec.method,
            path = %spec.target_path
        );
        self.run_inner(spec, callbacks).instrument(span).await
    }

    async fn run_inner(&self, spec: RequestSpec, mut callbacks: Callbacks) -> Outcome {
        self.notifier.show_loading(&Notification::loading());

        let request = self.compose(spec);
        debug!(
            url = %request.url,
            with_token = request.headers.contains_key(TOKEN_HEADER),
            "sending request"
        );

        let outcome = match self.transport.send(request).await {
            Ok(envelope) => {
                self.notifier.hide_loading();
                self.settle_response(envelope, &mut callbacks)
            }
            Err(failure) => {
                self.notifier.hide_loading();
                self.settle_failure(failure, &mut callbacks)
            }
        };

        if let Some(on_complete) = callbacks.on_complete.take() {
            on_complete(outcome.terminal_event());
        }

        outcome
    }

    /// Build the outgoing request. The token is read here and nowhere else.
    fn compose(&self, spec: RequestSpec) -> OutgoingRequest {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), CONTENT_TYPE.to_string());

        if let Some(token) = self
            .store
            .get(&self.config.token_key)
            .filter(|t| !t.is_empty())
        {
            headers.insert(TOKEN_HEADER.to_string(), token);
        }

        OutgoingRequest {
            url: self.config.full_url(&spec.target_path),
            method: spec.method,
            payload: spec.payload,
            headers,
        }
    }

    fn settle_response(&self, envelope: ResponseEnvelope, callbacks: &mut Callbacks) -> Outcome {
        let classification = classify(&envelope);
        debug!(
            status = envelope.status_code,
            code = %envelope.body.code,
            ?classification,
            "response classified"
        );

        let outcome = match classification {
            Classification::Accepted => {
                let data = envelope.body.data.clone();
                if let Some(on_success) = callbacks.on_success.take() {
                    on_success(data.clone());
                }

                let token_refreshed = envelope
                    .token()
                    .is_some_and(|token| self.persist_token(token));

                return Outcome::Accepted {
                    data,
                    token_refreshed,
                    envelope,
                };
            }
            Classification::ServerFault => {
                self.notifier.show(&Notification::server_fault());
                Outcome::ServerFault(envelope)
            }
            Classification::AuthError(reason) => {
                self.notifier.show(&Notification::auth_expired(reason));
                self.wipe_session();
                Outcome::AuthError { reason, envelope }
            }
            Classification::BusinessError => {
                self.notifier
                    .show(&Notification::business(envelope.body.msg.as_deref()));
                Outcome::BusinessError(envelope)
            }
        };

        if let Some(on_fail) = callbacks.on_fail.take() {
            on_fail(outcome.terminal_event());
        }
        outcome
    }

    fn settle_failure(&self, failure: TransportFailure, callbacks: &mut Callbacks) -> Outcome {
        warn!(error = %failure.message, "no response received");
        self.notifier.show(&Notification::network_failure());

        if let Some(on_fail) = callbacks.on_fail.take() {
            on_fail(TerminalEvent::TransportFailure(failure.clone()));
        }
        Outcome::TransportError(failure)
    }

    /// Overwrite the stored token. Returns false if the store refused.
    fn persist_token(&self, token: &str) -> bool {
        match self.store.set(&self.config.token_key, token) {
            Ok(()) => {
                debug!("session token refreshed");
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to persist refreshed token");
                false
            }
        }
    }

    fn wipe_session(&self) {
        match self.store.clear_all() {
            Ok(()) => debug!("session storage cleared"),
            Err(e) => warn!(error = %e, "failed to clear session storage"),
        }
    }
}
