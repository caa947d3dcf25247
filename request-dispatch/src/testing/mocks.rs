use crate::notification::Notification;
use crate::traits::{Notifier, OutgoingRequest, Transport};
use crate::types::{ResponseBody, ResponseEnvelope, TransportFailure};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Scripted = std::result::Result<ResponseEnvelope, TransportFailure>;

/// Mock transport answering from a script, recording what it was sent
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<OutgoingRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response envelope
    pub fn with_response(self, envelope: ResponseEnvelope) -> Self {
        self.push(Ok(envelope));
        self
    }

    /// Queue a response built from a status code and a JSON body
    pub fn with_json(self, status_code: u16, body: Value) -> Self {
        self.with_response(ResponseEnvelope::new(status_code, ResponseBody::from_value(body)))
    }

    /// Queue a transport failure
    pub fn with_failure<S: Into<String>>(self, message: S) -> Self {
        self.push(Err(TransportFailure::new(message)));
        self
    }

    /// Every request sent so far, oldest first
    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn push(&self, entry: Scripted) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(entry);
        }
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: OutgoingRequest) -> Scripted {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| Err(TransportFailure::new("Mock response not scripted")))
    }
}

/// Something the notifier was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierEvent {
    ShowLoading(Notification),
    HideLoading,
    Show(Notification),
}

/// Notifier that records every call in order
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<NotifierEvent>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NotifierEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Only the toasts, loading indicator excluded
    pub fn toasts(&self) -> Vec<Notification> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                NotifierEvent::Show(notification) => Some(notification),
                _ => None,
            })
            .collect()
    }

    /// Labels of the toasts shown so far
    pub fn toast_labels(&self) -> Vec<String> {
        self.toasts().into_iter().map(|n| n.label).collect()
    }

    fn record(&self, event: NotifierEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Notifier for RecordingNotifier {
    fn show_loading(&self, notification: &Notification) {
        self.record(NotifierEvent::ShowLoading(notification.clone()));
    }

    fn hide_loading(&self) {
        self.record(NotifierEvent::HideLoading);
    }

    fn show(&self, notification: &Notification) {
        self.record(NotifierEvent::Show(notification.clone()));
    }
}
