//! Shared helpers for the end-to-end dispatch tests

use request_dispatch::testing::RecordingNotifier;
use request_dispatch::{
    http_dispatcher, Callbacks, DispatchConfig, FileStore, HttpDispatcher, TerminalEvent,
};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Everything a callback saw, in invocation order
#[derive(Debug, Clone, PartialEq)]
pub enum Seen {
    Success(Value),
    Fail(TerminalEvent),
    Complete(TerminalEvent),
}

/// Callbacks that push into a shared log
pub fn recording_callbacks() -> (Callbacks, Arc<Mutex<Vec<Seen>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (s, f, c) = (log.clone(), log.clone(), log.clone());
    let callbacks = Callbacks::new()
        .on_success(move |data| s.lock().unwrap().push(Seen::Success(data)))
        .on_fail(move |event| f.lock().unwrap().push(Seen::Fail(event)))
        .on_complete(move |event| c.lock().unwrap().push(Seen::Complete(event)));
    (callbacks, log)
}

pub fn seen(log: &Arc<Mutex<Vec<Seen>>>) -> Vec<Seen> {
    log.lock().unwrap().clone()
}

/// HTTP dispatcher against `base_path` with a file store under `dir`
pub fn file_backed_dispatcher(
    base_path: String,
    dir: &Path,
) -> (HttpDispatcher<Arc<FileStore>, RecordingNotifier>, Arc<FileStore>, RecordingNotifier) {
    let store = Arc::new(FileStore::open(dir.join("storage.json")).unwrap());
    let notifier = RecordingNotifier::new();
    let dispatcher = http_dispatcher(
        DispatchConfig::with_base_path(base_path),
        store.clone(),
        notifier.clone(),
    )
    .unwrap();
    (dispatcher, store, notifier)
}
