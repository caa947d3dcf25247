//! End-to-end dispatch tests
//!
//! These run the dispatcher over real HTTP against wiremock servers, with the
//! session persisted to a temporary file store.

use request_dispatch::{
    FileStore, KeyValueStore, Outcome, RequestSpec, TerminalEvent,
};
use rqd_tests::{file_backed_dispatcher, recording_callbacks, seen, Seen};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_login_flow_persists_token_for_next_request() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"user": "ann", "password": "pw"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("token", "session-1")
                .set_body_json(json!({"code": 0, "data": {"name": "Ann"}, "msg": "ok"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(header("token", "session-1"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let (dispatcher, store, notifier) = file_backed_dispatcher(format!("{}/api", server.uri()), dir.path());

    let (callbacks, log) = recording_callbacks();
    dispatcher
        .dispatch(
            RequestSpec::post("/login").with_payload(json!({"user": "ann", "password": "pw"})),
            callbacks,
        )
        .await;

    assert!(matches!(seen(&log)[0], Seen::Success(ref data) if *data == json!({"name": "Ann"})));
    assert_eq!(store.get("token").as_deref(), Some("session-1"));

    let outcome = dispatcher
        .execute(RequestSpec::get("/orders").with_payload(json!({"page": 1})))
        .await;
    assert!(outcome.is_accepted());
    assert!(notifier.toasts().is_empty());

    // The token survives a reopen of the store
    let reopened = FileStore::open(store.path()).unwrap();
    assert_eq!(reopened.get("token").as_deref(), Some("session-1"));
}

#[tokio::test]
async fn test_expired_session_wipes_file_store() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 1, "msg": "Token已过期", "data": null})),
        )
        .mount(&server)
        .await;

    let (dispatcher, store, notifier) = file_backed_dispatcher(server.uri(), dir.path());
    store.set("token", "stale").unwrap();
    store.set("profile", "{\"id\":1}").unwrap();

    let (callbacks, log) = recording_callbacks();
    dispatcher.dispatch(RequestSpec::get("/me"), callbacks).await;

    assert_eq!(notifier.toast_labels(), vec!["登录已过期"]);
    assert!(FileStore::open(store.path()).unwrap().entries().is_empty());

    let log = seen(&log);
    assert_eq!(log.len(), 2);
    assert!(matches!(log[0], Seen::Fail(TerminalEvent::Response(ref e)) if e.status_code == 200));
    assert!(matches!(log[1], Seen::Complete(TerminalEvent::Response(_))));
}

#[tokio::test]
async fn test_server_fault_keeps_session() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let (dispatcher, store, notifier) = file_backed_dispatcher(server.uri(), dir.path());
    store.set("token", "keep-me").unwrap();

    let outcome = dispatcher.execute(RequestSpec::get("/anything")).await;

    assert!(matches!(outcome, Outcome::ServerFault(ref e) if e.status_code == 500));
    assert_eq!(notifier.toast_labels(), vec!["服务器故障"]);
    assert_eq!(store.get("token").as_deref(), Some("keep-me"));
}

#[tokio::test]
async fn test_business_error_message_is_shown() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 7, "msg": "库存不足"})))
        .mount(&server)
        .await;

    let (dispatcher, _store, notifier) = file_backed_dispatcher(server.uri(), dir.path());
    let outcome = dispatcher
        .execute(RequestSpec::post("/cart").with_payload(json!({"sku": "A1"})))
        .await;

    assert!(matches!(outcome, Outcome::BusinessError(_)));
    assert_eq!(notifier.toast_labels(), vec!["库存不足"]);
}

#[tokio::test]
async fn test_unreachable_server_is_network_failure() {
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let dir = TempDir::new().unwrap();

    let (dispatcher, _store, notifier) = file_backed_dispatcher(uri, dir.path());
    let (callbacks, log) = recording_callbacks();
    dispatcher.dispatch(RequestSpec::get("/ping"), callbacks).await;

    assert_eq!(notifier.toast_labels(), vec!["网络连接失败"]);
    let log = seen(&log);
    assert_eq!(log.len(), 2);
    assert!(matches!(log[0], Seen::Fail(TerminalEvent::TransportFailure(_))));
    assert!(matches!(log[1], Seen::Complete(TerminalEvent::TransportFailure(_))));
}

#[tokio::test]
async fn test_spawned_requests_share_token_store() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("token", "rotated")
                .set_body_json(json!({"code": 0})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let (dispatcher, store, _notifier) = file_backed_dispatcher(server.uri(), dir.path());
    let dispatcher = Arc::new(dispatcher);

    let first = dispatcher.spawn(RequestSpec::get("/refresh"), recording_callbacks().0);
    let second = dispatcher.spawn(RequestSpec::get("/refresh"), recording_callbacks().0);
    first.await.unwrap();
    second.await.unwrap();

    assert_eq!(store.get("token").as_deref(), Some("rotated"));
}
