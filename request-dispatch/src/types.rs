use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Message the server sends when the session token has expired
pub const TOKEN_EXPIRED_SENTINEL: &str = "Token已过期";
/// Message the server sends when no session token accompanied the request
pub const TOKEN_MISSING_SENTINEL: &str = "Token不存在";

/// One request as issued by a caller. Consumed by a single dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Path appended to the configured base path
    pub target_path: String,
    /// JSON payload, if any
    pub payload: Option<Value>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
}

impl RequestSpec {
    pub fn new<P: Into<String>, M: Into<String>>(target_path: P, method: M) -> Self {
        Self {
            target_path: target_path.into(),
            payload: None,
            method: method.into(),
        }
    }

    pub fn get<P: Into<String>>(target_path: P) -> Self {
        Self::new(target_path, "GET")
    }

    pub fn post<P: Into<String>>(target_path: P) -> Self {
        Self::new(target_path, "POST")
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Business part of a response: `{ data, code, msg }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub data: Value,
    /// Business code; any falsy value means success
    #[serde(default)]
    pub code: Value,
    #[serde(default)]
    pub msg: Option<String>,
}

impl ResponseBody {
    /// Build a body from decoded JSON.
    ///
    /// Anything other than an object yields the all-default body, so a plain
    /// text reply carries no data, no code and no message.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::default();
        };

        let msg = match map.remove("msg") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };

        Self {
            data: map.remove("data").unwrap_or(Value::Null),
            code: map.remove("code").unwrap_or(Value::Null),
            msg,
        }
    }

    /// Decode raw response bytes, falling back to the default body
    pub fn from_slice(bytes: &[u8]) -> Self {
        serde_json::from_slice::<Value>(bytes)
            .map(Self::from_value)
            .unwrap_or_default()
    }

    /// True when the business code signals success
    pub fn code_is_falsy(&self) -> bool {
        is_falsy(&self.code)
    }
}

/// Truthiness of a JSON value: null, false, 0 and "" are falsy
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// A response received from the server, whatever its status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status_code: u16,
    /// Response headers keyed by lower-case name
    pub headers: HashMap<String, String>,
    pub body: ResponseBody,
}

impl ResponseEnvelope {
    pub fn new(status_code: u16, body: ResponseBody) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body,
        }
    }

    #[must_use]
    pub fn with_header<K: AsRef<str>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Refreshed session token carried by the response, if non-empty
    pub fn token(&self) -> Option<&str> {
        self.headers
            .get("token")
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }
}

/// No response could be obtained (connection refused, timeout, bad request line)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportFailure {
    pub message: String,
}

impl TransportFailure {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request failed: {}", self.message)
    }
}

/// What the transport ended with: a response or a failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerminalEvent {
    Response(ResponseEnvelope),
    TransportFailure(TransportFailure),
}

/// Argument handed to the fail callback
pub type Failure = TerminalEvent;
/// Argument handed to the complete callback
pub type Completion = TerminalEvent;

/// Which auth sentinel the server answered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthExpiry {
    TokenExpired,
    TokenMissing,
}

impl AuthExpiry {
    /// Match a server message against the auth sentinels
    pub fn from_message(msg: &str) -> Option<Self> {
        match msg {
            TOKEN_EXPIRED_SENTINEL => Some(Self::TokenExpired),
            TOKEN_MISSING_SENTINEL => Some(Self::TokenMissing),
            _ => None,
        }
    }

    /// Label shown to the user
    pub fn label(self) -> &'static str {
        match self {
            Self::TokenExpired => "登录已过期",
            Self::TokenMissing => "您尚未登录",
        }
    }
}

/// Classified result of one dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Falsy business code inside the acceptance band
    Accepted {
        data: Value,
        token_refreshed: bool,
        envelope: ResponseEnvelope,
    },
    /// Status outside [200, 400)
    ServerFault(ResponseEnvelope),
    /// Session rejected; local storage has been wiped
    AuthError {
        reason: AuthExpiry,
        envelope: ResponseEnvelope,
    },
    /// Rejected business code with an unrecognised message
    BusinessError(ResponseEnvelope),
    /// No response reached us
    TransportError(TransportFailure),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_accepted()
    }

    /// The terminal transport event this outcome was derived from
    pub fn terminal_event(&self) -> TerminalEvent {
        match self {
            Self::Accepted { envelope, .. }
            | Self::ServerFault(envelope)
            | Self::AuthError { envelope, .. }
            | Self::BusinessError(envelope) => TerminalEvent::Response(envelope.clone()),
            Self::TransportError(failure) => TerminalEvent::TransportFailure(failure.clone()),
        }
    }
}

pub type SuccessCallback = Box<dyn FnOnce(Value) + Send>;
pub type FailCallback = Box<dyn FnOnce(Failure) + Send>;
pub type CompleteCallback = Box<dyn FnOnce(Completion) + Send>;

/// Optional caller hooks; any of them may be left out
#[derive(Default)]
pub struct Callbacks {
    pub on_success: Option<SuccessCallback>,
    pub on_fail: Option<FailCallback>,
    pub on_complete: Option<CompleteCallback>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_success<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Value) + Send + 'static,
    {
        self.on_success = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_fail<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Failure) + Send + 'static,
    {
        self.on_fail = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Completion) + Send + 'static,
    {
        self.on_complete = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_success", &self.on_success.is_some())
            .field("on_fail", &self.on_fail.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_codes() {
        assert!(is_falsy(&Value::Null));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!("")));

        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!(-1)));
        assert!(!is_falsy(&json!("0")));
        assert!(!is_falsy(&json!([])));
        assert!(!is_falsy(&json!({})));
    }

    #[test]
    fn test_body_from_object() {
        let body = ResponseBody::from_value(json!({
            "data": {"id": 7},
            "code": 1,
            "msg": "bad input"
        }));

        assert_eq!(body.data, json!({"id": 7}));
        assert_eq!(body.code, json!(1));
        assert_eq!(body.msg.as_deref(), Some("bad input"));
        assert!(!body.code_is_falsy());
    }

    #[test]
    fn test_body_from_non_object_is_default() {
        assert_eq!(ResponseBody::from_slice(b"<html>oops</html>"), ResponseBody::default());
        assert_eq!(ResponseBody::from_value(json!([1, 2])), ResponseBody::default());
        assert!(ResponseBody::default().code_is_falsy());
    }

    #[test]
    fn test_non_string_msg_is_rendered() {
        let body = ResponseBody::from_value(json!({"code": 2, "msg": 404}));
        assert_eq!(body.msg.as_deref(), Some("404"));
    }

    #[test]
    fn test_token_header_lookup() {
        let envelope = ResponseEnvelope::new(200, ResponseBody::default()).with_header("Token", "abc");
        assert_eq!(envelope.token(), Some("abc"));

        let empty = ResponseEnvelope::new(200, ResponseBody::default()).with_header("token", "");
        assert_eq!(empty.token(), None);
    }

    #[test]
    fn test_auth_sentinels() {
        assert_eq!(AuthExpiry::from_message("Token已过期"), Some(AuthExpiry::TokenExpired));
        assert_eq!(AuthExpiry::from_message("Token不存在"), Some(AuthExpiry::TokenMissing));
        assert_eq!(AuthExpiry::from_message("token已过期"), None);
        assert_eq!(AuthExpiry::TokenExpired.label(), "登录已过期");
        assert_eq!(AuthExpiry::TokenMissing.label(), "您尚未登录");
    }
}
