use crate::types::AuthExpiry;
use serde::Serialize;

/// Label of the blocking loading indicator
pub const LOADING_LABEL: &str = "加载中";
/// Icon attached to every error toast
pub const ERROR_ICON: &str = "/images/icon/error.png";
/// How long error toasts stay visible
pub const TOAST_DURATION_MS: u64 = 3000;
/// Label shown when the server answers outside the acceptance band
pub const SERVER_FAULT_LABEL: &str = "服务器故障";
/// Label shown when no response could be obtained
pub const NETWORK_FAILURE_LABEL: &str = "网络连接失败";

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub label: String,
    pub icon: Option<String>,
    pub duration_ms: u64,
    /// Block interaction while visible
    pub mask: bool,
}

impl Notification {
    /// Blocking loading indicator shown for the lifetime of a request
    pub fn loading() -> Self {
        Self {
            label: LOADING_LABEL.to_string(),
            icon: None,
            duration_ms: 0,
            mask: true,
        }
    }

    /// Error toast with the fixed icon and duration
    pub fn error<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            icon: Some(ERROR_ICON.to_string()),
            duration_ms: TOAST_DURATION_MS,
            mask: true,
        }
    }

    pub fn server_fault() -> Self {
        Self::error(SERVER_FAULT_LABEL)
    }

    pub fn network_failure() -> Self {
        Self::error(NETWORK_FAILURE_LABEL)
    }

    pub fn auth_expired(reason: AuthExpiry) -> Self {
        Self::error(reason.label())
    }

    /// Server-supplied message, shown verbatim
    pub fn business(msg: Option<&str>) -> Self {
        Self::error(msg.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_toast_shape() {
        let toast = Notification::server_fault();

        assert_eq!(toast.label, "服务器故障");
        assert_eq!(toast.icon.as_deref(), Some("/images/icon/error.png"));
        assert_eq!(toast.duration_ms, 3000);
        assert!(toast.mask);
    }

    #[test]
    fn test_loading_has_no_icon() {
        let loading = Notification::loading();
        assert_eq!(loading.label, "加载中");
        assert!(loading.icon.is_none());
        assert!(loading.mask);
    }

    #[test]
    fn test_business_label_is_verbatim() {
        assert_eq!(Notification::business(Some("库存不足")).label, "库存不足");
        assert_eq!(Notification::business(None).label, "");
    }
}
