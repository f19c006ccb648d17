//! CDP message framing: request/response envelopes and the version payload
//! returned by the discovery endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct CdpRequest {
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CdpResponse {
    pub id: Option<u64>,
    pub result: Option<Value>,
    pub error: Option<CdpErrorPayload>,
    pub method: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CdpErrorPayload {
    pub code: i64,
    pub message: String,
}

/// Payload of `/json/version` on the remote-debugging endpoint.
#[derive(Debug, Deserialize)]
pub struct BrowserVersion {
    #[serde(rename = "Browser", default)]
    pub browser: String,
    #[serde(rename = "webSocketDebuggerUrl")]
    pub web_socket_debugger_url: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_serializes_session_scoped_call() {
        let request = CdpRequest {
            id: 7,
            method: "Page.navigate".to_string(),
            params: Some(json!({"url": "https://example.com"})),
            session_id: Some("session-1".to_string()),
        };

        let serialized = serde_json::to_string(&request).unwrap();
        assert!(serialized.contains("Page.navigate"));
        assert!(serialized.contains("\"sessionId\":\"session-1\""));
    }

    #[test]
    fn request_omits_absent_fields() {
        let request = CdpRequest {
            id: 1,
            method: "Target.createTarget".to_string(),
            params: None,
            session_id: None,
        };

        let serialized = serde_json::to_string(&request).unwrap();
        assert!(!serialized.contains("params"));
        assert!(!serialized.contains("sessionId"));
    }

    #[test]
    fn response_distinguishes_results_from_events() {
        let response: CdpResponse =
            serde_json::from_str(r#"{"id":3,"result":{"frameId":"f1"}}"#).unwrap();
        assert_eq!(response.id, Some(3));
        assert!(response.error.is_none());

        let event: CdpResponse =
            serde_json::from_str(r#"{"method":"Page.loadEventFired","params":{}}"#).unwrap();
        assert_eq!(event.id, None);
        assert_eq!(event.method.as_deref(), Some("Page.loadEventFired"));
    }

    #[test]
    fn version_payload_deserializes() {
        let version: BrowserVersion = serde_json::from_str(
            r#"{"Browser":"Chrome/126.0","webSocketDebuggerUrl":"ws://127.0.0.1:9222/devtools/browser/abc"}"#,
        )
        .unwrap();
        assert_eq!(version.browser, "Chrome/126.0");
        assert!(version.web_socket_debugger_url.starts_with("ws://"));
    }
}
