//! Minimal CDP client: WebSocket endpoint discovery over HTTP, id-correlated
//! request/response routing, and flat per-target page sessions. Events are
//! not routed; page readiness is observed by polling `document.readyState`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use crate::config::constants::{cdp_call_timeout, page_load_poll_interval, page_load_timeout};

use super::error::CdpError;
use super::protocol::{BrowserVersion, CdpRequest, CdpResponse};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;
type WsSource = SplitStream<WsStream>;

type Pending = Arc<Mutex<HashMap<u64, oneshot::Sender<Result<Value, CdpError>>>>>;

pub struct BrowserClient {
    ws_tx: Arc<tokio::sync::Mutex<WsSink>>,
    pending: Pending,
    request_id: AtomicU64,
    _recv_task: tokio::task::JoinHandle<()>,
}

impl BrowserClient {
    /// Connects to the browser's remote-debugging endpoint, e.g.
    /// `http://127.0.0.1:9222`.
    pub async fn connect(endpoint: &str) -> Result<Self, CdpError> {
        let version_url = format!("{}/json/version", endpoint.trim_end_matches('/'));

        let version: BrowserVersion = reqwest::get(&version_url)
            .await
            .map_err(|e| CdpError::BrowserNotAvailable(format!("{}: {}", endpoint, e)))?
            .json()
            .await
            .map_err(|e| CdpError::BrowserNotAvailable(format!("{}: {}", endpoint, e)))?;

        log::debug!("connected to browser: {}", version.browser);

        let (ws_stream, _) =
            tokio_tungstenite::connect_async(version.web_socket_debugger_url.as_str())
                .await
                .map_err(|e| CdpError::ConnectionFailed(e.to_string()))?;

        let (ws_sink, ws_source) = ws_stream.split();
        let pending: Pending = Arc::new(Mutex::new(HashMap::new()));

        let recv_task = {
            let pending = pending.clone();
            tokio::spawn(async move {
                Self::receive_loop(ws_source, pending).await;
            })
        };

        Ok(Self {
            ws_tx: Arc::new(tokio::sync::Mutex::new(ws_sink)),
            pending,
            request_id: AtomicU64::new(1),
            _recv_task: recv_task,
        })
    }

    async fn receive_loop(mut ws_source: WsSource, pending: Pending) {
        while let Some(message) = ws_source.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let response = match serde_json::from_str::<CdpResponse>(&text) {
                        Ok(response) => response,
                        Err(e) => {
                            log::warn!("dropping unparseable CDP message: {}", e);
                            continue;
                        }
                    };

                    // Events carry no id and are not routed.
                    let Some(id) = response.id else { continue };

                    if let Some(sender) = pending.lock().remove(&id) {
                        let result = match response.error {
                            Some(error) => Err(CdpError::Protocol {
                                code: error.code,
                                message: error.message,
                            }),
                            None => Ok(response.result.unwrap_or(Value::Null)),
                        };
                        let _ = sender.send(result);
                    }
                }
                Ok(Message::Close(_)) | Err(_) => break,
                Ok(_) => {}
            }
        }

        // Socket gone: fail every in-flight call instead of hanging it.
        let mut in_flight = pending.lock();
        for (_, sender) in in_flight.drain() {
            let _ = sender.send(Err(CdpError::SessionClosed));
        }
    }

    async fn call(
        &self,
        method: &str,
        session_id: Option<&str>,
        params: Option<Value>,
    ) -> Result<Value, CdpError> {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);
        let request = CdpRequest {
            id,
            method: method.to_string(),
            params,
            session_id: session_id.map(|s| s.to_string()),
        };
        let serialized = serde_json::to_string(&request)?;

        let (tx, rx) = oneshot::channel();
        self.pending.lock().insert(id, tx);

        {
            let mut ws = self.ws_tx.lock().await;
            ws.send(Message::Text(serialized.into())).await?;
        }

        match tokio::time::timeout(cdp_call_timeout(), rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(CdpError::SessionClosed),
            Err(_) => {
                self.pending.lock().remove(&id);
                Err(CdpError::Timeout(method.to_string()))
            }
        }
    }

    /// Creates a fresh blank target and attaches a flat session to it.
    pub async fn open_page(client: &Arc<BrowserClient>) -> Result<PageSession, CdpError> {
        let created = client
            .call("Target.createTarget", None, Some(json!({"url": "about:blank"})))
            .await?;
        let target_id = created["targetId"]
            .as_str()
            .ok_or_else(|| CdpError::InvalidResponse("missing targetId".to_string()))?
            .to_string();

        let attached = client
            .call(
                "Target.attachToTarget",
                None,
                Some(json!({"targetId": target_id, "flatten": true})),
            )
            .await?;
        let session_id = attached["sessionId"]
            .as_str()
            .ok_or_else(|| CdpError::InvalidResponse("missing sessionId".to_string()))?
            .to_string();

        let session = PageSession {
            client: Arc::clone(client),
            target_id,
            session_id,
        };
        session.call("Page.enable", None).await?;
        session.call("Runtime.enable", None).await?;
        Ok(session)
    }
}

/// A session attached to a single page target.
pub struct PageSession {
    client: Arc<BrowserClient>,
    target_id: String,
    session_id: String,
}

impl PageSession {
    async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, CdpError> {
        self.client.call(method, Some(&self.session_id), params).await
    }

    pub async fn set_viewport(&self, width: u32, height: u32, mobile: bool) -> Result<(), CdpError> {
        self.call(
            "Emulation.setDeviceMetricsOverride",
            Some(json!({
                "width": width,
                "height": height,
                "deviceScaleFactor": 1,
                "mobile": mobile,
            })),
        )
        .await?;
        Ok(())
    }

    pub async fn navigate(&self, url: &str) -> Result<(), CdpError> {
        let result = self.call("Page.navigate", Some(json!({"url": url}))).await?;
        if let Some(error_text) = result.get("errorText").and_then(Value::as_str) {
            if !error_text.is_empty() {
                return Err(CdpError::InvalidResponse(format!(
                    "navigation failed: {}",
                    error_text
                )));
            }
        }
        Ok(())
    }

    /// Bounded wait for `document.readyState === "complete"`.
    pub async fn wait_for_load(&self) -> Result<(), CdpError> {
        let deadline = tokio::time::Instant::now() + page_load_timeout();
        loop {
            let state = self.evaluate("document.readyState").await?;
            if state.as_str() == Some("complete") {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(CdpError::Timeout("page load".to_string()));
            }
            tokio::time::sleep(page_load_poll_interval()).await;
        }
    }

    pub async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        let result = self
            .call(
                "Runtime.evaluate",
                Some(json!({"expression": expression, "returnByValue": true})),
            )
            .await?;

        if let Some(exception) = result.get("exceptionDetails") {
            let text = exception["text"].as_str().unwrap_or("unknown script exception");
            return Err(CdpError::InvalidResponse(format!("script exception: {}", text)));
        }

        Ok(result["result"]["value"].clone())
    }

    /// Full-page PNG screenshot of the current viewport configuration.
    pub async fn capture_screenshot(&self) -> Result<Vec<u8>, CdpError> {
        let result = self
            .call(
                "Page.captureScreenshot",
                Some(json!({"format": "png", "captureBeyondViewport": true})),
            )
            .await?;

        let data = result["data"]
            .as_str()
            .ok_or_else(|| CdpError::InvalidResponse("missing screenshot data".to_string()))?;

        STANDARD
            .decode(data)
            .map_err(|e| CdpError::InvalidResponse(format!("invalid screenshot payload: {}", e)))
    }

    /// Closes the underlying target. Called on every exit path.
    pub async fn close(&self) -> Result<(), CdpError> {
        self.client
            .call("Target.closeTarget", None, Some(json!({"targetId": self.target_id})))
            .await?;
        Ok(())
    }
}
