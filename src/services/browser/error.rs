use thiserror::Error;

#[derive(Debug, Error)]
pub enum CdpError {
    #[error("browser not reachable at {0}")]
    BrowserNotAvailable(String),

    #[error("WebSocket connection failed: {0}")]
    ConnectionFailed(String),

    #[error("CDP protocol error {code}: {message}")]
    Protocol { code: i64, message: String },

    #[error("CDP call timed out: {0}")]
    Timeout(String),

    #[error("browser session closed")]
    SessionClosed,

    #[error("unexpected CDP response: {0}")]
    InvalidResponse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
