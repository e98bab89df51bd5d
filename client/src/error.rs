/// Failure of a client-side call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection, timeout or body decoding failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-2xx answer; `detail` is the server's `{"detail"}` text when it sent one.
    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),
    #[error("clipboard: {0}")]
    Clipboard(String),
}
