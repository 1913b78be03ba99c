#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed with status {status}")]
    Status {
        url: String,
        status: http::StatusCode,
    },

    #[error("data envelope cannot use discriminator {kind:?}")]
    InvalidKind { kind: String },

    #[error("tracing init failed: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),

    #[error("config error: {reason}")]
    Config { reason: String },
}
