/// Errors raised while handing a draft to a [`StationSink`](super::StationSink).
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The draft could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
