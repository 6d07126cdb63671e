/// Error types for fetching, decoding and rendering the chart
use thiserror::Error;

/// Broad class of a [`ChartError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network/transport failure or non-success HTTP status
    Fetch,
    /// Payload is not structured as a list of chart rows
    Decode,
    /// Chart engine refused to build the chart
    Render,
}

/// Main error type for a chart rebuild
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Request never produced a response
    #[error("HTTP request failed: {0}")]
    Fetch(String),

    /// Server answered with a non-2xx status
    #[error("HTTP request to {url} failed with status {status}")]
    HttpStatus { status: u16, url: String },

    /// Response body could not be decoded into chart rows
    #[error("Failed to decode chart data: {0}")]
    Decode(String),

    /// Chart instance could not be created
    #[error("Failed to render chart: {0}")]
    Render(String),
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChartError::Fetch(_) | ChartError::HttpStatus { .. } => ErrorKind::Fetch,
            ChartError::Decode(_) => ErrorKind::Decode,
            ChartError::Render(_) => ErrorKind::Render,
        }
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(value: serde_json::Error) -> Self {
        ChartError::Decode(value.to_string())
    }
}

/// Type alias for Results using ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
