//! Error types for port operations.

/// Failure of a single catalogue request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Remote answered with a non-2xx status.
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Request could not be sent or the connection failed.
    #[error("GET {url} failed: {message}")]
    Request { url: String, message: String },

    /// Request exceeded the configured timeout.
    #[error("GET {url} timed out")]
    Timeout { url: String },

    /// Body was not the expected JSON shape.
    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

impl CatalogError {
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    pub fn request(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Request {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid_response(url: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidResponse {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Check if the remote reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. }
            | Self::Request { url, .. }
            | Self::Timeout { url }
            | Self::InvalidResponse { url, .. } => url,
        }
    }
}
