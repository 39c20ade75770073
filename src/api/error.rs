//! Error types shared by the DeepL and OpenAI client wrappers.

use std::fmt;

use thiserror::Error;

/// The remote service a request was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    DeepL,
    OpenAI,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeepL => f.write_str("DeepL API"),
            Self::OpenAI => f.write_str("OpenAI API"),
        }
    }
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be built (body serialization, invalid URL, empty input).
    Serialization,
    /// The HTTP exchange itself failed (connection, TLS, non-success status, body read).
    Transport,
    /// The response body was not the expected JSON shape.
    Decoding,
    /// The response was well-formed but carried no usable result.
    Semantic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Serialization => "serialization",
            Self::Transport => "transport",
            Self::Decoding => "decoding",
            Self::Semantic => "semantic",
        };
        f.write_str(name)
    }
}

/// A failed call to one of the remote APIs, tagged with the stage that failed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{service}: nothing to send")]
    EmptyRequest { service: Service },

    #[error("{service}: failed to serialize request body: {source}")]
    Serialize {
        service: Service,
        #[source]
        source: serde_json::Error,
    },

    #[error("{service}: failed to build HTTP request: {source}")]
    BuildRequest {
        service: Service,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service}: failed to send HTTP request: {source}")]
    Send {
        service: Service,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service}: request failed with status {status}: {body}")]
    Status {
        service: Service,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{service}: failed to read HTTP response: {source}")]
    ReadBody {
        service: Service,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service}: failed to decode response body: {source}")]
    Decode {
        service: Service,
        #[source]
        source: serde_json::Error,
    },

    #[error("{service} returned an empty response")]
    Empty { service: Service },
}

impl ApiError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyRequest { .. } | Self::Serialize { .. } | Self::BuildRequest { .. } => {
                ErrorKind::Serialization
            }
            Self::Send { .. } | Self::Status { .. } | Self::ReadBody { .. } => ErrorKind::Transport,
            Self::Decode { .. } => ErrorKind::Decoding,
            Self::Empty { .. } => ErrorKind::Semantic,
        }
    }

    pub const fn service(&self) -> Service {
        match self {
            Self::EmptyRequest { service }
            | Self::Serialize { service, .. }
            | Self::BuildRequest { service, .. }
            | Self::Send { service, .. }
            | Self::Status { service, .. }
            | Self::ReadBody { service, .. }
            | Self::Decode { service, .. }
            | Self::Empty { service } => *service,
        }
    }
}
