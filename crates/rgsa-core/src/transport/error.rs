//! Transport failure type and curl error classification.

use std::fmt;

/// Coarse classification of a transport failure, for messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connect or total timeout elapsed.
    Timeout,
    /// DNS, refused connection, reset, or empty reply.
    Connection,
    /// URL could not be used (malformed, unsupported scheme).
    InvalidUrl,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TransportErrorKind::Timeout => "request timed out",
            TransportErrorKind::Connection => "could not reach backend",
            TransportErrorKind::InvalidUrl => "invalid backend URL",
            TransportErrorKind::Other => "request failed",
        };
        f.write_str(text)
    }
}

/// The request did not produce an HTTP response.
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {url}")]
pub struct TransportError {
    url: String,
    kind: TransportErrorKind,
    #[source]
    source: curl::Error,
}

impl TransportError {
    pub fn new(url: &str, source: curl::Error) -> Self {
        Self {
            url: url.to_string(),
            kind: classify_curl_error(&source),
            source,
        }
    }

    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> TransportErrorKind {
    if e.is_operation_timedout() {
        return TransportErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportErrorKind::Connection;
    }
    if e.is_url_malformed() || e.is_unsupported_protocol() {
        return TransportErrorKind::InvalidUrl;
    }
    TransportErrorKind::Other
}
