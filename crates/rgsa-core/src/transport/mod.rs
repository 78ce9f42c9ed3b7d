//! HTTP exchange with the analysis backend.
//!
//! The [`Transport`] trait is the seam the orchestrator talks through;
//! [`CurlTransport`] is the libcurl implementation used by the CLI.

mod easy;
mod error;
mod status;

pub use easy::CurlTransport;
pub use error::{TransportError, TransportErrorKind};
pub use status::canonical_reason;

/// A complete HTTP response with the body read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Final status code (after redirects).
    pub status: u32,
    /// Reason phrase from the status line, or the canonical phrase for `status`.
    pub reason: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// True for 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking request/response exchange. Call from `spawn_blocking` if used from async code.
pub trait Transport {
    /// POST `body` as `application/json` to `url`.
    fn post_json(&self, url: &str, body: &[u8]) -> Result<HttpResponse, TransportError>;

    /// Plain GET of `url`.
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(&self, url: &str, body: &[u8]) -> Result<HttpResponse, TransportError> {
        (**self).post_json(url, body)
    }

    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

/// Joins `path` onto the user-supplied base by plain concatenation.
///
/// The base is not normalized; a malformed base is only logged so the
/// transport reports the real failure.
pub fn endpoint(api_base: &str, path: &str) -> String {
    match url::Url::parse(api_base) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => {}
        Ok(u) => tracing::warn!(api_base, scheme = u.scheme(), "API base is not an HTTP(S) URL"),
        Err(e) => tracing::warn!(api_base, error = %e, "API base does not parse as a URL"),
    }
    format!("{api_base}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u32) -> HttpResponse {
        HttpResponse {
            status,
            reason: String::new(),
            body: Vec::new(),
        }
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(422).is_success());
        assert!(!response(500).is_success());
    }

    #[test]
    fn endpoint_concatenates_without_normalizing() {
        assert_eq!(
            endpoint("http://127.0.0.1:8000", "/api/analyze"),
            "http://127.0.0.1:8000/api/analyze"
        );
        assert_eq!(
            endpoint("https://api.example.org/", "/health"),
            "https://api.example.org//health"
        );
        assert_eq!(endpoint("not a url", "/health"), "not a url/health");
    }
}
