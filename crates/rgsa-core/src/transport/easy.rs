//! libcurl-backed [`Transport`] using one Easy handle per request.

use std::time::Duration;

use curl::easy::{Easy, List};

use super::{status, HttpResponse, Transport, TransportError};
use crate::config::RgsaConfig;

/// Blocking HTTP client built on the curl crate. Cheap to clone; holds only settings.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: String,
}

impl CurlTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
            user_agent: default_user_agent(),
        }
    }

    pub fn from_config(cfg: &RgsaConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
            user_agent: cfg.user_agent.clone().unwrap_or_else(default_user_agent),
        }
    }

    /// Runs one request. `post_body` selects POST with a JSON body; `None` is a GET.
    fn perform(&self, url: &str, post_body: Option<&[u8]>) -> Result<HttpResponse, TransportError> {
        let fail = |e: curl::Error| TransportError::new(url, e);

        let mut easy = Easy::new();
        easy.url(url).map_err(fail)?;
        easy.follow_location(true).map_err(fail)?;
        easy.max_redirections(10).map_err(fail)?;
        easy.connect_timeout(self.connect_timeout).map_err(fail)?;
        easy.timeout(self.timeout).map_err(fail)?;
        easy.useragent(&self.user_agent).map_err(fail)?;

        let mut list = List::new();
        match post_body {
            Some(body) => {
                easy.post(true).map_err(fail)?;
                easy.post_fields_copy(body).map_err(fail)?;
                list.append("Content-Type: application/json").map_err(fail)?;
                list.append("Accept: application/pdf, application/json")
                    .map_err(fail)?;
                // No 100-continue round trip; the body is small.
                list.append("Expect:").map_err(fail)?;
            }
            None => {
                easy.get(true).map_err(fail)?;
                list.append("Accept: application/json").map_err(fail)?;
            }
        }
        easy.http_headers(list).map_err(fail)?;

        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|data| {
                    header_lines.push(status::header_line(data));
                    true
                })
                .map_err(fail)?;
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(fail)?;
            transfer.perform().map_err(fail)?;
        }

        let code = easy.response_code().map_err(fail)?;
        let reason = status::reason_phrase(&header_lines, code);
        tracing::debug!(url, status = code, %reason, bytes = body.len(), "response received");

        Ok(HttpResponse {
            status: code,
            reason,
            body,
        })
    }
}

impl Transport for CurlTransport {
    fn post_json(&self, url: &str, body: &[u8]) -> Result<HttpResponse, TransportError> {
        self.perform(url, Some(body))
    }

    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.perform(url, None)
    }
}

fn default_user_agent() -> String {
    format!("rgsa/{}", env!("CARGO_PKG_VERSION"))
}
