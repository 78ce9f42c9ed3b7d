//! Request orchestration: submit an address, save the returned report.
//!
//! One [`Analyzer::analyze`] call is one exchange with the backend:
//!
//! 1. skip if the address is empty or a request is already in flight;
//! 2. POST `{"address": ...}` to `<api_base>/api/analyze`;
//! 3. on non-2xx, alert `Error: <message>` from the JSON error body;
//! 4. on 2xx, save the body as `<sanitized-address>_geotech_seismic_report.pdf`.
//!
//! The busy flag is held by a guard for the whole exchange and cleared on every
//! exit path. Nothing is retried, cached, or deduplicated.

mod busy;
mod message;


use std::error::Error as StdError;
use std::path::PathBuf;

use serde::Serialize;

use crate::checksum;
use crate::config::DEFAULT_API_BASE;
use crate::notify::Notifier;
use crate::report::{self, ReportSink};
use crate::transport::{self, Transport, TransportError};

pub use busy::{BusyFlag, BusyGuard};
pub use message::backend_error_message;

/// Path of the analysis endpoint, appended to the API base.
pub const ANALYZE_PATH: &str = "/api/analyze";

/// JSON body of the analysis request.
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub address: &'a str,
}

/// Front-end state for one analyzer form.
#[derive(Debug, Clone)]
pub struct AnalyzerState {
    /// Backend base URL; user-editable, not validated.
    pub api_base: String,
    /// Free-text property address.
    pub address: String,
    pub busy: BusyFlag,
}

impl Default for AnalyzerState {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl AnalyzerState {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            address: String::new(),
            busy: BusyFlag::new(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Whether a submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.address.is_empty() && !self.busy.is_busy()
    }
}

/// How an analysis ended when no local error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Address was empty; nothing was sent.
    Skipped,
    /// Another request was in flight; nothing was sent.
    AlreadyBusy,
    /// Report saved.
    Saved {
        path: PathBuf,
        bytes: u64,
        sha256: String,
    },
    /// Backend answered non-2xx; the user was alerted with `message`.
    Rejected { status: u32, message: String },
}

/// Local failure during an analysis. The user has already been alerted.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("could not encode request body")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("could not save report as {filename}")]
    Save {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

/// Drives one request at a time through a transport, a report sink and a notifier.
#[derive(Debug)]
pub struct Analyzer<T, S, N> {
    transport: T,
    sink: S,
    notifier: N,
}

impl<T: Transport, S: ReportSink, N: Notifier> Analyzer<T, S, N> {
    pub fn new(transport: T, sink: S, notifier: N) -> Self {
        Self {
            transport,
            sink,
            notifier,
        }
    }

    /// Runs one analysis for `state`. See the module docs for the flow.
    pub fn analyze(&self, state: &AnalyzerState) -> Result<Outcome, AnalyzeError> {
        if state.address.is_empty() {
            tracing::debug!("empty address; not submitting");
            return Ok(Outcome::Skipped);
        }
        let Some(_busy) = state.busy.try_engage() else {
            tracing::debug!("analysis already in flight; not submitting");
            return Ok(Outcome::AlreadyBusy);
        };

        let result = self.submit(&state.api_base, &state.address);
        if let Err(e) = &result {
            let message = error_chain(e);
            tracing::warn!(address = %state.address, error = %message, "analysis failed");
            self.notifier.alert(&format!("Error: {message}"));
        }
        result
    }

    fn submit(&self, api_base: &str, address: &str) -> Result<Outcome, AnalyzeError> {
        let url = transport::endpoint(api_base, ANALYZE_PATH);
        let body = serde_json::to_vec(&AnalyzeRequest { address })?;
        tracing::info!(%url, address, "submitting analysis request");

        let response = self.transport.post_json(&url, &body)?;
        if !response.is_success() {
            let message = backend_error_message(&response.reason, &response.body);
            tracing::warn!(status = response.status, %message, "backend rejected analysis");
            self.notifier.alert(&format!("Error: {message}"));
            return Ok(Outcome::Rejected {
                status: response.status,
                message,
            });
        }

        let payload = response.body;
        if !report::looks_like_pdf(&payload) {
            tracing::debug!(bytes = payload.len(), "report payload lacks PDF magic; saving as-is");
        }
        let filename = report::report_filename(address);
        let path = self
            .sink
            .save(&filename, &payload)
            .map_err(|source| AnalyzeError::Save { filename, source })?;
        let sha256 = checksum::sha256_hex(&payload);
        tracing::info!(path = %path.display(), bytes = payload.len(), %sha256, "report saved");

        Ok(Outcome::Saved {
            path,
            bytes: payload.len() as u64,
            sha256,
        })
    }
}

/// `err` and its sources joined with `": "`.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(s) = source {
        message.push_str(": ");
        message.push_str(&s.to_string());
        source = s.source();
    }
    message
}
