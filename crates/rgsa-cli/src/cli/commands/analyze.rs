//! `rgsa analyze <address>` – request a report and save it.

use anyhow::{Context, Result};
use rgsa_core::analyzer::{AnalyzeError, Analyzer, AnalyzerState, Outcome};
use rgsa_core::checksum;
use rgsa_core::config::RgsaConfig;
use rgsa_core::notify::StderrNotifier;
use rgsa_core::report::DirectorySink;
use rgsa_core::transport::CurlTransport;
use std::path::PathBuf;
use std::process::ExitCode;

/// Process exit status for an analysis result: 0 saved, 2 empty address, 1 otherwise.
pub fn exit_status(result: &Result<Outcome, AnalyzeError>) -> u8 {
    match result {
        Ok(Outcome::Saved { .. }) => 0,
        Ok(Outcome::Skipped) => 2,
        Ok(Outcome::AlreadyBusy) | Ok(Outcome::Rejected { .. }) | Err(_) => 1,
    }
}

pub async fn run_analyze(
    cfg: &RgsaConfig,
    address: String,
    api_base: Option<String>,
    output_dir: Option<PathBuf>,
) -> Result<ExitCode> {
    let api_base = api_base.unwrap_or_else(|| cfg.api_base.clone());
    let output_dir = match output_dir.or_else(|| cfg.output_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir().context("current directory")?,
    };

    let transport = CurlTransport::from_config(cfg);
    let state = AnalyzerState::new(api_base).with_address(address);
    println!("Generating report for {:?} via {} ...", state.address, state.api_base);

    let result = tokio::task::spawn_blocking(move || {
        let analyzer = Analyzer::new(transport, DirectorySink::new(output_dir), StderrNotifier);
        analyzer.analyze(&state)
    })
    .await
    .context("analyze task join")?;

    // Failures were already shown by the notifier.
    match &result {
        Ok(Outcome::Saved { path, bytes, sha256 }) => {
            let on_disk = checksum::sha256_path(path)?;
            if &on_disk != sha256 {
                anyhow::bail!(
                    "saved report {} does not match the received bytes (sha256 {} != {})",
                    path.display(),
                    on_disk,
                    sha256
                );
            }
            println!("Saved {} ({} bytes)", path.display(), bytes);
            println!("sha256 {}", sha256);
        }
        Ok(Outcome::Skipped) => eprintln!("Address is empty; nothing to analyze."),
        Ok(Outcome::AlreadyBusy) => eprintln!("Another analysis is already running."),
        Ok(Outcome::Rejected { status, .. }) => tracing::debug!(status, "analysis rejected"),
        Err(err) => tracing::debug!("analysis failed: {}", err),
    }
    Ok(ExitCode::from(exit_status(&result)))
}
