//! `rgsa health` – probe the backend.

use anyhow::{Context, Result};
use rgsa_core::config::RgsaConfig;
use rgsa_core::health;
use rgsa_core::transport::CurlTransport;
use std::process::ExitCode;

pub async fn run_health(cfg: &RgsaConfig, api_base: Option<String>) -> Result<ExitCode> {
    let api_base = api_base.unwrap_or_else(|| cfg.api_base.clone());
    let transport = CurlTransport::from_config(cfg);
    let result = tokio::task::spawn_blocking({
        let api_base = api_base.clone();
        move || health::check(&transport, &api_base)
    })
    .await
    .context("health task join")?;

    match result {
        Ok(h) if h.is_ok() => {
            println!("{api_base}: {}", h.status);
            Ok(ExitCode::SUCCESS)
        }
        Ok(h) => {
            eprintln!("Error: {api_base} reports status {:?}", h.status);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            eprintln!("Error: {:#}", anyhow::Error::from(err));
            Ok(ExitCode::FAILURE)
        }
    }
}
