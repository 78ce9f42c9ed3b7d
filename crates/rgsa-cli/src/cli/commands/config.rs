//! `rgsa config` – show where the config lives and what it resolves to.

use anyhow::Result;
use rgsa_core::{config, logging};
use std::process::ExitCode;

pub fn run_config() -> Result<ExitCode> {
    let path = config::config_path()?;
    let cfg = config::load_or_init_at(&path)?;
    println!("# config: {}", path.display());
    if let Ok(log) = logging::log_path() {
        println!("# log:    {}", log.display());
    }
    print!("{}", toml::to_string_pretty(&cfg)?);
    Ok(ExitCode::SUCCESS)
}
