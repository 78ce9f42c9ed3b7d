//! CLI command handlers, one per file.

mod analyze;
mod completions;
mod config;
mod health;

pub use analyze::{exit_status, run_analyze};
pub use completions::{run_completions, run_man};
pub use config::run_config;
pub use health::run_health;
