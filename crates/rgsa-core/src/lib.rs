pub mod config;
pub mod logging;

pub mod analyzer;
pub mod checksum;
pub mod health;
pub mod notify;
pub mod report;
pub mod transport;
