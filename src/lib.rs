pub mod config;
pub mod error;
pub mod probe;
pub mod services;
pub mod telemetry;

pub use config::ProbeConfig;
pub use error::{ProbeError, Result};
pub use probe::Probe;
