//! Logging utilities.
//!
//! Centralizes logger initialization. Everything else in the workspace logs
//! through the `log` facade; the backend (`env_logger`) is wired up here and
//! nowhere else.

mod init;

pub use init::{LoggingConfig, init_logging};
