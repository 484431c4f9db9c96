//! Logging utilities.
//!
//! Centralizes logger initialization. The engine itself only depends on the
//! `log` facade; the backend is wired up here by the binary.

mod init;

pub use init::{init_logging, LoggingConfig};
