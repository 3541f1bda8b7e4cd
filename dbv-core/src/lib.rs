//! DataBeaver Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other DataBeaver crates:
//! - Target environment selection (production, sandbox, or a custom URL)
//! - Client configuration loaded from TOML
//! - A single error type covering every failure the client can surface
//! - Structured logging with tracing
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::{ApiConfig, AppConfig, Environment, LoggingConfig};
pub use error::{DbvError, DbvResult};
pub use logging::{init_console_logging, init_from_config, init_logging};
