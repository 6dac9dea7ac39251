//! Core types and shared functionality for mdn-mcp.
//!
//! This crate provides:
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::{AppConfig, ConfigError, LogFormat};
pub use error::Error;
