//! Shared configuration and error types for Tally.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, DatabaseConfig, FrontendConfig, ServerConfig};
pub use error::AppError;
