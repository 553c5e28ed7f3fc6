//! logsmith core - shared foundations for changelog generation
//!
//! This crate provides the error types and the typed, layered configuration
//! threaded through every stage of the changelog pipeline.

pub mod config;
pub mod error;

pub use config::{Config, ConfigOverrides, Language, OutputFormat, Theme};
pub use error::{LogsmithError, Result};
