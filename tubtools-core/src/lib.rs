//! Core library for the `tubtools` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider
//! - Shared domain models (weather reports)
//! - The hot-tub evaporation model (pure physics, no I/O)
//!
//! It is used by `tubtools-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod evaporation;
pub mod model;
pub mod provider;

pub use config::Config;
pub use model::WeatherReport;
pub use provider::{ProviderError, WeatherProvider};
