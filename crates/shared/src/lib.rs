//! Shared types, errors, and configuration for Monetra.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Currency metadata and the built-in ISO 4217 definitions
//! - The money error taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::MonetraConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::Currency;
