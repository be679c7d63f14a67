//! Core module - runtime configuration
//!
//! # Module structure
//!
//! - [`Config`] - storefront configuration

pub mod config;

pub use config::Config;
