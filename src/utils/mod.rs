//! Shared utilities
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResult`] - unified application error type
//! - [`logger`] - tracing setup for embedding applications
//! - [`validation`] - local input checks shared by checkout and services

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};
