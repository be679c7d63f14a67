//! HTTP clients for the storefront's external collaborators
//!
//! # Module structure
//!
//! - [`ContactClient`] - contact form submission
//! - [`AccountClient`] - signup and login
//!
//! All endpoints speak a JSON `{"message": "..."}` envelope; the
//! shared plumbing lives in the private `http` module.

pub(crate) mod http;

mod account;
mod contact;

pub use account::AccountClient;
pub use contact::{ContactClient, ContactMessage};
