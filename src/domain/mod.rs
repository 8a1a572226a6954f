//! # Domain Layer
//!
//! Request models, prompt templates, and error types.
//! This layer is independent of transport and CLI concerns.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
