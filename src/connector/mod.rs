//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - Chat clients (Anthropic Messages API, scripted mock)
//! - API wiring for the command-line front end

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
