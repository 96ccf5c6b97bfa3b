//! Core types and shared functionality for snipbin.
//!
//! This crate provides:
//! - The snippet store with a SQLite backend
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod store;

pub use config::AppConfig;
pub use error::Error;
pub use store::{Snippet, SnippetDb};
