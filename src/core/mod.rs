//! Core components of the `litlink-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The [`LitClient`] and its builder.
//! - The primary [`LitError`] type.
//! - Internal networking helpers, including fixture recording under `test-mode`.

/// The client (`LitClient`), builder, and configuration.
pub mod client;
/// The primary error type (`LitError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::LitClient`
pub use client::{LitClient, LitClientBuilder};
pub use error::LitError;
