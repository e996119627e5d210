//! Core components of the `sentiment-report` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`ReportClient`] that carries endpoints, keys and model parameters.
//! - The primary [`ReportError`] type.
//! - Internal networking and wire helpers shared by both providers.

/// The client (`ReportClient`), builder, and configuration.
pub mod client;
/// The primary error type (`ReportError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::ReportClient`
pub use client::{ReportClient, ReportClientBuilder};
pub use error::ReportError;
