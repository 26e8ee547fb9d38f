//! Client library for the chit-fund and micro-loan backend.
//!
//! # Architecture Overview
//!
//! ```text
//! Consumer (CLI, app screens)
//!     → services (typed per-domain facades)
//!     → api::ApiClient (timeout, bounded retries, error normalization)
//!     → network → chits backend
//!
//! Every response travels back through the same path as an
//! api::ApiResponse envelope; transport failures never escape the
//! engine as Rust errors.
//! ```

pub mod api;
pub mod config;
pub mod model;
pub mod services;

pub use api::{ApiClient, ApiResponse, ClientError};
pub use config::ClientConfig;
