//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! ClientConfig (base URL, timeout, attempt budget)
//!     → ApiClient::new (URL validation, pool construction)
//!     → immutable for the lifetime of the client
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the client is built; no mutation API
//! - All fields have defaults matching the production deployment
//! - Loading from files or environment is the consumer's concern

pub mod schema;

pub use schema::ClientConfig;
