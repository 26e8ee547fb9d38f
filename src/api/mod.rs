//! API access subsystem.
//!
//! # Data Flow
//! ```text
//! facade call (endpoint + typed body)
//!     → client.rs (build request, race against deadline, bounded retries)
//!     → error.rs (non-2xx status → error/message labels)
//!     → envelope.rs (uniform ApiResponse success/failure wrapper)
//!     → back to the facade unchanged
//! ```
//!
//! # Design Decisions
//! - Transport failures are folded into the envelope, never raised
//! - Retries apply to timeouts and network errors only; a non-2xx
//!   status is a definitive server answer and is mapped, not retried
//! - Retries are immediate (no backoff), mirroring the backend contract

pub mod client;
pub mod envelope;
pub mod error;

pub use client::ApiClient;
pub use envelope::ApiResponse;
pub use error::ClientError;
