//! Domain service facades.
//!
//! # Data Flow
//! ```text
//! consumer call (typed request)
//!     → facade (fixed endpoint path + payload/response binding)
//!     → api::ApiClient (timeout, retries, normalization)
//!     → ApiResponse<T> back to the consumer unchanged
//! ```
//!
//! Facades are stateless routing plus typing: no validation beyond shape,
//! no retries beyond the engine's, no error handling of their own.

pub mod analytics;
pub mod chits;
pub mod loans;
pub mod users;

pub use analytics::AnalyticsService;
pub use chits::ChitService;
pub use loans::LoanService;
pub use users::UserService;
