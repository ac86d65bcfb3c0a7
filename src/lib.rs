//! # ApiResponse - Standardized JSON Response Envelopes
//!
//! A thin mapping layer for axum services: given application data or an
//! error condition, it produces a consistently shaped JSON envelope and
//! status code, logging server faults with sensitive-field masking.
//!
//! ## Envelope Kinds
//!
//! - **success**: 2xx outcomes, with optional `data` and `meta`
//! - **fail**: redirects and client faults, with an `errors` map; not logged
//! - **error**: server faults, always carrying a correlation `ref` and
//!   logged server-side; debug detail is attached outside production only
//!
//! ## Key Features
//!
//! - Status-code classification drives the envelope kind
//! - Exception-to-response translation with a precedence-ordered table
//! - Sensitive-field masking before anything reaches the log sink
//! - Sortable, collision-resistant reference codes for error correlation
//!
//! ## Example Usage
//!
//! ```
//! use api_response::{ApiResponder, Environment};
//! use serde_json::{json, Map};
//!
//! let responder = ApiResponder::new(Environment::from_env());
//! let response = responder.success(
//!     Some(json!({"id": 1})),
//!     Some("Resource loaded"),
//!     Map::new(),
//!     200,
//! );
//! # let _ = response;
//! ```

pub mod config;
pub mod exceptions;
pub mod logging;
pub mod response;
pub mod status;

// Re-export key types explicitly to avoid ambiguity
pub use config::Environment;
pub use exceptions::{ApiException, ApiExceptionHandler, ExceptionKind};
pub use logging::{ApiLogger, TracingApiLogger};
pub use response::{ApiErrorResponse, ApiFailResponse, ApiResponder, ApiSuccessResponse};
pub use status::StatusKind;
