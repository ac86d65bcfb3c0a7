//! Envelope builders and the responder that routes outcomes to them.

pub mod error;
pub mod fail;
pub mod responder;
pub mod success;

pub use error::{ApiErrorResponse, DebugInfo};
pub use fail::ApiFailResponse;
pub use responder::ApiResponder;
pub use success::ApiSuccessResponse;
