//! Error handling for the booking core
//!
//! - [`ErrorCode`]: numeric code per failure kind, with HTTP status mapping
//! - [`AppError`]: code, message and structured details
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("note is too long").with_detail("field", "note");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! assert_eq!(err.field(), Some("note"));
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
