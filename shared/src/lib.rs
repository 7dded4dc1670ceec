//! Shared types for the table booking core
//!
//! Data models (bookings, forms, roles) and the unified error system used by
//! every crate in the workspace.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Booking, BookingForm, BookingStatus, ParseRoleError, UserRole};
pub use serde::{Deserialize, Serialize};
