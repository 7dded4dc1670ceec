//! Data models
//!
//! Shared between the booking core and whatever renders or persists it.
//! Entity IDs are `i64`, customer identities are `Uuid`.

pub mod booking;
pub mod role;

// Re-exports
pub use booking::*;
pub use role::*;
