//! Utility functions and helpers

pub mod logger;
pub mod validation;

pub use logger::{init_logger, init_logger_with_file};
pub use validation::{BookingRules, MAX_NOTE_LEN, validate_booking_form};
