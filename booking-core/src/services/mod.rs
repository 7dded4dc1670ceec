//! Booking services

pub mod booking;

pub use booking::BookingWorkflow;
