//! Error codes raised by the booking core
//!
//! Numbering by area:
//! - 0xxx: form input
//! - 1xxx: authentication
//! - 2xxx: ownership
//! - 4xxx: booking rules and state
//! - 8xxx: user / role input
//! - 9xxx: system

use std::fmt;

/// Error code carried by every [`AppError`](super::AppError)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Input ====================
    /// Generic field validation failure (length limits, ...)
    ValidationFailed = 2,
    /// Required input missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    NotAuthenticated = 1001,

    // ==================== 2xxx: Ownership ====================
    /// Booking belongs to another customer
    NotBookingOwner = 2006,

    // ==================== 4xxx: Booking ====================
    BookingNotEditable = 4002,
    BookingNotCancellable = 4003,
    BookingTimeInPast = 4004,
    /// Closer than the minimum lead time
    BookingTimeTooSoon = 4005,
    /// Beyond the advance booking window
    BookingTimeTooFar = 4006,
    GuestCountOutOfRange = 4007,
    NegativeDeposit = 4008,

    // ==================== 8xxx: User ====================
    /// Role token names no known role
    RoleInvalid = 8101,

    // ==================== 9xxx: System ====================
    ConfigError = 9005,
}

impl ErrorCode {
    /// Numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::NotBookingOwner => "You can only manage your own bookings",
            ErrorCode::BookingNotEditable => "This booking cannot be edited",
            ErrorCode::BookingNotCancellable => "This booking cannot be cancelled",
            ErrorCode::BookingTimeInPast => "Booking time cannot be in the past",
            ErrorCode::BookingTimeTooSoon => "Booking time is too soon",
            ErrorCode::BookingTimeTooFar => "Booking time is too far in the future",
            ErrorCode::GuestCountOutOfRange => "Guest count is out of range",
            ErrorCode::NegativeDeposit => "Deposit amount cannot be negative",
            ErrorCode::RoleInvalid => "Invalid role",
            ErrorCode::ConfigError => "Configuration error",
        }
    }

    /// Failures the user can fix by correcting the submitted form
    pub const fn is_field_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::ValidationFailed
                | ErrorCode::RequiredField
                | ErrorCode::BookingTimeInPast
                | ErrorCode::BookingTimeTooSoon
                | ErrorCode::BookingTimeTooFar
                | ErrorCode::GuestCountOutOfRange
                | ErrorCode::NegativeDeposit
                | ErrorCode::RoleInvalid
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotBookingOwner.code(), 2006);
        assert_eq!(u16::from(ErrorCode::NegativeDeposit), 4008);
        assert_eq!(ErrorCode::RoleInvalid.code(), 8101);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::RequiredField.to_string(), "E0007");
        assert_eq!(ErrorCode::RoleInvalid.to_string(), "E8101");
    }

    #[test]
    fn test_field_errors() {
        assert!(ErrorCode::GuestCountOutOfRange.is_field_error());
        assert!(ErrorCode::RoleInvalid.is_field_error());
        assert!(!ErrorCode::NotBookingOwner.is_field_error());
        assert!(!ErrorCode::BookingNotEditable.is_field_error());
        assert!(!ErrorCode::ConfigError.is_field_error());
    }
}
