//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Status a web layer should answer with for this code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotAuthenticated => StatusCode::UNAUTHORIZED,
            Self::NotBookingOwner => StatusCode::FORBIDDEN,
            // Booking state does not allow the action
            Self::BookingNotEditable | Self::BookingNotCancellable => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
