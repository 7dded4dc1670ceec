//! Booking Model
//!
//! `Booking` is the persisted reservation, `BookingForm` the editable
//! request-scoped copy of its content fields. The form deliberately has no
//! customer field: ownership is only ever taken from the authenticated
//! identity.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking status (预订状态)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Waiting for restaurant confirmation
    #[default]
    Pending,
    /// Confirmed, waiting for payment / arrival
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
    /// Cancellation requested, refund in progress
    PendingCancel,
    Deleted,
}

impl BookingStatus {
    /// Statuses in which the customer may still change the booking
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

/// Booking entity (预订)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Assigned by persistence, None until stored
    pub id: Option<i64>,
    /// Owner, resolved from the authenticated session
    pub customer_id: Uuid,
    pub restaurant_id: i64,
    pub table_id: Option<i64>,
    pub guest_count: i32,
    pub booking_time: NaiveDateTime,
    pub deposit_amount: Decimal,
    pub note: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    /// Unix millis
    pub created_at: Option<i64>,
    /// Unix millis
    pub updated_at: Option<i64>,
    /// Unix millis
    pub cancelled_at: Option<i64>,
    pub cancel_reason: Option<String>,
    pub cancelled_by: Option<Uuid>,
}

impl Booking {
    /// Empty pending booking owned by `customer_id`
    pub fn new(customer_id: Uuid) -> Self {
        Self {
            id: None,
            customer_id,
            restaurant_id: 0,
            table_id: None,
            guest_count: 0,
            booking_time: NaiveDateTime::default(),
            deposit_amount: Decimal::ZERO,
            note: None,
            status: BookingStatus::Pending,
            created_at: None,
            updated_at: None,
            cancelled_at: None,
            cancel_reason: None,
            cancelled_by: None,
        }
    }

    pub fn has_deposit(&self) -> bool {
        self.deposit_amount > Decimal::ZERO
    }

    pub fn can_be_edited(&self) -> bool {
        self.status.is_open()
    }

    pub fn can_be_cancelled(&self) -> bool {
        self.status.is_open()
    }

    pub fn is_owned_by(&self, customer_id: Uuid) -> bool {
        self.customer_id == customer_id
    }
}

/// Booking form payload (预订表单)
///
/// Carries exactly the six content fields shared with [`Booking`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookingForm {
    pub restaurant_id: i64,
    pub table_id: Option<i64>,
    pub guest_count: i32,
    pub booking_time: NaiveDateTime,
    pub deposit_amount: Decimal,
    pub note: Option<String>,
}

impl From<&Booking> for BookingForm {
    fn from(booking: &Booking) -> Self {
        Self {
            restaurant_id: booking.restaurant_id,
            table_id: booking.table_id,
            guest_count: booking.guest_count,
            booking_time: booking.booking_time,
            deposit_amount: booking.deposit_amount,
            note: booking.note.clone(),
        }
    }
}
