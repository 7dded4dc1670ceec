//! Booking workflow
//!
//! Create / edit / cancel steps around the field mapper. Every step takes
//! the caller's identity and the current time explicitly, so the workflow
//! holds no clock and no storage.

use chrono::NaiveDateTime;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Booking, BookingForm, BookingStatus};
use uuid::Uuid;

use crate::core::Config;
use crate::mapper;
use crate::security_log;
use crate::utils::validation::{
    BookingRules, MAX_NOTE_LEN, validate_booking_form, validate_optional_text,
};

#[derive(Debug, Clone, Default)]
pub struct BookingWorkflow {
    rules: BookingRules,
}

impl BookingWorkflow {
    pub fn new(rules: BookingRules) -> Self {
        Self { rules }
    }

    /// Build a workflow from the configured booking rules
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(config.booking_rules()?))
    }

    pub fn rules(&self) -> &BookingRules {
        &self.rules
    }

    /// Validate a submitted form and turn it into a new pending booking
    /// owned by the authenticated customer.
    pub fn prepare_create(
        &self,
        form: Option<&BookingForm>,
        customer_id: Option<Uuid>,
        now: NaiveDateTime,
    ) -> AppResult<Booking> {
        let form = form.ok_or_else(|| AppError::required("booking"))?;
        let customer_id = customer_id.ok_or_else(AppError::not_authenticated)?;

        validate_booking_form(form, &self.rules, now)?;

        let mut booking = mapper::form_to_entity(form, customer_id);
        booking.status = BookingStatus::Pending;
        booking.created_at = Some(to_millis(now));

        tracing::info!(
            customer_id = %customer_id,
            restaurant_id = booking.restaurant_id,
            guest_count = booking.guest_count,
            booking_time = %booking.booking_time,
            "Booking prepared"
        );
        Ok(booking)
    }

    /// Apply an edited form to an existing booking.
    ///
    /// On error the booking is left untouched.
    pub fn apply_update(
        &self,
        booking: &mut Booking,
        form: &BookingForm,
        customer_id: Uuid,
        now: NaiveDateTime,
    ) -> AppResult<()> {
        ensure_owner(booking, customer_id, "update")?;

        if !booking.can_be_edited() {
            return Err(AppError::with_message(
                ErrorCode::BookingNotEditable,
                format!("Booking cannot be edited in status {:?}", booking.status),
            )
            .with_detail("status", format!("{:?}", booking.status)));
        }

        validate_booking_form(form, &self.rules, now)?;

        mapper::update_entity_from_form(Some(booking), Some(form));
        booking.updated_at = Some(to_millis(now));

        tracing::info!(
            booking_id = ?booking.id,
            customer_id = %customer_id,
            "Booking updated"
        );
        Ok(())
    }

    /// Cancel an open booking on behalf of its owner.
    pub fn cancel(
        &self,
        booking: &mut Booking,
        customer_id: Uuid,
        reason: Option<&str>,
        now: NaiveDateTime,
    ) -> AppResult<()> {
        ensure_owner(booking, customer_id, "cancel")?;

        if !booking.can_be_cancelled() {
            return Err(AppError::with_message(
                ErrorCode::BookingNotCancellable,
                format!("Booking cannot be cancelled in status {:?}", booking.status),
            )
            .with_detail("status", format!("{:?}", booking.status)));
        }

        let reason = reason.map(str::to_string);
        validate_optional_text(&reason, "cancel_reason", MAX_NOTE_LEN)?;

        booking.status = BookingStatus::Cancelled;
        booking.cancel_reason = reason;
        booking.cancelled_at = Some(to_millis(now));
        booking.cancelled_by = Some(customer_id);

        tracing::info!(
            booking_id = ?booking.id,
            customer_id = %customer_id,
            "Booking cancelled"
        );
        Ok(())
    }
}

fn ensure_owner(booking: &Booking, customer_id: Uuid, action: &str) -> AppResult<()> {
    if booking.is_owned_by(customer_id) {
        return Ok(());
    }
    security_log!(
        "WARN",
        "booking_owner_mismatch",
        action = action,
        booking_id = ?booking.id,
        customer_id = %customer_id
    );
    Err(AppError::new(ErrorCode::NotBookingOwner))
}

fn to_millis(at: NaiveDateTime) -> i64 {
    at.and_utc().timestamp_millis()
}
