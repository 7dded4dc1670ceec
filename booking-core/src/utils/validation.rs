//! Input validation helpers
//!
//! Booking rules checked before a form is turned into (or applied to) an
//! entity. The mapper itself never validates.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::BookingForm;

// ── Text length limits ──────────────────────────────────────────────

/// Booking notes and cancel reasons
pub const MAX_NOTE_LEN: usize = 500;

// ── Booking rules ───────────────────────────────────────────────────

/// Time window and party size accepted for a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRules {
    /// Earliest booking relative to now
    pub min_lead: Duration,
    /// Latest booking relative to now
    pub max_advance: Duration,
    pub min_guests: i32,
    pub max_guests: i32,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            min_lead: Duration::minutes(30),
            max_advance: Duration::days(30),
            min_guests: 1,
            max_guests: 100,
        }
    }
}

/// Validate a submitted booking form against `rules` at time `now`.
///
/// Checks run in a fixed order (time, guests, deposit, note) and the first
/// failure is returned with a `field` detail.
pub fn validate_booking_form(
    form: &BookingForm,
    rules: &BookingRules,
    now: NaiveDateTime,
) -> AppResult<()> {
    validate_booking_time(form.booking_time, rules, now)?;
    validate_guest_count(form.guest_count, rules)?;
    validate_deposit_amount(form.deposit_amount)?;
    validate_optional_text(&form.note, "note", MAX_NOTE_LEN)
}

pub fn validate_booking_time(
    booking_time: NaiveDateTime,
    rules: &BookingRules,
    now: NaiveDateTime,
) -> AppResult<()> {
    if booking_time < now {
        return Err(AppError::new(ErrorCode::BookingTimeInPast).with_detail("field", "booking_time"));
    }

    // Past the end of the calendar nothing is early enough
    let earliest = now
        .checked_add_signed(rules.min_lead)
        .unwrap_or(NaiveDateTime::MAX);
    if booking_time < earliest {
        return Err(AppError::with_message(
            ErrorCode::BookingTimeTooSoon,
            format!(
                "Booking must be made at least {} minutes in advance",
                rules.min_lead.num_minutes()
            ),
        )
        .with_detail("field", "booking_time")
        .with_detail("earliest", earliest.to_string()));
    }

    let latest = now
        .checked_add_signed(rules.max_advance)
        .unwrap_or(NaiveDateTime::MAX);
    if booking_time > latest {
        return Err(AppError::with_message(
            ErrorCode::BookingTimeTooFar,
            format!(
                "Booking cannot be made more than {} days in advance",
                rules.max_advance.num_days()
            ),
        )
        .with_detail("field", "booking_time")
        .with_detail("latest", latest.to_string()));
    }

    Ok(())
}

pub fn validate_guest_count(guest_count: i32, rules: &BookingRules) -> AppResult<()> {
    if !(rules.min_guests..=rules.max_guests).contains(&guest_count) {
        return Err(AppError::with_message(
            ErrorCode::GuestCountOutOfRange,
            format!(
                "Guest count must be between {} and {}",
                rules.min_guests, rules.max_guests
            ),
        )
        .with_detail("field", "guest_count")
        .with_detail("min", rules.min_guests)
        .with_detail("max", rules.max_guests));
    }
    Ok(())
}

pub fn validate_deposit_amount(deposit_amount: Decimal) -> AppResult<()> {
    if deposit_amount.is_sign_negative() && !deposit_amount.is_zero() {
        return Err(AppError::new(ErrorCode::NegativeDeposit).with_detail("field", "deposit_amount"));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> AppResult<()> {
    if let Some(v) = value {
        let len = v.chars().count();
        if len > max_len {
            return Err(AppError::validation(format!(
                "{field} is too long ({len} chars, max {max_len})"
            ))
            .with_detail("field", field));
        }
    }
    Ok(())
}
