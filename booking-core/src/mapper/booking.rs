//! Booking field mapper
//!
//! Copies the six content fields between [`BookingForm`] and [`Booking`]:
//!
//! | BookingForm      | Booking          |
//! |------------------|------------------|
//! | `restaurant_id`  | `restaurant_id`  |
//! | `table_id`       | `table_id`       |
//! | `guest_count`    | `guest_count`    |
//! | `booking_time`   | `booking_time`   |
//! | `deposit_amount` | `deposit_amount` |
//! | `note`           | `note`           |
//!
//! `customer_id` only ever comes from the caller's authenticated identity and
//! is never read from, written to, or overwritten by a form. No validation
//! happens here; see [`crate::utils::validation`].

use shared::models::{Booking, BookingForm};
use uuid::Uuid;

/// Build a new booking for `customer_id` from a form. `None` in, `None` out.
pub fn to_entity(form: Option<&BookingForm>, customer_id: Uuid) -> Option<Booking> {
    form.map(|form| form_to_entity(form, customer_id))
}

/// Non-optional variant of [`to_entity`]
pub fn form_to_entity(form: &BookingForm, customer_id: Uuid) -> Booking {
    let mut booking = Booking::new(customer_id);
    copy_content_fields(&mut booking, form);
    booking
}

/// Build an editable form from a booking. `None` in, `None` out.
pub fn to_form(booking: Option<&Booking>) -> Option<BookingForm> {
    booking.map(BookingForm::from)
}

/// Overwrite the content fields of `booking` with the form's values.
///
/// No-op when either side is `None`.
pub fn update_entity_from_form(booking: Option<&mut Booking>, form: Option<&BookingForm>) {
    if let (Some(booking), Some(form)) = (booking, form) {
        copy_content_fields(booking, form);
    }
}

fn copy_content_fields(booking: &mut Booking, form: &BookingForm) {
    booking.restaurant_id = form.restaurant_id;
    booking.table_id = form.table_id;
    booking.guest_count = form.guest_count;
    booking.booking_time = form.booking_time;
    booking.deposit_amount = form.deposit_amount;
    booking.note = form.note.clone();
}
