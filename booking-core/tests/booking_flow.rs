//! End-to-end booking flow through the public API

use booking_core::{
    AppError, Booking, BookingForm, BookingStatus, BookingWorkflow, Config, ErrorCode, UserRole,
    convert_role, resolve_account_type, to_entity, to_form, update_entity_from_form,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 12, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn form_with_guests(guest_count: i32) -> BookingForm {
    BookingForm {
        restaurant_id: 42,
        table_id: Some(7),
        guest_count,
        booking_time: now() + Duration::days(2),
        deposit_amount: Decimal::new(150_000, 0),
        note: Some("Ghế trẻ em".to_string()),
    }
}

#[test]
fn admin_role_from_name_in_any_case() {
    assert_eq!(convert_role(Some("ADMIN")), Ok(Some(UserRole::Admin)));
    assert_eq!(convert_role(Some("admin")), Ok(Some(UserRole::Admin)));
}

#[test]
fn customer_role_from_lookup_token() {
    let token = UserRole::Customer.value();
    assert_eq!(convert_role(Some(token)), Ok(Some(UserRole::Customer)));
}

#[test]
fn unknown_role_is_a_field_error() {
    let err = convert_role(Some("unknown-role")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid role: 'unknown-role'");

    let app_err: AppError = err.into();
    assert_eq!(app_err.code, ErrorCode::RoleInvalid);
    assert_eq!(app_err.http_status().as_u16(), 400);
    assert!(app_err.code.is_field_error());
    assert_eq!(app_err.field(), Some("role"));
}

#[test]
fn absent_role_is_absent() {
    assert_eq!(convert_role(None), Ok(None));
}

#[test]
fn entity_takes_guest_count_and_owner() {
    let owner = Uuid::new_v4();
    let booking = to_entity(Some(&form_with_guests(4)), owner).unwrap();
    assert_eq!(booking.guest_count, 4);
    assert_eq!(booking.customer_id, owner);
}

#[test]
fn update_from_untrusted_form_keeps_owner() {
    let owner = Uuid::new_v4();
    let mut booking = to_entity(Some(&form_with_guests(2)), owner).unwrap();

    // A form body that tries to smuggle in another owner
    let payload = serde_json::json!({
        "customer_id": Uuid::new_v4(),
        "restaurant_id": 1,
        "table_id": null,
        "guest_count": 20,
        "booking_time": "2026-12-05T18:00:00",
        "deposit_amount": "0",
        "note": "changed",
    });
    let hostile: BookingForm = serde_json::from_value(payload).unwrap();
    update_entity_from_form(Some(&mut booking), Some(&hostile));

    assert_eq!(booking.customer_id, owner);
    assert_eq!(booking.guest_count, 20);
    assert_eq!(booking.note.as_deref(), Some("changed"));
}

#[test]
fn form_round_trip_exposes_no_owner() {
    let form = form_with_guests(3);
    let booking = to_entity(Some(&form), Uuid::new_v4()).unwrap();
    let back = to_form(Some(&booking)).unwrap();
    assert_eq!(back, form);

    let json = serde_json::to_value(&back).unwrap();
    assert!(json.get("customer_id").is_none());
    assert!(to_form(None::<&Booking>).is_none());
}

#[test]
fn create_edit_cancel() {
    let workflow = BookingWorkflow::from_config(&Config::default()).unwrap();
    let owner = Uuid::new_v4();
    assert_eq!(resolve_account_type(Some("customer")), UserRole::Customer);

    let mut booking = workflow
        .prepare_create(Some(&form_with_guests(4)), Some(owner), now())
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);

    // Edit screen: entity -> form -> edited form -> entity
    let mut edited = to_form(Some(&booking)).unwrap();
    edited.guest_count = 5;
    workflow
        .apply_update(&mut booking, &edited, owner, now() + Duration::minutes(5))
        .unwrap();
    assert_eq!(booking.guest_count, 5);
    assert_eq!(booking.customer_id, owner);

    let stranger = Uuid::new_v4();
    let err = workflow
        .cancel(&mut booking, stranger, None, now())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotBookingOwner);

    workflow
        .cancel(&mut booking, owner, Some("Trời mưa"), now())
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Cancelled);

    let err = workflow
        .apply_update(&mut booking, &edited, owner, now())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::BookingNotEditable);
}
