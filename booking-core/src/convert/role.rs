//! Role token converter
//!
//! Turns raw strings from form binding or query parameters into a
//! [`UserRole`]. Absent input stays absent; unknown input is a
//! [`ParseRoleError`] the caller turns into a field error.

use shared::models::{ParseRoleError, UserRole};

/// Convert an optional role token.
///
/// - `None` → `Ok(None)`
/// - canonical name or lookup token, ASCII case-insensitive → `Ok(Some(role))`
/// - anything else, including blank input → `Err(ParseRoleError)`
pub fn convert(source: Option<&str>) -> Result<Option<UserRole>, ParseRoleError> {
    source.map(UserRole::from_token).transpose()
}

/// Map the self-registration "account type" onto a role.
///
/// Registration never grants `Admin`: unknown or missing values fall back
/// to `Customer`.
pub fn resolve_account_type(account_type: Option<&str>) -> UserRole {
    let Some(raw) = account_type else {
        return UserRole::Customer;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "restaurant_owner" | "restaurant-owner" | "restaurant" => UserRole::RestaurantOwner,
        _ => UserRole::Customer,
    }
}
