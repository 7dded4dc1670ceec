//! User Role Model
//!
//! Closed role set used by the booking application. Every role has two
//! external spellings: its canonical name (`ADMIN`) and its lookup token
//! (`admin`), the latter being what dropdowns and persisted rows carry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{AppError, ErrorCode};

/// User role (用户角色)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Customer,
    RestaurantOwner,
}

impl UserRole {
    /// All roles in declaration order
    pub const ALL: [UserRole; 3] = [
        UserRole::Admin,
        UserRole::Customer,
        UserRole::RestaurantOwner,
    ];

    /// Canonical name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Customer => "CUSTOMER",
            Self::RestaurantOwner => "RESTAURANT_OWNER",
        }
    }

    /// Lookup token, as submitted by forms and stored in the user table
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
            Self::RestaurantOwner => "restaurant_owner",
        }
    }

    /// Label shown in the UI
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Quản trị viên",
            Self::Customer => "Khách hàng",
            Self::RestaurantOwner => "Chủ nhà hàng",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn is_customer(&self) -> bool {
        matches!(self, Self::Customer)
    }

    pub fn is_restaurant_owner(&self) -> bool {
        matches!(self, Self::RestaurantOwner)
    }

    /// Granted authority string (`ROLE_ADMIN`, ...) for the security layer
    pub fn authority(&self) -> String {
        format!("ROLE_{}", self.value().to_ascii_uppercase())
    }

    /// Parse a role from its canonical name or lookup token.
    ///
    /// Both key spaces are compared ASCII case-insensitively, names first.
    /// Input is not trimmed, so blank or padded tokens are rejected.
    pub fn from_token(token: &str) -> Result<Self, ParseRoleError> {
        Self::ALL
            .iter()
            .find(|role| role.name().eq_ignore_ascii_case(token))
            .or_else(|| {
                Self::ALL
                    .iter()
                    .find(|role| role.value().eq_ignore_ascii_case(token))
            })
            .copied()
            .ok_or_else(|| ParseRoleError::new(token))
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

/// Unrecognised role token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid role: '{token}'")]
pub struct ParseRoleError {
    /// The rejected input, verbatim
    pub token: String,
}

impl ParseRoleError {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl From<ParseRoleError> for AppError {
    fn from(err: ParseRoleError) -> Self {
        AppError::with_message(ErrorCode::RoleInvalid, err.to_string())
            .with_detail("field", "role")
            .with_detail("token", err.token)
    }
}
