//! Input converters used at the form-binding boundary

pub mod role;

pub use role::{convert as convert_role, resolve_account_type};
