//! Mapping between request-scoped forms and persisted entities

pub mod booking;

pub use booking::{form_to_entity, to_entity, to_form, update_entity_from_form};
