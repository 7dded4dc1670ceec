//! Booking Core - restaurant table booking domain layer
//!
//! # Overview
//!
//! - **Role conversion** (`convert`): raw role tokens to [`UserRole`]
//! - **Field mapping** (`mapper`): [`BookingForm`] ⇄ [`Booking`]
//! - **Validation** (`utils::validation`): booking time window, party size,
//!   deposit and note rules
//! - **Workflow** (`services`): create / edit / cancel on top of the mapper
//!
//! # Module layout
//!
//! ```text
//! booking-core/src/
//! ├── core/          # configuration
//! ├── convert/       # role token converter
//! ├── mapper/        # booking field mapper
//! ├── services/      # booking workflow
//! └── utils/         # logging, validation
//! ```

// Security logging macro, accepts tracing field syntax (`%`, `?`)
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr $(, $($field:tt)+)?) => {
        ::tracing::info!(
            target: "security",
            level = $level,
            event = $event
            $(, $($field)+)?
        )
    };
}

pub mod convert;
pub mod core;
pub mod mapper;
pub mod services;
pub mod utils;

pub use crate::core::Config;
pub use convert::{convert_role, resolve_account_type};
pub use mapper::{to_entity, to_form, update_entity_from_form};
pub use services::BookingWorkflow;
pub use utils::validation::BookingRules;

pub use shared::error::{AppError, AppResult, ErrorCode};
pub use shared::models::{Booking, BookingForm, BookingStatus, ParseRoleError, UserRole};

/// Load `.env`, read [`Config`] from the environment and initialise logging.
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    crate::utils::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(
        environment = %config.environment,
        log_dir = ?config.log_dir,
        "Environment ready"
    );
    config
}
