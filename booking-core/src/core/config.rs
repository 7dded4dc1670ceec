use chrono::TimeDelta;
use shared::error::{AppError, AppResult};

use crate::utils::validation::BookingRules;

/// Upper bound accepted for BOOKING_MAX_ADVANCE_DAYS
pub const MAX_ADVANCE_DAYS_LIMIT: i64 = 3650;

/// Booking service configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Default log level |
/// | LOG_DIR | (unset) | Directory for rolling log files |
/// | BOOKING_MIN_LEAD_MINUTES | 30 | Earliest booking, minutes from now |
/// | BOOKING_MAX_ADVANCE_DAYS | 30 | Latest booking, days from now |
/// | BOOKING_MIN_GUESTS | 1 | Smallest party |
/// | BOOKING_MAX_GUESTS | 100 | Largest party |
///
/// Unparseable values fall back to the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub booking_min_lead_minutes: i64,
    pub booking_max_advance_days: i64,
    pub booking_min_guests: i32,
    pub booking_max_guests: i32,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|dir| !dir.is_empty()),
            booking_min_lead_minutes: lookup("BOOKING_MIN_LEAD_MINUTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            booking_max_advance_days: lookup("BOOKING_MAX_ADVANCE_DAYS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            booking_min_guests: lookup("BOOKING_MIN_GUESTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            booking_max_guests: lookup("BOOKING_MAX_GUESTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
        }
    }

    /// Build the booking rules, rejecting inconsistent settings
    pub fn booking_rules(&self) -> AppResult<BookingRules> {
        if self.booking_min_lead_minutes < 0 || self.booking_max_advance_days < 0 {
            return Err(AppError::config("Booking window must not be negative"));
        }
        if self.booking_max_advance_days > MAX_ADVANCE_DAYS_LIMIT {
            return Err(AppError::config(format!(
                "BOOKING_MAX_ADVANCE_DAYS must not exceed {MAX_ADVANCE_DAYS_LIMIT}"
            )));
        }
        let min_lead = TimeDelta::try_minutes(self.booking_min_lead_minutes)
            .ok_or_else(|| AppError::config("BOOKING_MIN_LEAD_MINUTES is out of range"))?;
        let max_advance = TimeDelta::try_days(self.booking_max_advance_days)
            .ok_or_else(|| AppError::config("BOOKING_MAX_ADVANCE_DAYS is out of range"))?;
        if min_lead > max_advance {
            return Err(AppError::config(
                "BOOKING_MIN_LEAD_MINUTES exceeds BOOKING_MAX_ADVANCE_DAYS",
            ));
        }
        if self.booking_min_guests < 1 || self.booking_min_guests > self.booking_max_guests {
            return Err(AppError::config(format!(
                "Invalid guest range {}..={}",
                self.booking_min_guests, self.booking_max_guests
            )));
        }

        Ok(BookingRules {
            min_lead,
            max_advance,
            min_guests: self.booking_min_guests,
            max_guests: self.booking_max_guests,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
