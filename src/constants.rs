//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Maximum accepted form body size in bytes
pub const MAX_FORM_BODY_BYTES: usize = 16 * 1024;

/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default database location (created if missing)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://sports_day.db";

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

// =============================================================================
// SESSION DEFAULTS
// =============================================================================

/// Name of the session cookie
pub const SESSION_COOKIE_NAME: &str = "sportsday_session";

/// Name of the flash message cookie
pub const FLASH_COOKIE_NAME: &str = "sportsday_flash";

/// Default session lifetime in hours
pub const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 12;

/// Length of the random session token handed to the browser
pub const SESSION_TOKEN_LENGTH: usize = 48;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

/// Password maximum length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

// =============================================================================
// SEED DEFAULTS
// =============================================================================

/// Number of sample athletes generated for an empty database
pub const DEFAULT_SEED_ATHLETE_COUNT: usize = 120;

/// Default password of the seeded admin account
pub const DEFAULT_ADMIN_PASSWORD: &str = "adminpass";

/// Default password of the seeded read-only account
pub const DEFAULT_USER_PASSWORD: &str = "userpass";

/// Events a single sample athlete is entered in
pub const SEED_EVENTS_PER_ATHLETE: usize = 2;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const USER: &str = "user";
}

// =============================================================================
// COMPETITION CATEGORIES
// =============================================================================

/// Sex categories
pub mod sexes {
    pub const BOYS: &str = "Boys";
    pub const GIRLS: &str = "Girls";
}

/// Grade brackets
pub mod grades {
    pub const A: &str = "A";
    pub const B: &str = "B";
    pub const C: &str = "C";
}

/// Houses athletes compete for
pub mod houses {
    pub const ALL: &[&str] = &["Red", "Blue", "Green", "Yellow"];
}

/// Event and result status labels, as stored
pub mod statuses {
    pub const COMPLETED: &str = "Completed";
    pub const NOT_YET_START: &str = "Not yet start";
    pub const DISQUALIFICATION: &str = "Disqualification";
}

// =============================================================================
// RANKING
// =============================================================================

/// Name fragments (lower-case) marking an event where lower is better
pub const TIME_BASED_MARKERS: &[&str] = &["meters", "run"];

/// Results are compared at this many units per 1.0 (hundredths)
pub const RESULT_PRECISION_SCALE: f64 = 100.0;

/// Exclusive upper bound on an entered result
pub const MAX_RESULT_VALUE: f64 = 1_000_000.0;

// =============================================================================
// FLASH LEVELS
// =============================================================================

/// Flash message severities
pub mod flash_levels {
    pub const SUCCESS: &str = "success";
    pub const ERROR: &str = "error";
    pub const INFO: &str = "info";
}
