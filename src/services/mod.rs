//! Business logic services

pub mod auth_service;
pub mod result_service;
pub mod roster_service;
pub mod seed_service;

pub use auth_service::AuthService;
pub use result_service::{ResultFilters, ResultService, ResultSubmission};
pub use roster_service::{RosterService, RosterTotals};
pub use seed_service::{SeedService, SeedSummary};
