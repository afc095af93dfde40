//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod athlete_repo;
pub mod event_repo;
pub mod result_repo;
pub mod session_repo;
pub mod user_repo;

pub use athlete_repo::AthleteRepository;
pub use event_repo::EventRepository;
pub use result_repo::ResultRepository;
pub use session_repo::SessionRepository;
pub use user_repo::UserRepository;
