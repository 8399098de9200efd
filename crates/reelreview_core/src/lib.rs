//! Core store for movie reviews.
//! This crate owns the review schema, its invariants and every read/write path.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, sanitize_message};
pub use model::review::{Review, ReviewId, ReviewInput, ReviewValidationError, TITLE_MAX_CHARS};
pub use repo::review_repo::{RepoError, RepoResult, ReviewRepository, SqliteReviewRepository};
pub use service::review_service::{ReviewService, ReviewServiceError, ServiceResult};

/// Minimal health-check API for integration smoke tests.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
