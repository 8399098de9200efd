//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the review data access contract.
//! - Isolate SQLite query details from the service layer.
//!
//! # Invariants
//! - Writes enforce `ReviewInput::validate()` before any SQL runs.
//! - Operations on a missing id are no-ops reported through the return
//!   value, never through `RepoError`.

pub mod review_repo;
