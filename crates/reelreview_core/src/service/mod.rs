//! Core use-case services.
//!
//! # Responsibility
//! - Expose the review store API to boundary callers.
//! - Keep callers decoupled from storage details.

pub mod review_service;
