//! Review domain model.
//!
//! # Responsibility
//! - Define the canonical review record and its write-side input.
//! - Own field validation shared by create, update and read-back paths.
//!
//! # Invariants
//! - Every `ReviewId` is assigned by storage and never reused.
//! - A valid review has a non-empty title of at most 60 characters and
//!   non-empty text. Rating is not range-checked.

pub mod review;
