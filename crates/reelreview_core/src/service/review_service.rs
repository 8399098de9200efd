//! Review store service.
//!
//! # Responsibility
//! - Provide the get-all/get-by-id/create/update/delete entry points.
//! - Translate "absent" into `NotFound` for callers that need an error.
//!
//! # Invariants
//! - Missing ids are reported as `None`/`false`, never as errors, except
//!   through `require`.
//! - Service layer remains storage-agnostic.

use crate::model::review::{Review, ReviewId, ReviewInput, ReviewValidationError};
use crate::repo::review_repo::{RepoError, ReviewRepository};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ReviewServiceError>;

/// Boundary-facing error for review use-cases.
#[derive(Debug)]
pub enum ReviewServiceError {
    /// Requested review does not exist.
    NotFound(ReviewId),
    /// Input failed field validation.
    Validation(ReviewValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ReviewServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "review not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReviewServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ReviewServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

impl From<ReviewValidationError> for ReviewServiceError {
    fn from(value: ReviewValidationError) -> Self {
        Self::Validation(value)
    }
}

/// The review store: one instance per application, passed to callers.
pub struct ReviewService<R: ReviewRepository> {
    repo: R,
}

impl<R: ReviewRepository> ReviewService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every review.
    pub fn get_all(&self) -> ServiceResult<Vec<Review>> {
        Ok(self.repo.list_reviews()?)
    }

    /// Returns one review or `None`.
    pub fn get_by_id(&self, id: ReviewId) -> ServiceResult<Option<Review>> {
        Ok(self.repo.get_review(id)?)
    }

    /// Returns one review or `ReviewServiceError::NotFound`.
    pub fn require(&self, id: ReviewId) -> ServiceResult<Review> {
        self.repo
            .get_review(id)?
            .ok_or(ReviewServiceError::NotFound(id))
    }

    /// Persists a new review and returns the stored entity.
    pub fn create(&self, input: &ReviewInput) -> ServiceResult<Review> {
        Ok(self.repo.create_review(input)?)
    }

    /// Creates a review from loose field values.
    pub fn create_review(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
        rating: i64,
    ) -> ServiceResult<Review> {
        self.create(&ReviewInput::new(title, text, rating)?)
    }

    /// Overwrites all mutable fields. Returns `false` when the id is absent.
    pub fn update(&self, id: ReviewId, input: &ReviewInput) -> ServiceResult<bool> {
        Ok(self.repo.update_review(id, input)?)
    }

    /// Updates a review from loose field values.
    pub fn update_review(
        &self,
        id: ReviewId,
        title: impl Into<String>,
        text: impl Into<String>,
        rating: i64,
    ) -> ServiceResult<bool> {
        self.update(id, &ReviewInput::new(title, text, rating)?)
    }

    /// Deletes a review. Returns `false` when the id is absent.
    pub fn delete(&self, id: ReviewId) -> ServiceResult<bool> {
        Ok(self.repo.delete_review(id)?)
    }

    /// Returns the number of stored reviews.
    pub fn count(&self) -> ServiceResult<u64> {
        Ok(self.repo.count_reviews()?)
    }
}
