//! Review record, identifier and validated input.
//!
//! # Responsibility
//! - Model one stored movie review (`Review`).
//! - Model the caller-supplied fields for create/update (`ReviewInput`).
//! - Parse raw form-style fields into a `ReviewInput`.
//!
//! # Invariants
//! - `title` is non-blank and at most `TITLE_MAX_CHARS` characters.
//! - `text` is non-blank.
//! - Neither `title` nor `text` contains `'\0'`.
//! - Values are stored exactly as given; validation never rewrites them.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum title length, counted in Unicode scalar values.
pub const TITLE_MAX_CHARS: usize = 60;

/// Store-assigned review identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub i64);

impl ReviewId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for ReviewId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ReviewId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Field-level validation failure for review input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewValidationError {
    EmptyTitle,
    TitleTooLong { len: usize, max: usize },
    EmptyText,
    /// SQLite `length()` stops at NUL, so stored text must not contain one.
    NulCharacter(&'static str),
    /// A required form field was not submitted.
    MissingField(&'static str),
    /// The submitted rating is not an integer.
    InvalidRating(String),
}

impl Display for ReviewValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::TitleTooLong { len, max } => {
                write!(f, "title has {len} characters; at most {max} allowed")
            }
            Self::EmptyText => write!(f, "text must not be empty"),
            Self::NulCharacter(field) => write!(f, "{field} must not contain NUL characters"),
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::InvalidRating(raw) => write!(f, "rating `{raw}` is not an integer"),
        }
    }
}

impl Error for ReviewValidationError {}

/// One stored movie review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub title: String,
    pub text: String,
    pub rating: i64,
}

impl Review {
    /// Checks the stored fields against the review invariants.
    pub fn validate(&self) -> Result<(), ReviewValidationError> {
        validate_fields(&self.title, &self.text)
    }
}

/// Caller-supplied fields for creating or overwriting a review.
///
/// Construct through [`ReviewInput::new`] or [`ReviewInput::from_form`] to
/// get validation up front; the repository validates again before writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInput {
    pub title: String,
    pub text: String,
    pub rating: i64,
}

impl ReviewInput {
    /// Builds a validated input with every field required.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        rating: i64,
    ) -> Result<Self, ReviewValidationError> {
        let input = Self {
            title: title.into(),
            text: text.into(),
            rating,
        };
        input.validate()?;
        Ok(input)
    }

    /// Builds a validated input from raw submitted form fields.
    ///
    /// # Errors
    /// - `MissingField` when any field is absent.
    /// - `InvalidRating` when `rating` does not parse as an integer.
    /// - Any `validate()` failure.
    pub fn from_form(
        title: Option<&str>,
        text: Option<&str>,
        rating: Option<&str>,
    ) -> Result<Self, ReviewValidationError> {
        let title = title.ok_or(ReviewValidationError::MissingField("title"))?;
        let text = text.ok_or(ReviewValidationError::MissingField("text"))?;
        let raw_rating = rating.ok_or(ReviewValidationError::MissingField("rating"))?;
        let rating = raw_rating
            .trim()
            .parse::<i64>()
            .map_err(|_| ReviewValidationError::InvalidRating(raw_rating.to_string()))?;
        Self::new(title, text, rating)
    }

    /// Checks the input against the review invariants.
    pub fn validate(&self) -> Result<(), ReviewValidationError> {
        validate_fields(&self.title, &self.text)
    }
}

fn validate_fields(title: &str, text: &str) -> Result<(), ReviewValidationError> {
    if title.contains('\0') {
        return Err(ReviewValidationError::NulCharacter("title"));
    }
    if text.contains('\0') {
        return Err(ReviewValidationError::NulCharacter("text"));
    }
    if title.trim().is_empty() {
        return Err(ReviewValidationError::EmptyTitle);
    }
    let len = title.chars().count();
    if len > TITLE_MAX_CHARS {
        return Err(ReviewValidationError::TitleTooLong {
            len,
            max: TITLE_MAX_CHARS,
        });
    }
    if text.trim().is_empty() {
        return Err(ReviewValidationError::EmptyText);
    }
    Ok(())
}
