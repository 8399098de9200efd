//! Review repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `reviews` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate input before SQL mutations.
//! - Read paths reject invalid persisted rows instead of masking them.
//! - `id` is assigned by SQLite `AUTOINCREMENT` and never reused.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::review::{Review, ReviewId, ReviewInput, ReviewValidationError};
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const REVIEW_SELECT_SQL: &str = "SELECT
    id,
    title,
    text,
    rating
FROM reviews";

const REVIEWS_TABLE: &str = "reviews";
const REVIEWS_COLUMNS: [&str; 4] = ["id", "title", "text", "rating"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for review persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ReviewValidationError),
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted review data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ReviewValidationError> for RepoError {
    fn from(value: ReviewValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for review CRUD operations.
pub trait ReviewRepository {
    /// Returns every stored review ordered by ascending id.
    fn list_reviews(&self) -> RepoResult<Vec<Review>>;
    /// Returns one review, or `None` when the id is unknown.
    fn get_review(&self, id: ReviewId) -> RepoResult<Option<Review>>;
    /// Persists a new review and returns it with its assigned id.
    fn create_review(&self, input: &ReviewInput) -> RepoResult<Review>;
    /// Overwrites title, text and rating. Returns `false` when the id is unknown.
    fn update_review(&self, id: ReviewId, input: &ReviewInput) -> RepoResult<bool>;
    /// Removes one review. Returns `false` when the id is unknown.
    fn delete_review(&self, id: ReviewId) -> RepoResult<bool>;
    /// Returns the number of stored reviews.
    fn count_reviews(&self) -> RepoResult<u64>;
}

/// SQLite-backed review repository.
pub struct SqliteReviewRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReviewRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not match what the queries expect.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ReviewRepository for SqliteReviewRepository<'_> {
    fn list_reviews(&self) -> RepoResult<Vec<Review>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REVIEW_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut reviews = Vec::new();
        while let Some(row) = rows.next()? {
            reviews.push(parse_review_row(row)?);
        }

        debug!(
            "event=review_list module=repo status=ok count={}",
            reviews.len()
        );
        Ok(reviews)
    }

    fn get_review(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REVIEW_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.get()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_review_row(row)?));
        }

        debug!("event=review_get module=repo status=noop id={id}");
        Ok(None)
    }

    fn create_review(&self, input: &ReviewInput) -> RepoResult<Review> {
        input.validate()?;

        self.conn.execute(
            "INSERT INTO reviews (title, text, rating) VALUES (?1, ?2, ?3);",
            params![input.title.as_str(), input.text.as_str(), input.rating],
        )?;
        let id = ReviewId(self.conn.last_insert_rowid());

        info!("event=review_create module=repo status=ok id={id}");
        self.get_review(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("review {id} missing right after insert"))
        })
    }

    fn update_review(&self, id: ReviewId, input: &ReviewInput) -> RepoResult<bool> {
        input.validate()?;

        let changed = self.conn.execute(
            "UPDATE reviews
             SET
                title = ?1,
                text = ?2,
                rating = ?3
             WHERE id = ?4;",
            params![
                input.title.as_str(),
                input.text.as_str(),
                input.rating,
                id.get()
            ],
        )?;

        let status = if changed == 0 { "noop" } else { "ok" };
        info!("event=review_update module=repo status={status} id={id}");
        Ok(changed > 0)
    }

    fn delete_review(&self, id: ReviewId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM reviews WHERE id = ?1;", [id.get()])?;

        let status = if changed == 0 { "noop" } else { "ok" };
        info!("event=review_delete module=repo status={status} id={id}");
        Ok(changed > 0)
    }

    fn count_reviews(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM reviews;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative review count `{count}`")))
    }
}

fn parse_review_row(row: &Row<'_>) -> RepoResult<Review> {
    let review = Review {
        id: ReviewId(row.get("id")?),
        title: row.get("title")?,
        text: row.get("text")?,
        rating: row.get("rating")?,
    };
    review
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("review {}: {err}", review.id)))?;
    Ok(review)
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_version(conn)?;
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, REVIEWS_TABLE)? {
        return Err(RepoError::MissingRequiredTable(REVIEWS_TABLE));
    }

    for column in REVIEWS_COLUMNS {
        if !table_has_column(conn, REVIEWS_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: REVIEWS_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [table],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
