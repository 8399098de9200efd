//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `reelreview_core` linkage with deterministic output.
//! - When `REELREVIEW_DB_PATH` is set, open that store and list its reviews.

use reelreview_core::db::open_db;
use reelreview_core::{
    init_logging, sanitize_message, Review, ReviewService, SqliteReviewRepository, StoreConfig,
    TITLE_MAX_CHARS,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("reelreview_core ping={}", reelreview_core::ping());
    println!("reelreview_core version={}", reelreview_core::core_version());

    let config = StoreConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let Some(db_path) = config.db_path.as_ref() else {
        return ExitCode::SUCCESS;
    };

    match list_reviews(db_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_list module=cli status=error error={err}");
            eprintln!("failed to read reviews from `{}`: {err}", db_path.display());
            ExitCode::FAILURE
        }
    }
}

fn list_reviews(db_path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db(db_path)?;
    let store = ReviewService::new(SqliteReviewRepository::try_new(&conn)?);

    println!("reviews count={}", store.count()?);
    for review in store.get_all()? {
        println!("{}", review_line(&review));
    }
    Ok(())
}

fn review_line(review: &Review) -> String {
    format!(
        "id={} rating={} title={}",
        review.id,
        review.rating,
        sanitize_message(&review.title, TITLE_MAX_CHARS)
    )
}

#[cfg(test)]
mod tests {
    use super::review_line;
    use reelreview_core::{Review, ReviewId};

    #[test]
    fn review_line_keeps_multiline_title_on_one_line() {
        let review = Review {
            id: ReviewId(4),
            title: "Part one\nPart two\r".to_string(),
            text: "body".to_string(),
            rating: 3,
        };

        let line = review_line(&review);
        assert_eq!(line, "id=4 rating=3 title=Part one Part two ");
        assert_eq!(line.lines().count(), 1);
    }
}
