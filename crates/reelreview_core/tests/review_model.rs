use reelreview_core::{Review, ReviewId, ReviewInput, ReviewValidationError, TITLE_MAX_CHARS};

#[test]
fn new_accepts_title_at_limit_and_rejects_one_past_it() {
    let at_limit = "t".repeat(TITLE_MAX_CHARS);
    assert!(ReviewInput::new(at_limit, "body", 5).is_ok());

    let err = ReviewInput::new("t".repeat(TITLE_MAX_CHARS + 1), "body", 5).unwrap_err();
    assert_eq!(
        err,
        ReviewValidationError::TitleTooLong {
            len: TITLE_MAX_CHARS + 1,
            max: TITLE_MAX_CHARS,
        }
    );
}

#[test]
fn new_rejects_blank_title_and_text() {
    assert_eq!(
        ReviewInput::new("", "body", 1).unwrap_err(),
        ReviewValidationError::EmptyTitle
    );
    assert_eq!(
        ReviewInput::new("Title", " \n\t", 1).unwrap_err(),
        ReviewValidationError::EmptyText
    );
}

#[test]
fn new_keeps_values_untrimmed() {
    let input = ReviewInput::new("  Padded  ", " body ", 3).unwrap();
    assert_eq!(input.title, "  Padded  ");
    assert_eq!(input.text, " body ");
}

#[test]
fn from_form_reports_missing_fields_in_order() {
    assert_eq!(
        ReviewInput::from_form(None, None, None).unwrap_err(),
        ReviewValidationError::MissingField("title")
    );
    assert_eq!(
        ReviewInput::from_form(Some("Title"), None, Some("3")).unwrap_err(),
        ReviewValidationError::MissingField("text")
    );
    assert_eq!(
        ReviewInput::from_form(Some("Title"), Some("Body"), None).unwrap_err(),
        ReviewValidationError::MissingField("rating")
    );
}

#[test]
fn from_form_rejects_non_integer_rating() {
    for raw in ["", "4.5", "five"] {
        let err = ReviewInput::from_form(Some("Title"), Some("Body"), Some(raw)).unwrap_err();
        assert_eq!(err, ReviewValidationError::InvalidRating(raw.to_string()));
    }
}

#[test]
fn from_form_builds_valid_input() {
    let input = ReviewInput::from_form(Some("Alien"), Some("in space"), Some("-2")).unwrap();
    assert_eq!(input, ReviewInput::new("Alien", "in space", -2).unwrap());
}

#[test]
fn new_rejects_nul_in_title_or_text() {
    assert_eq!(
        ReviewInput::new("\0Title", "body", 1).unwrap_err(),
        ReviewValidationError::NulCharacter("title")
    );
    assert_eq!(
        ReviewInput::new("Title", "\0 hidden review body", 1).unwrap_err(),
        ReviewValidationError::NulCharacter("text")
    );
}

#[test]
fn stored_review_validate_uses_same_rules() {
    let review = Review {
        id: ReviewId(9),
        title: "Alien".to_string(),
        text: "in\0space".to_string(),
        rating: 5,
    };
    assert_eq!(
        review.validate().unwrap_err(),
        ReviewValidationError::NulCharacter("text")
    );
}

#[test]
fn review_serialization_uses_plain_fields() {
    let review = Review {
        id: ReviewId(3),
        title: "Heat".to_string(),
        text: "tense".to_string(),
        rating: 5,
    };

    let json = serde_json::to_value(&review).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": 3, "title": "Heat", "text": "tense", "rating": 5})
    );

    let decoded: Review = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, review);
}

#[test]
fn validation_errors_have_readable_messages() {
    assert_eq!(
        ReviewValidationError::TitleTooLong { len: 61, max: 60 }.to_string(),
        "title has 61 characters; at most 60 allowed"
    );
    assert_eq!(
        ReviewValidationError::InvalidRating("x".to_string()).to_string(),
        "rating `x` is not an integer"
    );
}
