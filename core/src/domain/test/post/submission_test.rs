use crate::domain::{
    common::CoreError,
    post::entities::{PostType, Submission},
};

// == Submission Validator Tests ==

#[test]
fn test_validate_text_submission() {
    let submission = Submission::validate("Text", Some("hello"), None, None)
        .expect("validate returned an error");

    assert_eq!(submission, Submission::Text("hello".to_string()));
    assert_eq!(submission.post_type(), PostType::Text);
}

#[test]
fn test_validate_discards_non_matching_fields() {
    // The declared type wins; stray fields for the other types are dropped
    let submission = Submission::validate(
        "Link",
        Some("ignored text"),
        Some("https://example.com"),
        Some("ignored image"),
    )
    .expect("validate returned an error");

    assert_eq!(submission, Submission::Link("https://example.com".to_string()));

    let (text, link, image) = submission.into_fields();
    assert!(text.is_none(), "Text field must be normalized away");
    assert_eq!(link.as_deref(), Some("https://example.com"));
    assert!(image.is_none(), "Image field must be normalized away");
}

#[test]
fn test_validate_blank_submission_rejected() {
    let error = Submission::validate("Link", None, Some(""), None)
        .expect_err("validate should have returned an error");

    assert!(
        matches!(
            error,
            CoreError::EmptySubmission {
                post_type: PostType::Link
            }
        ),
        "Expected EmptySubmission for a blank link, got {error:?}"
    );

    let error = Submission::validate("Text", Some("   "), None, None)
        .expect_err("validate should have returned an error");
    assert!(matches!(error, CoreError::EmptySubmission { .. }));
}

#[test]
fn test_validate_missing_submission_rejected() {
    let error = Submission::validate("Image", Some("text instead"), None, None)
        .expect_err("validate should have returned an error");

    assert!(
        matches!(
            error,
            CoreError::EmptySubmission {
                post_type: PostType::Image
            }
        ),
        "A field of the wrong type must not satisfy the declared type"
    );
}

#[test]
fn test_validate_unknown_post_type_rejected() {
    let error = Submission::validate("Video", Some("hello"), None, None)
        .expect_err("validate should have returned an error");

    match error {
        CoreError::InvalidPostType { given } => assert_eq!(given, "Video"),
        other => panic!("Expected InvalidPostType, got {other:?}"),
    }

    // Type names are matched exactly
    let error = Submission::validate("text", Some("hello"), None, None)
        .expect_err("validate should have returned an error");
    assert!(matches!(error, CoreError::InvalidPostType { .. }));
}

#[test]
fn test_exactly_one_field_populated() {
    let cases = [
        Submission::Text("a".into()),
        Submission::Link("b".into()),
        Submission::Image("c".into()),
    ];

    for submission in cases {
        let (text, link, image) = submission.into_fields();
        let populated = [&text, &link, &image].iter().filter(|f| f.is_some()).count();
        assert_eq!(populated, 1, "Exactly one storage field must be populated");
    }
}
