//! Tests for review generation.

use rstest::rstest;

use super::*;
use crate::review::test_support::{
    SegmentSpec, empty_segments_session, rated_segment_session, session_from_specs,
};

#[test]
fn single_rated_segment_renders_full_review() {
    let session = rated_segment_session("Food", "Appetizer", &["Flavorful"], 5)
        .expect("fixture values are valid");

    let review = generate(&session).expect("a rating is present");

    assert_eq!(
        review.text(),
        "The appetizer (food) was flavorful and deserves 5 stars. \
         Overall, it was an excellent experience!"
    );
    assert_eq!(review.sentiment(), Sentiment::Excellent);
    assert_eq!(review.sentence_count(), 1);
}

#[test]
fn two_characteristics_join_with_and() {
    let session = rated_segment_session("Service", "Waiter", &["Attentive", "Friendly"], 2)
        .expect("fixture values are valid");

    let review = generate(&session).expect("a rating is present");

    assert_eq!(
        review.text(),
        "The waiter (service) was attentive and friendly and deserves 2 stars. \
         Overall, it was an average experience!"
    );
    assert_eq!(review.sentiment(), Sentiment::Average);
}

#[test]
fn undescribed_segment_contributes_no_sentence_but_counts_toward_the_mean() {
    let session = session_from_specs(&[
        SegmentSpec {
            category: Some("Food"),
            item: Some("Appetizer"),
            characteristics: &["Flavorful"],
            rating: Some(5),
        },
        SegmentSpec::default(),
    ])
    .expect("fixture values are valid");

    let review = generate(&session).expect("a rating is present");

    // Mean over both segments is 2.5, so the rated sentence stands
    // alone with an average close.
    assert_eq!(
        review.text(),
        "The appetizer (food) was flavorful and deserves 5 stars. \
         Overall, it was an average experience!"
    );
    assert_eq!(review.sentiment(), Sentiment::Average);
    assert_eq!(review.sentence_count(), 1);
}

#[test]
fn empty_session_is_rejected() {
    let session = ReviewSession::new();

    assert_eq!(generate(&session), Err(ReviewError::NoRatingProvided));
}

#[test]
fn unrated_segments_are_rejected() {
    let session = session_from_specs(&[SegmentSpec {
        category: Some("Food"),
        item: Some("Dessert"),
        characteristics: &["Sweet"],
        rating: None,
    }])
    .expect("fixture values are valid");

    assert_eq!(generate(&session), Err(ReviewError::NoRatingProvided));
}

#[test]
fn all_empty_segments_are_rejected() {
    let session = empty_segments_session(3);

    assert_eq!(generate(&session), Err(ReviewError::NoRatingProvided));
}

#[test]
fn unrated_segment_sentence_has_no_star_clause() {
    let session = session_from_specs(&[
        SegmentSpec {
            category: Some("Service"),
            item: Some("Waiter"),
            characteristics: &["Attentive"],
            rating: None,
        },
        SegmentSpec {
            rating: Some(5),
            ..SegmentSpec::default()
        },
    ])
    .expect("fixture values are valid");

    let review = generate(&session).expect("a rating is present");

    assert_eq!(
        review.text(),
        "The waiter (service) was attentive. Overall, it was an average experience!"
    );
}

#[test]
fn review_without_sentences_keeps_the_leading_space() {
    let session = session_from_specs(&[SegmentSpec {
        rating: Some(3),
        ..SegmentSpec::default()
    }])
    .expect("fixture values are valid");

    let review = generate(&session).expect("a rating is present");

    assert_eq!(review.text(), " Overall, it was an average experience!");
    assert_eq!(review.sentence_count(), 0);
}

#[test]
fn sentences_from_multiple_segments_join_with_a_single_space() {
    let session = session_from_specs(&[
        SegmentSpec {
            category: Some("Food"),
            item: Some("Appetizer"),
            characteristics: &["Flavorful"],
            rating: Some(5),
        },
        SegmentSpec {
            category: Some("Service"),
            item: Some("Waiter"),
            characteristics: &["Attentive", "Friendly"],
            rating: Some(2),
        },
    ])
    .expect("fixture values are valid");

    let review = generate(&session).expect("a rating is present");

    assert_eq!(
        review.text(),
        "The appetizer (food) was flavorful and deserves 5 stars. \
         The waiter (service) was attentive and friendly and deserves 2 stars. \
         Overall, it was an excellent experience!"
    );
    assert_eq!(review.sentiment(), Sentiment::Excellent);
    assert_eq!(review.sentence_count(), 2);
}

#[rstest]
#[case(3, Sentiment::Average)]
#[case(4, Sentiment::Excellent)]
fn sentiment_threshold_is_strictly_above_three(
    #[case] rating: u8,
    #[case] expected: Sentiment,
) {
    let session = rated_segment_session("Ambience", "Music", &["Fitting genre"], rating)
        .expect("fixture values are valid");

    let review = generate(&session).expect("a rating is present");

    assert_eq!(review.sentiment(), expected);
}

#[test]
fn multi_word_names_are_lowercased() {
    let session = rated_segment_session(
        "Food",
        "Main Course",
        &["Well-cooked", "Balanced flavors", "Fresh ingredients"],
        4,
    )
    .expect("fixture values are valid");

    let review = generate(&session).expect("a rating is present");

    assert_eq!(
        review.text(),
        "The main course (food) was well-cooked, balanced flavors and fresh ingredients \
         and deserves 4 stars. Overall, it was an excellent experience!"
    );
}

#[test]
fn generation_is_deterministic() {
    let session = session_from_specs(&[
        SegmentSpec {
            category: Some("Location"),
            item: Some("Parking"),
            characteristics: &["Ample spaces", "Well-lit"],
            rating: Some(4),
        },
        SegmentSpec {
            category: Some("Ambience"),
            item: Some("Decor"),
            characteristics: &["Clean"],
            rating: None,
        },
    ])
    .expect("fixture values are valid");

    let first = generate(&session).expect("a rating is present");
    let second = generate(&session).expect("a rating is present");

    assert_eq!(first, second);
}

#[rstest]
#[case(&[], "")]
#[case(&["Flavorful".to_owned()], "flavorful")]
#[case(&["Attentive".to_owned(), "Friendly".to_owned()], "attentive and friendly")]
#[case(
    &["Sweet".to_owned(), "Beautifully plated".to_owned(), "Indulgent".to_owned()],
    "sweet, beautifully plated and indulgent"
)]
fn join_characteristics_formats_for_prose(#[case] labels: &[String], #[case] expected: &str) {
    assert_eq!(join_characteristics(labels), expected);
}

#[rstest]
#[case(&["Attentive".to_owned(), "Friendly".to_owned()])]
#[case(&["Well-cooked".to_owned(), "Balanced flavors".to_owned(), "Fresh ingredients".to_owned()])]
#[case(
    &[
        "Wheelchair friendly".to_owned(),
        "Clear signage".to_owned(),
        "Easy navigation".to_owned(),
        "Accommodating facilities".to_owned(),
    ]
)]
fn joined_sets_have_exactly_one_and_before_the_final_label(#[case] labels: &[String]) {
    let joined = join_characteristics(labels);
    let last = labels.last().expect("cases have at least two labels");

    assert_eq!(joined.matches(" and ").count(), 1);
    assert!(joined.ends_with(&format!(" and {}", last.to_lowercase())));
}
