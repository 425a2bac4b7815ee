// Ranking and display-name formatting

use mealscan::labels::LabelVocabulary;
use mealscan::ranker::{display_name, rank, top_k};

#[test]
fn top_k_sorts_strictly_descending() {
    let probs = [0.1, 0.5, 0.2, 0.15, 0.05];
    let picks = top_k(&probs, 3);

    assert_eq!(picks.len(), 3);
    assert_eq!(picks[0].0, 1);
    assert_eq!(picks[1].0, 2);
    assert_eq!(picks[2].0, 3);
    assert!(picks[0].1 >= picks[1].1 && picks[1].1 >= picks[2].1);
}

#[test]
fn top_k_zero_returns_empty() {
    let probs = [0.3, 0.7];
    assert!(top_k(&probs, 0).is_empty());
}

#[test]
fn top_k_is_capped_by_distribution_length() {
    let probs = [0.2, 0.5, 0.3];
    assert_eq!(top_k(&probs, 10).len(), 3);
}

#[test]
fn top_k_breaks_ties_by_lower_index() {
    let probs = [0.2, 0.4, 0.4];
    let picks = top_k(&probs, 3);

    assert_eq!(picks[0].0, 1, "equal confidences must order by vocabulary index");
    assert_eq!(picks[1].0, 2);
    assert_eq!(picks[2].0, 0);
}

#[test]
fn display_name_formats_separators_and_caps() {
    assert_eq!(display_name("hot_pot"), "Hot Pot");
    assert_eq!(display_name("ice-cream"), "Ice Cream");
    assert_eq!(display_name("cheeseburger"), "Cheeseburger");
    assert_eq!(display_name("french_toast"), "French Toast");
}

#[test]
fn rank_builds_primary_from_top_candidate() {
    let vocab = LabelVocabulary::new(vec![
        "apple_pie".to_string(),
        "hot_dog".to_string(),
        "pizza".to_string(),
    ]);
    let probs = [0.1, 0.7, 0.2];

    let result = rank(&probs, &vocab, 3).expect("rank should succeed");

    assert_eq!(result.candidates.len(), 3);
    assert_eq!(result.primary.label, "hot_dog");
    assert_eq!(result.primary.display_name, "Hot Dog");
    assert_eq!(result.candidates[0].label, result.primary.label);
}

#[test]
fn rank_fails_without_candidates() {
    let vocab = LabelVocabulary::new(vec!["pizza".to_string()]);

    assert!(rank(&[], &vocab, 3).is_err(), "empty distribution has no primary");
    assert!(rank(&[0.5, 0.5], &vocab, 0).is_err(), "k = 0 has no primary");
}

#[test]
fn rank_uses_placeholders_past_vocabulary_end() {
    let vocab = LabelVocabulary::new(vec!["pizza".to_string()]);
    let probs = [0.1, 0.9];

    let result = rank(&probs, &vocab, 2).expect("rank should succeed");
    assert_eq!(result.primary.label, "class_1");
}
