// Gatekeeper strategies and keyword precedence

use mealscan::gatekeeper::{ForcedAcceptGate, Gate, KeywordGate};
use mealscan::ranker::display_name;
use mealscan::types::{Candidate, GateReason};
use ndarray::Array4;

fn candidate(label: &str) -> Candidate {
    Candidate {
        display_name: display_name(label),
        label: label.to_string(),
        confidence: 0.9,
    }
}

fn tensor() -> Array4<f32> {
    Array4::zeros((1, 3, 224, 224))
}

#[test]
fn pizza_is_food() {
    let verdict = KeywordGate
        .decide(&tensor(), &[candidate("pizza")])
        .expect("verdict");

    assert!(verdict.is_food);
    assert_eq!(verdict.reason, GateReason::KeywordMatch);
}

#[test]
fn sports_car_is_not_food() {
    let verdict = KeywordGate
        .decide(&tensor(), &[candidate("sports_car")])
        .expect("verdict");

    assert!(!verdict.is_food);
}

#[test]
fn hot_dog_survives_the_deny_list() {
    let verdict = KeywordGate
        .decide(&tensor(), &[candidate("hot_dog")])
        .expect("verdict");

    assert!(verdict.is_food, "compound food terms take precedence over the deny list");
}

#[test]
fn plain_dog_is_denied() {
    let verdict = KeywordGate
        .decide(&tensor(), &[candidate("dog")])
        .expect("verdict");

    assert!(!verdict.is_food);
}

#[test]
fn carbonara_survives_the_car_deny_term() {
    let verdict = KeywordGate
        .decide(&tensor(), &[candidate("carbonara")])
        .expect("verdict");

    assert!(verdict.is_food);
}

#[test]
fn unknown_label_defaults_to_non_food() {
    let verdict = KeywordGate
        .decide(&tensor(), &[candidate("obelisk")])
        .expect("verdict");

    assert!(!verdict.is_food, "the keyword gate is deliberately conservative");
}

#[test]
fn only_the_top_candidate_is_consulted() {
    let candidates = [candidate("sports_car"), candidate("pizza")];
    let verdict = KeywordGate.decide(&tensor(), &candidates).expect("verdict");

    assert!(!verdict.is_food);
}

#[test]
fn empty_candidate_list_is_an_error() {
    assert!(KeywordGate.decide(&tensor(), &[]).is_err());
}

#[test]
fn forced_accept_says_food_with_explicit_reason() {
    let verdict = ForcedAcceptGate
        .decide(&tensor(), &[candidate("dog")])
        .expect("verdict");

    assert!(verdict.is_food);
    assert_eq!(
        verdict.reason,
        GateReason::ForcedAccept,
        "forced accept must never look like a model-backed acceptance"
    );
}
