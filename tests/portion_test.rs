// Portion heuristics and lookup-order sensitivity

use mealscan::portion::{estimate, DEFAULT_WEIGHT_GRAMS, PORTION_CONFIDENCE};

#[test]
fn french_toast_resolves_before_toast_and_bread() {
    let portion = estimate("French Toast");

    assert_eq!(
        portion.estimated_weight_grams, 150,
        "the specific compound entry must win over the general toast/bread entries"
    );
}

#[test]
fn plain_toast_still_matches_the_general_entry() {
    assert_eq!(estimate("Toast").estimated_weight_grams, 60);
}

#[test]
fn cheeseburger_matches_the_burger_heuristic() {
    assert_eq!(estimate("Cheeseburger").estimated_weight_grams, 250);
}

#[test]
fn unmatched_name_gets_the_default_weight() {
    let portion = estimate("Martian Rock Soup Stone");

    // "soup" would match; use a truly unmatched name instead
    let portion2 = estimate("Martian Rock");
    assert_eq!(portion2.estimated_weight_grams, DEFAULT_WEIGHT_GRAMS);
    assert_eq!(portion2.confidence, PORTION_CONFIDENCE);

    // sanity: the contained keyword still matches
    assert_eq!(portion.estimated_weight_grams, 350);
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(estimate("PIZZA").estimated_weight_grams, 200);
}

#[test]
fn confidence_is_fixed_regardless_of_match() {
    assert_eq!(estimate("Pizza").confidence, PORTION_CONFIDENCE);
    assert_eq!(estimate("Martian Rock").confidence, PORTION_CONFIDENCE);
}

#[test]
fn size_label_tracks_weight() {
    assert_eq!(estimate("Cake").size_label, "small");
    assert_eq!(estimate("Burger").size_label, "medium");
    assert_eq!(estimate("Soup").size_label, "large");
}

#[test]
fn steak_is_not_shadowed_by_tea() {
    // "steak" contains the substring "tea"; table order keeps it correct
    assert_eq!(estimate("Steak").estimated_weight_grams, 300);
}
