use super::*;

#[test]
fn empty_input_is_the_lowest_category() {
    let report = estimate_strength("");

    assert_eq!(report.category, Strength::Weak);
    assert_eq!(report.score, 0);
    assert!(report.criteria.is_empty());
}

#[test]
fn four_classes_and_sixteen_chars_is_the_highest_category() {
    let report = estimate_strength("Abc123!?Abc123!?");

    assert_eq!(report.category, Strength::VeryStrong);
    assert_eq!(report.score, MAX_SCORE);
}

#[test]
fn identical_input_yields_identical_reports() {
    let candidate = "Tr0ub4dor&3";

    assert_eq!(estimate_strength(candidate), estimate_strength(candidate));
}

#[test]
fn single_class_stays_weak_or_medium_regardless_of_length() {
    assert_eq!(estimate_strength("abcdefgh").category, Strength::Weak);
    assert_eq!(estimate_strength("abcdefghijkl").category, Strength::Medium);
    assert_eq!(
        estimate_strength("abcdefghijklmnop").category,
        Strength::Medium
    );
}

#[test]
fn three_classes_and_sixteen_chars_is_strong() {
    let report = estimate_strength("Abcdefgh12345678");

    assert_eq!(report.category, Strength::Strong);
    assert_eq!(report.score, 6);
}

#[test]
fn two_classes_and_twelve_chars_is_medium() {
    assert_eq!(estimate_strength("abcdefgh1234").category, Strength::Medium);
}

#[test]
fn short_but_diverse_input_is_medium() {
    let report = estimate_strength("aB3!");

    assert_eq!(report.category, Strength::Medium);
    assert_eq!(report.score, 4);
}

#[test]
fn criteria_list_names_what_fired() {
    let report = estimate_strength("Abc123!?Abc123!?");

    for label in [
        "length of 8 or more",
        "length of 12 or more",
        "length of 16 or more",
        "contains lowercase",
        "contains uppercase",
        "contains digits",
        "contains symbols",
    ] {
        assert!(report.criteria.contains(&label), "missing {label}");
    }
}

#[test]
fn accented_letters_do_not_count_as_symbols() {
    let report = estimate_strength("päss");

    assert!(!report.criteria.contains(&"contains symbols"));
}

#[test]
fn categories_order_weakest_first() {
    assert!(Strength::Weak < Strength::Medium);
    assert!(Strength::Medium < Strength::Strong);
    assert!(Strength::Strong < Strength::VeryStrong);
}
