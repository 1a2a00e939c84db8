use atelier_rubric::{band_for, Category, ScoreBand, SCORE_RANGE};

#[test]
fn all_ten_categories_present_in_order() {
    assert_eq!(Category::ALL.len(), 10);
    assert_eq!(Category::ALL[0].name(), "Composition and Design");
    assert_eq!(Category::ALL[9].name(), "Overall Impact");
}

#[test]
fn name_lookup_round_trips() {
    for category in Category::ALL {
        assert_eq!(Category::from_name(category.name()), Some(category));
    }
    assert_eq!(Category::from_name("Vibes"), None);
}

#[test]
fn serde_name_matches_display_name() {
    for category in Category::ALL {
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{}\"", category.name()));
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, category);
    }
}

#[test]
fn score_range_is_one_to_ten_inclusive() {
    assert!(SCORE_RANGE.contains(1.0));
    assert!(SCORE_RANGE.contains(10.0));
    assert!(!SCORE_RANGE.contains(0.0));
    assert!(!SCORE_RANGE.contains(11.0));
}

#[test]
fn band_thresholds() {
    assert_eq!(band_for(7.0), ScoreBand::High);
    assert_eq!(band_for(6.999), ScoreBand::Mid);
    assert_eq!(band_for(5.0), ScoreBand::Mid);
    assert_eq!(band_for(4.999), ScoreBand::Low);
    assert_eq!(band_for(10.0), ScoreBand::High);
    assert_eq!(band_for(1.0), ScoreBand::Low);
}
