use super::*;
use crate::model::profile::ScoringProfile;

#[test]
fn test_prototype_bands() {
    let bands = ScoringProfile::prototype_v1().risk;
    let level = |score| classify_risk(score, &bands).level;
    assert_eq!(level(1), RiskLevel::Negligible);
    assert_eq!(level(3), RiskLevel::Negligible);
    assert_eq!(level(4), RiskLevel::Medium);
    assert_eq!(level(7), RiskLevel::Medium);
    assert_eq!(level(8), RiskLevel::High);
    assert_eq!(level(10), RiskLevel::High);
    assert_eq!(level(11), RiskLevel::VeryHigh);
    assert_eq!(level(15), RiskLevel::VeryHigh);
}

#[test]
fn test_carries_label_and_color() {
    let bands = ScoringProfile::prototype_v1().risk;
    let r = classify_risk(9, &bands);
    assert_eq!(r.label, "High (act soon)");
    assert_eq!(r.color, "#f57c00");
}

#[test]
fn test_out_of_range_takes_end_band() {
    let bands = ScoringProfile::reba_v1().risk;
    assert_eq!(classify_risk(0, &bands).level, RiskLevel::Negligible);
    assert_eq!(classify_risk(40, &bands).level, RiskLevel::VeryHigh);
}

#[test]
fn test_no_bands() {
    let r = classify_risk(5, &[]);
    assert_eq!(r.level, RiskLevel::Negligible);
    assert!(r.label.is_empty());
}

#[test]
fn test_every_score_hits_one_band() {
    for profile in [ScoringProfile::prototype_v1(), ScoringProfile::reba_v1()] {
        let range = profile.score_range;
        for score in range.min..=range.max {
            let hits = profile.risk.iter().filter(|b| b.contains(score)).count();
            assert_eq!(hits, 1, "{} score {}", profile.name, score);
        }
    }
}

#[test]
fn test_levels_non_decreasing_in_score() {
    let bands = ScoringProfile::reba_v1().risk;
    let mut prev = RiskLevel::Negligible;
    for score in 1..=15 {
        let level = classify_risk(score, &bands).level;
        assert!(level >= prev);
        prev = level;
    }
}
