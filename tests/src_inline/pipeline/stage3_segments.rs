use super::*;
use crate::model::profile::ScoringProfile;
use crate::model::segments::SegmentSource;

#[test]
fn test_classify_uses_whole_degrees() {
    let neck = &ScoringProfile::prototype_v1().segments.neck;
    assert_eq!(classify_angle(Angle::from_degrees(9.4), neck), 1);
    assert_eq!(classify_angle(Angle::from_degrees(9.6), neck), 2);
}

#[test]
fn test_measured_segment() {
    let trunk = &ScoringProfile::prototype_v1().segments.trunk;
    let s = score_segment(Measurement::measured(Angle::from_degrees(70.2)), trunk);
    assert_eq!(s.degrees, Some(70));
    assert_eq!(s.precise_degrees, Some(70.2));
    assert_eq!(s.level, 4);
    assert_eq!(s.source, SegmentSource::Measured);
}

#[test]
fn test_defaulted_segment_is_neutral() {
    let profile = ScoringProfile::prototype_v1();
    for (_, table) in profile.segments.iter() {
        let s = score_segment(Measurement::defaulted(), table);
        assert_eq!(s.level, table.neutral_level());
        assert_eq!(s.degrees, None);
        assert_eq!(s.source, SegmentSource::Defaulted);
    }
}

#[test]
fn test_one_sided_keeps_source() {
    let wrist = &ScoringProfile::prototype_v1().segments.wrist;
    let s = score_segment(Measurement::one_sided(Angle::from_degrees(20.0)), wrist);
    assert_eq!(s.level, 2);
    assert_eq!(s.source, SegmentSource::OneSided);
}

#[test]
fn test_score_segments_per_table() {
    let profile = ScoringProfile::prototype_v1();
    let measurements = PerSegment::from_fn(|_| Measurement::measured(Angle::from_degrees(50.0)));
    let scored = score_segments(&measurements, &profile.segments);
    assert_eq!(scored.neck.level, 6);
    assert_eq!(scored.trunk.level, 3);
    assert_eq!(scored.legs.level, 3);
    assert_eq!(scored.upper_arm.level, 3);
    assert_eq!(scored.lower_arm.level, 3);
    assert_eq!(scored.wrist.level, 3);
}

#[test]
fn test_levels_within_table_bounds() {
    let profile = ScoringProfile::prototype_v1();
    for (_, table) in profile.segments.iter() {
        for deg in 0..=180 {
            let level = classify_angle(Angle::from_degrees(f64::from(deg)), table);
            assert!(level >= table.neutral_level());
            assert!(level <= table.max_level());
        }
    }
}
