use super::*;

fn range() -> ScoreRange {
    ScoreRange { min: 1, max: 15 }
}

fn band(level: RiskLevel, min: u8, max: u8) -> RiskBand {
    RiskBand::new(level, min, max, "", "")
}

#[test]
fn test_presets_validate() {
    assert!(ScoringProfile::prototype_v1().validate().is_ok());
    assert!(ScoringProfile::reba_v1().validate().is_ok());
    assert_eq!(Preset::Prototype.profile().name, "prototype_v1");
    assert_eq!(Preset::Reba.profile().name, "reba_v1");
}

#[test]
fn test_profile_json_round_trip() {
    for profile in [ScoringProfile::prototype_v1(), ScoringProfile::reba_v1()] {
        let json = serde_json::to_string(&profile).unwrap();
        let back: ScoringProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}

#[test]
fn test_policy_tags() {
    let value = serde_json::to_value(ScoringProfile::reba_v1()).unwrap();
    assert_eq!(value["combiner"]["kind"], "reba_tables");
    assert_eq!(value["final_policy"]["kind"], "reba_table_c");
    assert_eq!(value["modifiers"]["activity"]["rapid_change"], 1);
}

#[test]
fn test_score_range_clamp() {
    assert_eq!(range().clamp(-4), 1);
    assert_eq!(range().clamp(0), 1);
    assert_eq!(range().clamp(9), 9);
    assert_eq!(range().clamp(40), 15);
}

#[test]
fn test_validate_names_offending_segment() {
    let mut profile = ScoringProfile::prototype_v1();
    profile.segments.trunk = ThresholdTable::rising(&[(20.0, 1), (5.0, 2)], 3);
    match profile.validate() {
        Err(ConfigError::NonMonotonicBounds { table, index, .. }) => {
            assert_eq!(table, "segment.trunk");
            assert_eq!(index, 1);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_validate_rejects_bad_parameters() {
    let mut profile = ScoringProfile::prototype_v1();
    profile.min_visibility = 1.5;
    assert!(matches!(
        profile.validate(),
        Err(ConfigError::InvalidParameter { .. })
    ));

    let mut profile = ScoringProfile::prototype_v1();
    profile.final_policy = FinalPolicy::Linear {
        posture_scale: f64::NAN,
        modifier_scale: 1.0,
    };
    assert!(matches!(
        profile.validate(),
        Err(ConfigError::InvalidParameter { .. })
    ));

    let mut profile = ScoringProfile::prototype_v1();
    profile.score_range = ScoreRange { min: 0, max: 15 };
    assert_eq!(
        profile.validate(),
        Err(ConfigError::InvalidScoreRange { min: 0, max: 15 })
    );
}

#[test]
fn test_validate_checks_sum_bucket_tables() {
    let mut profile = ScoringProfile::prototype_v1();
    profile.combiner = CombinerPolicy::SumBucket {
        group_a: BucketTable::new(&[], 3),
        group_b: BucketTable::new(&[(3, 1)], 2),
    };
    assert_eq!(
        profile.validate(),
        Err(ConfigError::EmptyTable {
            table: "combiner.group_a".to_string()
        })
    );
}

#[test]
fn test_risk_bands_gap() {
    let bands = vec![
        band(RiskLevel::Negligible, 1, 3),
        band(RiskLevel::Medium, 5, 15),
    ];
    assert_eq!(
        validate_risk_bands(&bands, range()),
        Err(ConfigError::RiskDiscontinuity {
            index: 1,
            expected: 4,
            found: 5
        })
    );
}

#[test]
fn test_risk_bands_overlap() {
    let bands = vec![
        band(RiskLevel::Negligible, 1, 4),
        band(RiskLevel::Medium, 4, 15),
    ];
    assert!(matches!(
        validate_risk_bands(&bands, range()),
        Err(ConfigError::RiskDiscontinuity { index: 1, .. })
    ));
}

#[test]
fn test_risk_bands_coverage() {
    let short = vec![
        band(RiskLevel::Negligible, 1, 3),
        band(RiskLevel::Medium, 4, 10),
    ];
    assert_eq!(
        validate_risk_bands(&short, range()),
        Err(ConfigError::RiskCoverage {
            covered: 10,
            max: 15
        })
    );

    let long = vec![band(RiskLevel::Negligible, 1, 20)];
    assert!(matches!(
        validate_risk_bands(&long, range()),
        Err(ConfigError::RiskCoverage { covered: 20, .. })
    ));

    let trailing = vec![
        band(RiskLevel::Negligible, 1, 15),
        band(RiskLevel::High, 16, 20),
    ];
    assert!(matches!(
        validate_risk_bands(&trailing, range()),
        Err(ConfigError::RiskCoverage { .. })
    ));
}

#[test]
fn test_risk_bands_order_and_shape() {
    let unordered = vec![
        band(RiskLevel::Medium, 1, 3),
        band(RiskLevel::Low, 4, 15),
    ];
    assert_eq!(
        validate_risk_bands(&unordered, range()),
        Err(ConfigError::RiskLevelOrder {
            index: 1,
            level: "low"
        })
    );

    let reversed = vec![band(RiskLevel::Negligible, 3, 1)];
    assert!(matches!(
        validate_risk_bands(&reversed, range()),
        Err(ConfigError::ReversedRiskBand { index: 0, .. })
    ));

    assert!(matches!(
        validate_risk_bands(&[], range()),
        Err(ConfigError::EmptyTable { .. })
    ));
}
