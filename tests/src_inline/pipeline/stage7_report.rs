use super::*;
use crate::model::modifiers::Modifiers;
use crate::pipeline::Engine;

fn neutral_angles() -> crate::model::segments::PerSegment<Option<f64>> {
    crate::model::segments::PerSegment {
        neck: Some(5.0),
        trunk: Some(3.0),
        legs: Some(170.0),
        upper_arm: Some(10.0),
        lower_arm: Some(150.0),
        wrist: Some(10.0),
    }
}

fn frames(profile: &ScoringProfile) -> Vec<FrameAssessment> {
    let engine = Engine::new(profile.clone()).unwrap();
    let calm = Modifiers::default();
    let heavy = Modifiers {
        weight_kg: 12.0,
        ..Modifiers::default()
    };
    let mut bent = neutral_angles();
    bent.trunk = Some(70.0);
    bent.legs = Some(100.0);
    let mut partial = neutral_angles();
    partial.wrist = None;

    vec![
        FrameAssessment {
            frame: 0,
            timestamp_ms: Some(0.0),
            result: engine.assess_angles(&neutral_angles(), &calm),
        },
        FrameAssessment {
            frame: 1,
            timestamp_ms: Some(33.3),
            result: engine.assess_angles(&partial, &calm),
        },
        FrameAssessment {
            frame: 2,
            timestamp_ms: None,
            result: engine.assess_angles(&bent, &heavy),
        },
    ]
}

fn input<'a>(frames: &'a [FrameAssessment], profile: &'a ScoringProfile) -> Stage7Input<'a> {
    Stage7Input {
        frames,
        profile,
        input_path: "frames.jsonl".to_string(),
        tool_name: "kira-rebaqc".to_string(),
        tool_version: "0.0.0".to_string(),
    }
}

#[test]
fn test_build_summary() {
    let profile = ScoringProfile::prototype_v1();
    let frames = frames(&profile);
    let summary = build_summary(&input(&frames, &profile));

    assert_eq!(summary.n_frames, 3);
    assert_eq!(summary.profile, "prototype_v1");
    assert_eq!(summary.final_score.max, 12);
    assert_eq!(summary.final_score.median, 3.0);
    assert_eq!(summary.final_score.p90, 12.0);

    assert_eq!(summary.risk_levels.len(), profile.risk.len());
    assert_eq!(summary.risk_levels[0].level, RiskLevel::Negligible);
    assert_eq!(summary.risk_levels[0].count, 2);
    assert_eq!(summary.dominant_level, Some(RiskLevel::Negligible));
    assert_eq!(summary.peak_level, Some(RiskLevel::VeryHigh));
    assert!((summary.high_risk_fraction - 1.0 / 3.0).abs() < 1e-6);
    assert!((summary.degraded_fraction - 1.0 / 3.0).abs() < 1e-6);

    let wrist = summary
        .segments
        .iter()
        .find(|s| s.segment == Segment::Wrist)
        .unwrap();
    assert!((wrist.defaulted_fraction - 1.0 / 3.0).abs() < 1e-6);
    assert_eq!(wrist.one_sided_fraction, 0.0);
    assert_eq!(wrist.proxy_fraction, 0.0);

    let trunk = summary
        .segments
        .iter()
        .find(|s| s.segment == Segment::Trunk)
        .unwrap();
    assert_eq!(trunk.level_median, 1.0);
    assert_eq!(trunk.level_p90, 4.0);
}

#[test]
fn test_dominant_level_tie_prefers_severe() {
    let profile = ScoringProfile::prototype_v1();
    let all = frames(&profile);
    let pair = vec![all[0].clone(), all[2].clone()];
    let summary = build_summary(&input(&pair, &profile));
    assert_eq!(summary.dominant_level, Some(RiskLevel::VeryHigh));
}

#[test]
fn test_empty_summary() {
    let profile = ScoringProfile::reba_v1();
    let summary = build_summary(&input(&[], &profile));
    assert_eq!(summary.n_frames, 0);
    assert_eq!(summary.dominant_level, None);
    assert_eq!(summary.peak_level, None);
    assert_eq!(summary.final_score.max, 0);
    assert_eq!(summary.degraded_fraction, 0.0);
}

#[test]
fn test_write_reports_frame_mode() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let profile = ScoringProfile::prototype_v1();
    let frames = frames(&profile);
    write_reports(&input(&frames, &profile), &out, ReportMode::Frame).unwrap();

    let tsv = std::fs::read_to_string(out.join("assessments.tsv")).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("frame\ttimestamp_ms\tneck_deg\tneck_level\tneck_source"));
    assert!(lines[0].ends_with("final_score\trisk_level\tdegraded"));
    let header_cols = lines[0].split('\t').count();
    for line in &lines[1..] {
        assert_eq!(line.split('\t').count(), header_cols);
    }
    assert!(lines[2].contains("defaulted"));
    assert!(lines[3].starts_with("2\t\t"));
    assert!(lines[3].ends_with("12\tvery_high\tfalse"));

    let jsonl = std::fs::read_to_string(out.join("assessments.jsonl")).unwrap();
    let first: serde_json::Value = serde_json::from_str(jsonl.lines().next().unwrap()).unwrap();
    assert_eq!(first["frame"], 0);
    assert_eq!(first["final_score"], 3);
    assert_eq!(first["risk"]["level"], "negligible");
    assert_eq!(first["segments"]["neck"]["source"], "measured");

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("summary.json")).unwrap())
            .unwrap();
    assert_eq!(summary["n_frames"], 3);
    assert_eq!(summary["dominant_level"], "negligible");
    assert_eq!(summary["tool"]["name"], "kira-rebaqc");

    let report = std::fs::read_to_string(out.join("report.txt")).unwrap();
    assert!(report.contains("1. Overall risk"));
    assert!(report.contains("Frames assessed: 3"));
}

#[test]
fn test_write_reports_summary_mode() {
    let dir = tempfile::tempdir().unwrap();
    let profile = ScoringProfile::reba_v1();
    let frames: Vec<FrameAssessment> = Vec::new();
    write_reports(&input(&frames, &profile), dir.path(), ReportMode::Summary).unwrap();

    assert!(!dir.path().join("assessments.tsv").exists());
    assert!(!dir.path().join("assessments.jsonl").exists());
    assert!(dir.path().join("summary.json").exists());
    assert!(dir.path().join("report.txt").exists());
}
