use super::*;
use crate::model::segments::Segment;
use crate::report::{ScoreStats, ToolMeta};

fn segment(segment: Segment, median: f32, defaulted: f32) -> SegmentStat {
    SegmentStat {
        segment,
        level_median: median,
        level_p90: median,
        defaulted_fraction: defaulted,
        one_sided_fraction: 0.0,
        proxy_fraction: 0.0,
    }
}

fn summary() -> SummaryData {
    SummaryData {
        tool: ToolMeta {
            name: "kira-rebaqc".to_string(),
            version: "0.1.0".to_string(),
        },
        input: "frames.json".to_string(),
        profile: "reba_v1".to_string(),
        n_frames: 4,
        final_score: ScoreStats {
            median: 5.0,
            p90: 9.0,
            max: 9,
        },
        risk_levels: vec![
            RiskStat {
                level: RiskLevel::Medium,
                label: "Medium risk".to_string(),
                count: 3,
                fraction: 0.75,
            },
            RiskStat {
                level: RiskLevel::High,
                label: "High risk".to_string(),
                count: 1,
                fraction: 0.25,
            },
        ],
        dominant_level: Some(RiskLevel::Medium),
        peak_level: Some(RiskLevel::High),
        high_risk_fraction: 0.25,
        degraded_fraction: 0.75,
        segments: vec![
            segment(Segment::Neck, 1.0, 0.0),
            segment(Segment::Trunk, 3.0, 0.0),
            segment(Segment::Legs, 2.0, 0.0),
            segment(Segment::Wrist, 2.0, 0.75),
        ],
    }
}

#[test]
fn test_report_sections() {
    let text = render_report_text(&summary());
    assert!(text.contains("1. Overall risk"));
    assert!(text.contains("2. Risk level distribution"));
    assert!(text.contains("3. Body segments"));
    assert!(text.contains("4. Quality and caveats"));
    assert!(text.contains("Dominant risk level: medium (Medium risk)"));
    assert!(text.contains("Peak risk level: high (High risk)"));
    assert!(text.contains("A notable share of the recording reaches high risk."));
}

#[test]
fn test_main_contributors_highest_first() {
    let text = render_report_text(&summary());
    assert!(text.contains("Main contributors: trunk, legs\n"));
}

#[test]
fn test_quality_notes() {
    let text = render_report_text(&summary());
    assert!(text.contains("wrist: defaulted=0.750000, one_sided=0.000000"));
    assert!(!text.contains("neck: defaulted"));
    assert!(text.contains("Note: most frames lacked landmarks"));
}

#[test]
fn test_empty_levels() {
    let mut data = summary();
    data.dominant_level = None;
    data.peak_level = None;
    data.high_risk_fraction = 0.0;
    let text = render_report_text(&data);
    assert!(text.contains("Dominant risk level: n/a"));
    assert!(text.contains("No frame reached high risk."));
}
