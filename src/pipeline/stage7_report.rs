use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::Error;
use crate::model::profile::ScoringProfile;
use crate::model::result::AssessmentResult;
use crate::model::risk::RiskLevel;
use crate::model::segments::{Segment, SegmentSource};
use crate::report::json::{render_frame_json, render_summary_json};
use crate::report::text::render_report_text;
use crate::report::{
    RiskStat, ScoreStats, SegmentStat, SummaryData, ToolMeta, bool_fraction, format_f32_6, median,
    p90,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportMode {
    /// Per-frame table and JSON Lines plus the summary.
    Frame,
    /// Summary only.
    Summary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameAssessment {
    pub frame: u64,
    pub timestamp_ms: Option<f64>,
    pub result: AssessmentResult,
}

#[derive(Debug, Clone)]
pub struct Stage7Input<'a> {
    pub frames: &'a [FrameAssessment],
    pub profile: &'a ScoringProfile,
    pub input_path: String,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage7Input<'_>, out_dir: &Path, mode: ReportMode) -> Result<(), Error> {
    fs::create_dir_all(out_dir)?;

    if mode == ReportMode::Frame {
        write_frames_tsv(input, &out_dir.join("assessments.tsv"))?;
        write_frames_jsonl(input, &out_dir.join("assessments.jsonl"))?;
    }

    let summary = build_summary(input);
    for stat in &summary.segments {
        if stat.defaulted_fraction > 0.5 {
            warn!(
                "{} was defaulted in {} of frames; check landmark visibility",
                stat.segment.name(),
                format_f32_6(stat.defaulted_fraction)
            );
        }
    }

    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let report = render_report_text(&summary);
    write_text(&out_dir.join("report.txt"), &report)?;

    info!("reports written to {}", out_dir.display());
    Ok(())
}

fn write_frames_tsv(input: &Stage7Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let mut header = vec!["frame".to_string(), "timestamp_ms".to_string()];
    for segment in Segment::ALL {
        header.push(format!("{}_deg", segment.name()));
        header.push(format!("{}_level", segment.name()));
        header.push(format!("{}_source", segment.name()));
    }
    for col in [
        "group_a",
        "group_b",
        "load",
        "coupling",
        "activity",
        "final_score",
        "risk_level",
        "degraded",
    ] {
        header.push(col.to_string());
    }
    writeln!(w, "{}", header.join("\t"))?;

    for frame in input.frames {
        let r = &frame.result;
        let mut row = vec![
            frame.frame.to_string(),
            frame
                .timestamp_ms
                .map(|t| format!("{:.3}", t))
                .unwrap_or_default(),
        ];
        for (_, s) in r.segments.iter() {
            row.push(s.degrees.map(|d| d.to_string()).unwrap_or_default());
            row.push(s.level.to_string());
            row.push(s.source.name().to_string());
        }
        row.push(r.group_a.to_string());
        row.push(r.group_b.to_string());
        row.push(r.modifiers.load.to_string());
        row.push(r.modifiers.coupling.to_string());
        row.push(r.modifiers.activity.to_string());
        row.push(r.final_score.to_string());
        row.push(r.risk.level.name().to_string());
        row.push(r.degraded.to_string());
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn write_frames_jsonl(input: &Stage7Input<'_>, path: &Path) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);
    for frame in input.frames {
        let line = render_frame_json(frame.frame, frame.timestamp_ms, &frame.result)?;
        writeln!(w, "{}", line)?;
    }
    w.flush()?;
    Ok(())
}

pub fn build_summary(input: &Stage7Input<'_>) -> SummaryData {
    let frames = input.frames;
    let n_frames = frames.len();

    let scores: Vec<f32> = frames
        .iter()
        .map(|f| f32::from(f.result.final_score))
        .collect();
    let max = frames
        .iter()
        .map(|f| f.result.final_score)
        .max()
        .unwrap_or(0);

    let risk_levels: Vec<RiskStat> = input
        .profile
        .risk
        .iter()
        .map(|band| {
            let count = frames
                .iter()
                .filter(|f| f.result.risk.level == band.level)
                .count();
            RiskStat {
                level: band.level,
                label: band.label.clone(),
                count,
                fraction: fraction(count, n_frames),
            }
        })
        .collect();

    let dominant_level = majority_level(&risk_levels);
    let peak_level = frames.iter().map(|f| f.result.risk.level).max();
    let high_risk = frames
        .iter()
        .map(|f| f.result.risk.level >= RiskLevel::High)
        .collect::<Vec<_>>();
    let degraded = frames.iter().map(|f| f.result.degraded).collect::<Vec<_>>();

    let segments = Segment::ALL
        .into_iter()
        .map(|segment| segment_stat(frames, segment))
        .collect();

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: input.input_path.clone(),
        profile: input.profile.name.clone(),
        n_frames,
        final_score: ScoreStats {
            median: median(&scores),
            p90: p90(&scores),
            max,
        },
        risk_levels,
        dominant_level,
        peak_level,
        high_risk_fraction: bool_fraction(&high_risk),
        degraded_fraction: bool_fraction(&degraded),
        segments,
    }
}

fn segment_stat(frames: &[FrameAssessment], segment: Segment) -> SegmentStat {
    let levels: Vec<f32> = frames
        .iter()
        .map(|f| f32::from(f.result.segments.get(segment).level))
        .collect();
    let defaulted: Vec<bool> = frames
        .iter()
        .map(|f| f.result.segments.get(segment).source == SegmentSource::Defaulted)
        .collect();
    let one_sided: Vec<bool> = frames
        .iter()
        .map(|f| f.result.segments.get(segment).source == SegmentSource::OneSided)
        .collect();
    let proxy: Vec<bool> = frames
        .iter()
        .map(|f| f.result.segments.get(segment).source == SegmentSource::Proxy)
        .collect();
    SegmentStat {
        segment,
        level_median: median(&levels),
        level_p90: p90(&levels),
        defaulted_fraction: bool_fraction(&defaulted),
        one_sided_fraction: bool_fraction(&one_sided),
        proxy_fraction: bool_fraction(&proxy),
    }
}

/// Most frequent level; ties go to the more severe level.
fn majority_level(stats: &[RiskStat]) -> Option<RiskLevel> {
    stats
        .iter()
        .filter(|s| s.count > 0)
        .max_by(|a, b| a.count.cmp(&b.count).then(a.level.cmp(&b.level)))
        .map(|s| s.level)
}

fn fraction(count: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        count as f32 / total as f32
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
