pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::risk::RiskLevel;
use crate::model::segments::Segment;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreStats {
    pub median: f32,
    pub p90: f32,
    pub max: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskStat {
    pub level: RiskLevel,
    pub label: String,
    pub count: usize,
    pub fraction: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentStat {
    pub segment: Segment,
    pub level_median: f32,
    pub level_p90: f32,
    pub defaulted_fraction: f32,
    pub one_sided_fraction: f32,
    pub proxy_fraction: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: String,
    pub profile: String,
    pub n_frames: usize,
    pub final_score: ScoreStats,
    pub risk_levels: Vec<RiskStat>,
    pub dominant_level: Option<RiskLevel>,
    pub peak_level: Option<RiskLevel>,
    /// Fraction of frames at `High` or above.
    pub high_risk_fraction: f32,
    pub degraded_fraction: f32,
    pub segments: Vec<SegmentStat>,
}

pub fn format_f32_6(v: f32) -> String {
    format!("{:.6}", v)
}

pub fn quantile_indexed(values: &[f32], p: f32) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f32 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f32]) -> f32 {
    quantile_indexed(values, 0.5)
}

pub fn p90(values: &[f32]) -> f32 {
    quantile_indexed(values, 0.90)
}

pub fn bool_fraction(values: &[bool]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let count = values.iter().filter(|&&v| v).count();
    count as f32 / values.len() as f32
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
