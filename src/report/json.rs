use serde::Serialize;

use crate::model::result::AssessmentResult;
use crate::report::SummaryData;

#[derive(Debug, Serialize)]
struct FrameLine<'a> {
    frame: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp_ms: Option<f64>,
    #[serde(flatten)]
    result: &'a AssessmentResult,
}

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

/// One compact JSON object per frame, for JSON Lines output.
pub fn render_frame_json(
    frame: u64,
    timestamp_ms: Option<f64>,
    result: &AssessmentResult,
) -> serde_json::Result<String> {
    serde_json::to_string(&FrameLine {
        frame,
        timestamp_ms,
        result,
    })
}
