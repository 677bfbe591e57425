use serde::{Deserialize, Serialize};

use crate::model::modifiers::ModifierScores;
use crate::model::risk::RiskAssessment;
use crate::model::segments::{PerSegment, Segment, SegmentSource};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentAssessment {
    /// Whole-degree angle used for thresholding; `None` when defaulted.
    pub degrees: Option<u16>,
    pub precise_degrees: Option<f64>,
    pub level: u8,
    pub source: SegmentSource,
}

/// Everything derived from one frame. Plain data, no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub segments: PerSegment<SegmentAssessment>,
    pub group_a: u8,
    pub group_b: u8,
    pub modifiers: ModifierScores,
    pub final_score: u8,
    pub risk: RiskAssessment,
    /// Set when any segment was one-sided or defaulted.
    pub degraded: bool,
}

impl AssessmentResult {
    pub fn segments_with(&self, source: SegmentSource) -> Vec<Segment> {
        self.segments
            .iter()
            .filter(|(_, s)| s.source == source)
            .map(|(segment, _)| segment)
            .collect()
    }

    pub fn defaulted_segments(&self) -> Vec<Segment> {
        self.segments_with(SegmentSource::Defaulted)
    }
}
