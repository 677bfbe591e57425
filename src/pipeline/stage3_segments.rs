use crate::model::angle::Angle;
use crate::model::result::SegmentAssessment;
use crate::model::segments::PerSegment;
use crate::model::thresholds::ThresholdTable;
use crate::pipeline::stage2_angles::Measurement;

/// Level of one segment angle. Thresholds see the whole-degree value.
pub fn classify_angle(angle: Angle, table: &ThresholdTable) -> u8 {
    table.level_for(f64::from(angle.degrees()))
}

pub fn score_segment(measurement: Measurement, table: &ThresholdTable) -> SegmentAssessment {
    match measurement.angle {
        Some(angle) => SegmentAssessment {
            degrees: Some(angle.degrees()),
            precise_degrees: Some(angle.precise()),
            level: classify_angle(angle, table),
            source: measurement.source,
        },
        None => SegmentAssessment {
            degrees: None,
            precise_degrees: None,
            level: table.neutral_level(),
            source: measurement.source,
        },
    }
}

pub fn score_segments(
    measurements: &PerSegment<Measurement>,
    tables: &PerSegment<ThresholdTable>,
) -> PerSegment<SegmentAssessment> {
    measurements.map(|segment, m| score_segment(*m, tables.get(segment)))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_segments.rs"]
mod tests;
