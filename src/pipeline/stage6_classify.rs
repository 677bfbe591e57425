use crate::model::risk::{RiskAssessment, RiskBand, RiskLevel};

/// Maps a final score to its risk band.
///
/// Bands are validated to tile the score range, so a miss only happens for
/// scores outside it; those take the nearest end band.
pub fn classify_risk(score: u8, bands: &[RiskBand]) -> RiskAssessment {
    let band = bands
        .iter()
        .find(|b| b.contains(score))
        .or_else(|| match bands.first() {
            Some(first) if score < first.min => Some(first),
            _ => bands.last(),
        });
    match band {
        Some(b) => RiskAssessment {
            level: b.level,
            label: b.label.clone(),
            color: b.color.clone(),
        },
        None => RiskAssessment {
            level: RiskLevel::Negligible,
            label: String::new(),
            color: String::new(),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_classify.rs"]
mod tests;
