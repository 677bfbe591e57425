pub mod stage1_geometry;
pub mod stage2_angles;
pub mod stage3_segments;
pub mod stage4_combine;
pub mod stage5_modifiers;
pub mod stage6_classify;
pub mod stage7_report;

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::model::angle::Angle;
use crate::model::keypoints::KeypointSet;
use crate::model::modifiers::Modifiers;
use crate::model::profile::ScoringProfile;
use crate::model::result::AssessmentResult;
use crate::model::segments::PerSegment;
use crate::pipeline::stage2_angles::{Measurement, measure_segments};
use crate::pipeline::stage3_segments::score_segments;
use crate::pipeline::stage4_combine::{Combiner, build_combiner};
use crate::pipeline::stage5_modifiers::{apply_modifiers, derive_modifier_scores};
use crate::pipeline::stage6_classify::classify_risk;

/// Scores frames against one validated profile.
///
/// Holds no per-frame state: `assess` takes `&self` and the engine is
/// `Send + Sync`, so one instance can serve concurrent callers.
#[derive(Debug)]
pub struct Engine {
    profile: ScoringProfile,
    combiner: Box<dyn Combiner>,
}

impl Engine {
    pub fn new(profile: ScoringProfile) -> Result<Self, ConfigError> {
        profile.validate()?;
        let combiner = build_combiner(&profile.combiner, &profile.segments);
        info!(
            profile = %profile.name,
            combiner = combiner.name(),
            "scoring engine ready"
        );
        Ok(Self { profile, combiner })
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Full pipeline for one frame: keypoints, angles, levels, groups,
    /// modifiers, risk.
    pub fn assess(&self, keypoints: &KeypointSet, modifiers: &Modifiers) -> AssessmentResult {
        let measurements = measure_segments(keypoints, &self.profile);
        self.score(&measurements, modifiers)
    }

    /// Scores angles that were measured elsewhere. Angles are taken in the
    /// profile's conventions; `None` defaults the segment.
    pub fn assess_angles(
        &self,
        angles: &PerSegment<Option<f64>>,
        modifiers: &Modifiers,
    ) -> AssessmentResult {
        let measurements = angles.map(|_, a| match a {
            Some(deg) => Measurement::measured(Angle::from_degrees(*deg)),
            None => Measurement::defaulted(),
        });
        self.score(&measurements, modifiers)
    }

    fn score(
        &self,
        measurements: &PerSegment<Measurement>,
        modifiers: &Modifiers,
    ) -> AssessmentResult {
        let segments = score_segments(measurements, &self.profile.segments);
        let group_a = self.combiner.group_a(
            segments.neck.level,
            segments.trunk.level,
            segments.legs.level,
        );
        let group_b = self.combiner.group_b(
            segments.upper_arm.level,
            segments.lower_arm.level,
            segments.wrist.level,
        );
        let modifier_scores = derive_modifier_scores(modifiers, &self.profile.modifiers);
        let final_score = apply_modifiers(
            group_a,
            group_b,
            modifier_scores,
            &self.profile.final_policy,
            self.profile.score_range,
        );
        let risk = classify_risk(final_score, &self.profile.risk);
        let degraded = segments
            .iter()
            .any(|(_, s)| s.source.is_degraded());

        debug!(
            group_a,
            group_b,
            final_score,
            risk = risk.level.name(),
            degraded,
            "frame assessed"
        );

        AssessmentResult {
            segments,
            group_a,
            group_b,
            modifiers: modifier_scores,
            final_score,
            risk,
            degraded,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/engine.rs"]
mod tests;
