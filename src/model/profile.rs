use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::modifiers::{ActivityKind, Coupling};
use crate::model::risk::{RiskBand, RiskLevel};
use crate::model::segments::{AngleConvention, BilateralPolicy, PerSegment, WristReference};
use crate::model::thresholds::{BucketTable, LoadTable, ThresholdTable};

/// How segment levels become the two postural group scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CombinerPolicy {
    /// Sum the group's levels and bucket the sum.
    SumBucket {
        group_a: BucketTable,
        group_b: BucketTable,
    },
    /// REBA Table A and Table B lookups.
    RebaTables,
}

/// How group scores and modifier scores become the final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FinalPolicy {
    /// `round(posture_scale * (A + B) + modifier_scale * modifiers)`.
    Linear {
        posture_scale: f64,
        modifier_scale: f64,
    },
    /// Table C over `(A + load, B + coupling)`, plus the activity score.
    RebaTableC,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouplingTable {
    pub good: u8,
    pub fair: u8,
    pub poor: u8,
    pub unacceptable: u8,
}

impl CouplingTable {
    pub fn score_for(&self, coupling: Coupling) -> u8 {
        match coupling {
            Coupling::Good => self.good,
            Coupling::Fair => self.fair,
            Coupling::Poor => self.poor,
            Coupling::Unacceptable => self.unacceptable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierPolicy {
    pub load: LoadTable,
    /// Added to the load score when force is applied suddenly.
    #[serde(default)]
    pub shock_bonus: u8,
    pub coupling: CouplingTable,
    /// Activity kinds absent from the map score 0.
    #[serde(default)]
    pub activity: BTreeMap<ActivityKind, u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn clamp(&self, score: i64) -> u8 {
        score.clamp(i64::from(self.min), i64::from(self.max)) as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    Prototype,
    Reba,
}

impl Preset {
    pub fn profile(self) -> ScoringProfile {
        match self {
            Preset::Prototype => ScoringProfile::prototype_v1(),
            Preset::Reba => ScoringProfile::reba_v1(),
        }
    }
}

/// Every policy knob of the scoring engine. Validated once when an engine
/// is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringProfile {
    pub name: String,
    /// Keypoints reported below this visibility are treated as missing.
    pub min_visibility: f64,
    pub bilateral: BilateralPolicy,
    pub wrist_reference: WristReference,
    pub conventions: PerSegment<AngleConvention>,
    pub segments: PerSegment<ThresholdTable>,
    pub combiner: CombinerPolicy,
    pub modifiers: ModifierPolicy,
    pub final_policy: FinalPolicy,
    pub score_range: ScoreRange,
    pub risk: Vec<RiskBand>,
}

impl ScoringProfile {
    /// Thresholds of the browser prototype: sum-bucket grouping and a
    /// linear 1.5x final formula over four risk tiers.
    pub fn prototype_v1() -> Self {
        Self {
            name: "prototype_v1".to_string(),
            min_visibility: 0.5,
            bilateral: BilateralPolicy::RequireBoth,
            wrist_reference: WristReference::Hip,
            conventions: PerSegment {
                neck: AngleConvention::Flexion,
                trunk: AngleConvention::Flexion,
                legs: AngleConvention::Included,
                upper_arm: AngleConvention::Included,
                lower_arm: AngleConvention::Included,
                wrist: AngleConvention::RightAngleDeviation,
            },
            segments: PerSegment {
                neck: ThresholdTable::rising(&[(10.0, 1), (20.0, 2), (30.0, 3), (45.0, 4)], 6),
                trunk: ThresholdTable::rising(&[(5.0, 1), (20.0, 2), (60.0, 3)], 4),
                legs: ThresholdTable::falling(&[(160.0, 1), (120.0, 2)], 3),
                upper_arm: ThresholdTable::rising(&[(20.0, 1), (45.0, 2), (90.0, 3)], 4),
                lower_arm: ThresholdTable::falling(&[(100.0, 1), (60.0, 2)], 3),
                wrist: ThresholdTable::rising(&[(15.0, 1), (30.0, 2)], 3),
            },
            combiner: CombinerPolicy::SumBucket {
                group_a: BucketTable::new(&[(3, 1), (5, 2), (7, 3), (9, 4)], 5),
                group_b: BucketTable::new(&[(3, 1), (5, 2), (7, 3)], 4),
            },
            modifiers: ModifierPolicy {
                load: LoadTable::new(&[(5.0, 1), (10.0, 2)], 3),
                shock_bonus: 2,
                coupling: CouplingTable {
                    good: 0,
                    fair: 0,
                    poor: 1,
                    unacceptable: 1,
                },
                activity: BTreeMap::from([
                    (ActivityKind::Static, 1),
                    (ActivityKind::Repetitive, 1),
                    (ActivityKind::RapidChange, 1),
                    (ActivityKind::Stooping, 1),
                    (ActivityKind::Lifting, 1),
                ]),
            },
            final_policy: FinalPolicy::Linear {
                posture_scale: 1.5,
                modifier_scale: 1.5,
            },
            score_range: ScoreRange { min: 1, max: 15 },
            risk: vec![
                RiskBand::new(
                    RiskLevel::Negligible,
                    1,
                    3,
                    "Very low (action not necessary)",
                    "#2e7d32",
                ),
                RiskBand::new(
                    RiskLevel::Medium,
                    4,
                    7,
                    "Medium (action sometimes necessary)",
                    "#f9a825",
                ),
                RiskBand::new(RiskLevel::High, 8, 10, "High (act soon)", "#f57c00"),
                RiskBand::new(
                    RiskLevel::VeryHigh,
                    11,
                    15,
                    "Very high (act now)",
                    "#c62828",
                ),
            ],
        }
    }

    /// REBA worksheet thresholds with Table A/B/C lookups and the five
    /// REBA action levels.
    pub fn reba_v1() -> Self {
        Self {
            name: "reba_v1".to_string(),
            min_visibility: 0.5,
            bilateral: BilateralPolicy::RequireBoth,
            wrist_reference: WristReference::Index,
            conventions: PerSegment {
                neck: AngleConvention::Flexion,
                trunk: AngleConvention::Flexion,
                legs: AngleConvention::Flexion,
                upper_arm: AngleConvention::Included,
                lower_arm: AngleConvention::Included,
                wrist: AngleConvention::Flexion,
            },
            segments: PerSegment {
                neck: ThresholdTable::rising(&[(21.0, 1)], 2),
                trunk: ThresholdTable::rising(&[(5.0, 1), (21.0, 2), (61.0, 3)], 4),
                legs: ThresholdTable::rising(&[(30.0, 1), (61.0, 2)], 3),
                upper_arm: ThresholdTable::rising(&[(21.0, 1), (46.0, 2), (91.0, 3)], 4),
                lower_arm: ThresholdTable::falling(&[(79.0, 1)], 2),
                wrist: ThresholdTable::rising(&[(16.0, 1)], 2),
            },
            combiner: CombinerPolicy::RebaTables,
            modifiers: ModifierPolicy {
                load: LoadTable::new(&[(5.0, 0), (10.0, 1)], 2),
                shock_bonus: 1,
                coupling: CouplingTable {
                    good: 0,
                    fair: 1,
                    poor: 2,
                    unacceptable: 3,
                },
                activity: BTreeMap::from([
                    (ActivityKind::Static, 1),
                    (ActivityKind::Repetitive, 1),
                    (ActivityKind::RapidChange, 1),
                ]),
            },
            final_policy: FinalPolicy::RebaTableC,
            score_range: ScoreRange { min: 1, max: 15 },
            risk: vec![
                RiskBand::new(RiskLevel::Negligible, 1, 1, "Negligible risk", "#1b5e20"),
                RiskBand::new(RiskLevel::Low, 2, 3, "Low risk, change may be needed", "#7cb342"),
                RiskBand::new(
                    RiskLevel::Medium,
                    4,
                    7,
                    "Medium risk, investigate and change soon",
                    "#f9a825",
                ),
                RiskBand::new(
                    RiskLevel::High,
                    8,
                    10,
                    "High risk, investigate and implement change",
                    "#f57c00",
                ),
                RiskBand::new(
                    RiskLevel::VeryHigh,
                    11,
                    15,
                    "Very high risk, implement change now",
                    "#c62828",
                ),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_parameter("min_visibility", self.min_visibility, 0.0, 1.0)?;

        for (segment, table) in self.segments.iter() {
            table.validate(&format!("segment.{}", segment.name()))?;
        }

        if let CombinerPolicy::SumBucket { group_a, group_b } = &self.combiner {
            group_a.validate("combiner.group_a")?;
            group_b.validate("combiner.group_b")?;
        }

        self.modifiers.load.validate("modifiers.load")?;

        if let FinalPolicy::Linear {
            posture_scale,
            modifier_scale,
        } = self.final_policy
        {
            check_parameter("final_policy.posture_scale", posture_scale, 0.0, 100.0)?;
            check_parameter("final_policy.modifier_scale", modifier_scale, 0.0, 100.0)?;
        }

        let range = self.score_range;
        if range.min == 0 || range.min > range.max {
            return Err(ConfigError::InvalidScoreRange {
                min: range.min,
                max: range.max,
            });
        }

        validate_risk_bands(&self.risk, range)
    }
}

/// Bands must be ordered by level and tile the score range exactly.
pub fn validate_risk_bands(bands: &[RiskBand], range: ScoreRange) -> Result<(), ConfigError> {
    if bands.is_empty() {
        return Err(ConfigError::EmptyTable {
            table: "risk".to_string(),
        });
    }
    let mut expected = range.min;
    let mut prev_level: Option<RiskLevel> = None;
    for (index, band) in bands.iter().enumerate() {
        if band.min > band.max {
            return Err(ConfigError::ReversedRiskBand {
                index,
                min: band.min,
                max: band.max,
            });
        }
        if band.min != expected {
            return Err(ConfigError::RiskDiscontinuity {
                index,
                expected,
                found: band.min,
            });
        }
        if let Some(prev) = prev_level {
            if band.level <= prev {
                return Err(ConfigError::RiskLevelOrder {
                    index,
                    level: band.level.name(),
                });
            }
        }
        prev_level = Some(band.level);
        if band.max >= range.max {
            if band.max > range.max || index + 1 != bands.len() {
                return Err(ConfigError::RiskCoverage {
                    covered: band.max,
                    max: range.max,
                });
            }
            return Ok(());
        }
        expected = band.max + 1;
    }
    Err(ConfigError::RiskCoverage {
        covered: expected - 1,
        max: range.max,
    })
}

fn check_parameter(field: &str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ConfigError::InvalidParameter {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
