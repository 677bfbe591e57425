use std::fmt::Debug;

use crate::model::profile::CombinerPolicy;
use crate::model::reba_tables::{table_a, table_b};
use crate::model::segments::PerSegment;
use crate::model::thresholds::{BucketTable, ThresholdTable};

/// Turns segment levels into the two postural group scores.
///
/// Out-of-range levels are clamped to what the strategy accepts; neither
/// method can fail.
pub trait Combiner: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn group_a(&self, neck: u8, trunk: u8, legs: u8) -> u8;

    fn group_b(&self, upper_arm: u8, lower_arm: u8, wrist: u8) -> u8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LevelRange {
    min: u8,
    max: u8,
}

impl LevelRange {
    fn of(table: &ThresholdTable) -> Self {
        Self {
            min: table.neutral_level(),
            max: table.max_level(),
        }
    }

    fn clamp(self, level: u8) -> u32 {
        u32::from(level.max(self.min).min(self.max))
    }
}

#[derive(Debug, Clone)]
pub struct SumBucketCombiner {
    group_a: BucketTable,
    group_b: BucketTable,
    levels: PerSegment<LevelRange>,
}

impl SumBucketCombiner {
    pub fn new(
        group_a: BucketTable,
        group_b: BucketTable,
        segments: &PerSegment<ThresholdTable>,
    ) -> Self {
        Self {
            group_a,
            group_b,
            levels: segments.map(|_, t| LevelRange::of(t)),
        }
    }
}

impl Combiner for SumBucketCombiner {
    fn name(&self) -> &'static str {
        "sum_bucket"
    }

    fn group_a(&self, neck: u8, trunk: u8, legs: u8) -> u8 {
        let sum = self.levels.neck.clamp(neck)
            + self.levels.trunk.clamp(trunk)
            + self.levels.legs.clamp(legs);
        self.group_a.score_for(sum)
    }

    fn group_b(&self, upper_arm: u8, lower_arm: u8, wrist: u8) -> u8 {
        let sum = self.levels.upper_arm.clamp(upper_arm)
            + self.levels.lower_arm.clamp(lower_arm)
            + self.levels.wrist.clamp(wrist);
        self.group_b.score_for(sum)
    }
}

/// REBA Table A / Table B. Levels beyond a table axis clamp to its edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct RebaTableCombiner;

impl Combiner for RebaTableCombiner {
    fn name(&self) -> &'static str {
        "reba_tables"
    }

    fn group_a(&self, neck: u8, trunk: u8, legs: u8) -> u8 {
        table_a(neck, trunk, legs)
    }

    fn group_b(&self, upper_arm: u8, lower_arm: u8, wrist: u8) -> u8 {
        table_b(upper_arm, lower_arm, wrist)
    }
}

pub fn build_combiner(
    policy: &CombinerPolicy,
    segments: &PerSegment<ThresholdTable>,
) -> Box<dyn Combiner> {
    match policy {
        CombinerPolicy::SumBucket { group_a, group_b } => Box::new(SumBucketCombiner::new(
            group_a.clone(),
            group_b.clone(),
            segments,
        )),
        CombinerPolicy::RebaTables => Box::new(RebaTableCombiner),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_combine.rs"]
mod tests;
