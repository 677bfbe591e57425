use std::collections::BTreeMap;

use crate::model::modifiers::{ActivityKind, Coupling, ModifierScores, Modifiers};
use crate::model::profile::{CouplingTable, FinalPolicy, ModifierPolicy, ScoreRange};
use crate::model::reba_tables::table_c;
use crate::model::thresholds::LoadTable;

/// Load score by weight; non-positive or non-finite weights score 0.
pub fn derive_load_score(weight_kg: f64, table: &LoadTable) -> u8 {
    table.score_for(weight_kg)
}

pub fn derive_coupling_score(coupling: Coupling, table: &CouplingTable) -> u8 {
    table.score_for(coupling)
}

pub fn derive_activity_bonus(activity: ActivityKind, table: &BTreeMap<ActivityKind, u8>) -> u8 {
    table.get(&activity).copied().unwrap_or(0)
}

pub fn derive_modifier_scores(modifiers: &Modifiers, policy: &ModifierPolicy) -> ModifierScores {
    let mut load = derive_load_score(modifiers.weight_kg, &policy.load);
    if modifiers.sudden_force {
        load = load.saturating_add(policy.shock_bonus);
    }
    ModifierScores {
        load,
        coupling: derive_coupling_score(modifiers.coupling, &policy.coupling),
        activity: derive_activity_bonus(modifiers.activity, &policy.activity),
    }
}

/// Combines group scores with modifier scores into the final score.
/// Clamping into `range` is the only bound enforcement.
pub fn apply_modifiers(
    group_a: u8,
    group_b: u8,
    scores: ModifierScores,
    policy: &FinalPolicy,
    range: ScoreRange,
) -> u8 {
    match *policy {
        FinalPolicy::Linear {
            posture_scale,
            modifier_scale,
        } => {
            let posture = f64::from(group_a) + f64::from(group_b);
            let modifiers = f64::from(scores.total());
            let raw = posture_scale * posture + modifier_scale * modifiers;
            range.clamp(raw.round() as i64)
        }
        FinalPolicy::RebaTableC => {
            let score_a = group_a.saturating_add(scores.load);
            let score_b = group_b.saturating_add(scores.coupling);
            let c = table_c(score_a, score_b);
            range.clamp(i64::from(c) + i64::from(scores.activity))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_modifiers.rs"]
mod tests;
