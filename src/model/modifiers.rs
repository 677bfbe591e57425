use serde::{Deserialize, Serialize};

/// Hand/object grip quality.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Coupling {
    #[default]
    Good,
    Fair,
    Poor,
    Unacceptable,
}

impl Coupling {
    pub fn name(self) -> &'static str {
        match self {
            Coupling::Good => "good",
            Coupling::Fair => "fair",
            Coupling::Poor => "poor",
            Coupling::Unacceptable => "unacceptable",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    #[default]
    None,
    /// One or more body parts held for longer than a minute.
    Static,
    /// Small-range actions repeated more than four times a minute.
    Repetitive,
    /// Rapid large changes in posture or an unstable base.
    RapidChange,
    Stooping,
    Lifting,
    /// Any activity name this build does not know; scores 0.
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl ActivityKind {
    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::None => "none",
            ActivityKind::Static => "static",
            ActivityKind::Repetitive => "repetitive",
            ActivityKind::RapidChange => "rapid_change",
            ActivityKind::Stooping => "stooping",
            ActivityKind::Lifting => "lifting",
            ActivityKind::Unknown => "unknown",
        }
    }
}

/// Task context supplied by the caller alongside each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Handled load in kilograms. Negative or non-finite values count as 0.
    #[serde(default)]
    pub weight_kg: f64,
    /// Shock or rapid build-up of force.
    #[serde(default)]
    pub sudden_force: bool,
    #[serde(default)]
    pub coupling: Coupling,
    #[serde(default)]
    pub activity: ActivityKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModifierScores {
    pub load: u8,
    pub coupling: u8,
    pub activity: u8,
}

impl ModifierScores {
    pub fn total(&self) -> u8 {
        self.load
            .saturating_add(self.coupling)
            .saturating_add(self.activity)
    }
}
