use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Negligible,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::Negligible,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RiskLevel::Negligible => "negligible",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very_high",
        }
    }
}

/// Inclusive final-score range mapped to one risk level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBand {
    pub level: RiskLevel,
    pub min: u8,
    pub max: u8,
    pub label: String,
    pub color: String,
}

impl RiskBand {
    pub fn new(level: RiskLevel, min: u8, max: u8, label: &str, color: &str) -> Self {
        Self {
            level,
            min,
            max,
            label: label.to_string(),
            color: color.to_string(),
        }
    }

    pub fn contains(&self, score: u8) -> bool {
        score >= self.min && score <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub label: String,
    pub color: String,
}
