pub mod angle;
pub mod keypoints;
pub mod modifiers;
pub mod profile;
pub mod reba_tables;
pub mod result;
pub mod risk;
pub mod segments;
pub mod thresholds;

pub use angle::Angle;
pub use keypoints::{Keypoint, KeypointSet, Landmark, Point3};
pub use modifiers::{ActivityKind, Coupling, ModifierScores, Modifiers};
pub use profile::{CombinerPolicy, FinalPolicy, Preset, ScoringProfile};
pub use result::{AssessmentResult, SegmentAssessment};
pub use risk::{RiskAssessment, RiskBand, RiskLevel};
pub use segments::{PerSegment, Segment, SegmentSource};
