//! REBA-style ergonomic risk scoring from 2D/3D human pose keypoints.
//!
//! The crate is a pure scoring core: pose estimation happens upstream and
//! frames arrive as named keypoints (or MediaPipe landmark arrays). An
//! [`Engine`] built from a validated [`ScoringProfile`] turns one frame into
//! an [`AssessmentResult`].

pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::{ConfigError, Error, InputError, Result};
pub use model::{
    ActivityKind, AssessmentResult, Coupling, KeypointSet, Landmark, Modifiers, PerSegment,
    Point3, Preset, RiskLevel, ScoringProfile, Segment, SegmentSource,
};
pub use pipeline::Engine;
