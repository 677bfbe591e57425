use serde::{Deserialize, Serialize};

use crate::model::angle::Angle;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Neck,
    Trunk,
    Legs,
    UpperArm,
    LowerArm,
    Wrist,
}

impl Segment {
    pub const ALL: [Segment; 6] = [
        Segment::Neck,
        Segment::Trunk,
        Segment::Legs,
        Segment::UpperArm,
        Segment::LowerArm,
        Segment::Wrist,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Segment::Neck => "neck",
            Segment::Trunk => "trunk",
            Segment::Legs => "legs",
            Segment::UpperArm => "upper_arm",
            Segment::LowerArm => "lower_arm",
            Segment::Wrist => "wrist",
        }
    }
}

/// Where a segment's angle came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentSource {
    Measured,
    /// Only one side of a bilateral segment (or midline pair) was usable.
    OneSided,
    /// Inputs were missing; the segment contributes its neutral level.
    Defaulted,
    /// Measured on both sides from a stand-in landmark (the elbow-wrist-hip
    /// wrist when the index landmarks are absent).
    Proxy,
}

impl SegmentSource {
    pub fn name(self) -> &'static str {
        match self {
            SegmentSource::Measured => "measured",
            SegmentSource::OneSided => "one_sided",
            SegmentSource::Defaulted => "defaulted",
            SegmentSource::Proxy => "proxy",
        }
    }

    /// One-sided and defaulted segments mark the frame degraded.
    pub fn is_degraded(self) -> bool {
        matches!(self, SegmentSource::OneSided | SegmentSource::Defaulted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleConvention {
    /// Angle between the two segment rays at the joint (180 = straight).
    Included,
    /// Deviation from a straight joint (0 = straight).
    Flexion,
    /// Deviation from a right angle (0 = perpendicular rays).
    RightAngleDeviation,
}

impl AngleConvention {
    pub fn apply(self, included: Angle) -> Angle {
        match self {
            AngleConvention::Included => included,
            AngleConvention::Flexion => included.flexion(),
            AngleConvention::RightAngleDeviation => included.right_angle_deviation(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BilateralPolicy {
    RequireBoth,
    EitherSide,
}

/// Third point used for the wrist angle at each wrist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WristReference {
    /// Elbow-wrist-hip on the same side; needs no hand landmarks.
    Hip,
    /// Elbow-wrist-index fingertip.
    Index,
}

/// One value per tracked segment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerSegment<T> {
    pub neck: T,
    pub trunk: T,
    pub legs: T,
    pub upper_arm: T,
    pub lower_arm: T,
    pub wrist: T,
}

impl<T> PerSegment<T> {
    pub fn from_fn(mut f: impl FnMut(Segment) -> T) -> Self {
        Self {
            neck: f(Segment::Neck),
            trunk: f(Segment::Trunk),
            legs: f(Segment::Legs),
            upper_arm: f(Segment::UpperArm),
            lower_arm: f(Segment::LowerArm),
            wrist: f(Segment::Wrist),
        }
    }

    pub fn get(&self, segment: Segment) -> &T {
        match segment {
            Segment::Neck => &self.neck,
            Segment::Trunk => &self.trunk,
            Segment::Legs => &self.legs,
            Segment::UpperArm => &self.upper_arm,
            Segment::LowerArm => &self.lower_arm,
            Segment::Wrist => &self.wrist,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Segment, &T) -> U) -> PerSegment<U> {
        PerSegment::from_fn(|segment| f(segment, self.get(segment)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Segment, &T)> {
        Segment::ALL.into_iter().map(move |segment| (segment, self.get(segment)))
    }
}
