use crate::model::angle::Angle;
use crate::model::keypoints::{KeypointSet, Landmark, Point3};
use crate::model::profile::ScoringProfile;
use crate::model::segments::{
    AngleConvention, BilateralPolicy, PerSegment, Segment, SegmentSource, WristReference,
};
use crate::pipeline::stage1_geometry::angle_at;

/// A segment angle in the profile's convention, or nothing if the inputs
/// were missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub angle: Option<Angle>,
    pub source: SegmentSource,
}

impl Measurement {
    fn convert(self, convention: AngleConvention) -> Self {
        Self {
            angle: self.angle.map(|a| convention.apply(a)),
            source: self.source,
        }
    }

    pub fn measured(angle: Angle) -> Self {
        Self {
            angle: Some(angle),
            source: SegmentSource::Measured,
        }
    }

    pub fn one_sided(angle: Angle) -> Self {
        Self {
            angle: Some(angle),
            source: SegmentSource::OneSided,
        }
    }

    pub fn defaulted() -> Self {
        Self {
            angle: None,
            source: SegmentSource::Defaulted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn shoulder(self) -> Landmark {
        match self {
            Side::Left => Landmark::LeftShoulder,
            Side::Right => Landmark::RightShoulder,
        }
    }

    fn elbow(self) -> Landmark {
        match self {
            Side::Left => Landmark::LeftElbow,
            Side::Right => Landmark::RightElbow,
        }
    }

    fn wrist(self) -> Landmark {
        match self {
            Side::Left => Landmark::LeftWrist,
            Side::Right => Landmark::RightWrist,
        }
    }

    fn index(self) -> Landmark {
        match self {
            Side::Left => Landmark::LeftIndex,
            Side::Right => Landmark::RightIndex,
        }
    }

    fn hip(self) -> Landmark {
        match self {
            Side::Left => Landmark::LeftHip,
            Side::Right => Landmark::RightHip,
        }
    }

    fn knee(self) -> Landmark {
        match self {
            Side::Left => Landmark::LeftKnee,
            Side::Right => Landmark::RightKnee,
        }
    }

    fn ankle(self) -> Landmark {
        match self {
            Side::Left => Landmark::LeftAnkle,
            Side::Right => Landmark::RightAnkle,
        }
    }
}

/// A point plus whether it was built from incomplete data.
#[derive(Debug, Clone, Copy)]
struct Located {
    point: Point3,
    partial: bool,
}

/// An included angle plus whether any of its points was partial.
#[derive(Debug, Clone, Copy)]
struct SideAngle {
    angle: Angle,
    partial: bool,
}

struct Skeleton<'a> {
    keypoints: &'a KeypointSet,
    min_visibility: f64,
    bilateral: BilateralPolicy,
}

impl Skeleton<'_> {
    fn point(&self, landmark: Landmark) -> Option<Located> {
        self.keypoints
            .visible(landmark, self.min_visibility)
            .map(|point| Located {
                point,
                partial: false,
            })
    }

    /// Midpoint of a left/right pair. With `EitherSide` a lone side stands
    /// in for the midpoint and is marked partial.
    fn midline(&self, left: Landmark, right: Landmark) -> Option<Located> {
        match (self.point(left), self.point(right)) {
            (Some(l), Some(r)) => Some(Located {
                point: l.point.midpoint(r.point),
                partial: false,
            }),
            (Some(one), None) | (None, Some(one)) => match self.bilateral {
                BilateralPolicy::EitherSide => Some(Located {
                    point: one.point,
                    partial: true,
                }),
                BilateralPolicy::RequireBoth => None,
            },
            (None, None) => None,
        }
    }

    fn mid_shoulder(&self) -> Option<Located> {
        self.midline(Landmark::LeftShoulder, Landmark::RightShoulder)
    }

    fn mid_hip(&self) -> Option<Located> {
        self.midline(Landmark::LeftHip, Landmark::RightHip)
    }

    fn mid_knee(&self) -> Option<Located> {
        self.midline(Landmark::LeftKnee, Landmark::RightKnee)
    }
}

fn angle_of(a: Option<Located>, b: Option<Located>, c: Option<Located>) -> Option<SideAngle> {
    let (a, b, c) = (a?, b?, c?);
    Some(SideAngle {
        angle: angle_at(a.point, b.point, c.point),
        partial: a.partial || b.partial || c.partial,
    })
}

fn single(angle: Option<SideAngle>) -> Measurement {
    match angle {
        Some(SideAngle {
            angle,
            partial: false,
        }) => Measurement::measured(angle),
        Some(SideAngle {
            angle,
            partial: true,
        }) => Measurement::one_sided(angle),
        None => Measurement::defaulted(),
    }
}

/// Averages left and right when both exist; otherwise follows the
/// bilateral policy.
fn bilateral(
    left: Option<SideAngle>,
    right: Option<SideAngle>,
    policy: BilateralPolicy,
) -> Measurement {
    match (left, right) {
        (Some(l), Some(r)) => {
            let angle = Angle::mean(l.angle, r.angle);
            if l.partial || r.partial {
                Measurement::one_sided(angle)
            } else {
                Measurement::measured(angle)
            }
        }
        (Some(one), None) | (None, Some(one)) => match policy {
            BilateralPolicy::EitherSide => Measurement::one_sided(one.angle),
            BilateralPolicy::RequireBoth => Measurement::defaulted(),
        },
        (None, None) => Measurement::defaulted(),
    }
}

fn per_side(policy: BilateralPolicy, f: impl Fn(Side) -> Option<SideAngle>) -> Measurement {
    bilateral(f(Side::Left), f(Side::Right), policy)
}

/// Derives every segment angle from one frame's keypoints.
///
/// Neck and trunk use midline points; limbs are measured per side and
/// averaged. Angles are returned in each segment's configured convention,
/// except a wrist that falls back from index landmarks to the hip proxy.
pub fn measure_segments(
    keypoints: &KeypointSet,
    profile: &ScoringProfile,
) -> PerSegment<Measurement> {
    let sk = Skeleton {
        keypoints,
        min_visibility: profile.min_visibility,
        bilateral: profile.bilateral,
    };
    let mid_shoulder = sk.mid_shoulder();
    let mid_hip = sk.mid_hip();

    let neck = single(angle_of(sk.point(Landmark::Nose), mid_shoulder, mid_hip));
    let trunk = single(angle_of(mid_shoulder, mid_hip, sk.mid_knee()));

    let legs = per_side(profile.bilateral, |s| {
        angle_of(sk.point(s.hip()), sk.point(s.knee()), sk.point(s.ankle()))
    });
    let upper_arm = per_side(profile.bilateral, |s| {
        angle_of(sk.point(s.elbow()), sk.point(s.shoulder()), mid_hip)
    });
    let lower_arm = per_side(profile.bilateral, |s| {
        angle_of(sk.point(s.shoulder()), sk.point(s.elbow()), sk.point(s.wrist()))
    });
    let hip_wrist = per_side(profile.bilateral, |s| {
        angle_of(sk.point(s.elbow()), sk.point(s.wrist()), sk.point(s.hip()))
    });
    let wrist = match profile.wrist_reference {
        WristReference::Hip => hip_wrist.convert(profile.conventions.wrist),
        WristReference::Index => {
            let index_wrist = per_side(profile.bilateral, |s| {
                angle_of(sk.point(s.elbow()), sk.point(s.wrist()), sk.point(s.index()))
            });
            if index_wrist.source == SegmentSource::Defaulted {
                hip_proxy(hip_wrist)
            } else {
                index_wrist.convert(profile.conventions.wrist)
            }
        }
    };

    let raw = PerSegment {
        neck,
        trunk,
        legs,
        upper_arm,
        lower_arm,
        wrist,
    };
    raw.map(|segment, m| match segment {
        Segment::Wrist => *m,
        _ => m.convert(*profile.conventions.get(segment)),
    })
}

/// Elbow-wrist-hip stand-in for a wrist without index landmarks, read as
/// deviation from a right angle.
fn hip_proxy(hip_wrist: Measurement) -> Measurement {
    let converted = hip_wrist.convert(AngleConvention::RightAngleDeviation);
    match converted.source {
        SegmentSource::Measured => Measurement {
            source: SegmentSource::Proxy,
            ..converted
        },
        _ => converted,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_angles.rs"]
mod tests;
