use std::collections::BTreeMap;
use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// A position in normalised image space (`x`, `y` in [0, 1], `z` on the
/// same scale as `x`). 2D detectors leave `z` at 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn dot(self, other: Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn midpoint(self, other: Point3) -> Point3 {
        Point3 {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
            z: (self.z + other.z) * 0.5,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// Named landmark vocabulary. The first thirteen are required for a full
/// assessment; the index fingertips are optional and only feed the wrist
/// when a profile asks for them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    Nose,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftIndex,
    RightIndex,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl Landmark {
    pub const ALL: [Landmark; 15] = [
        Landmark::Nose,
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
        Landmark::LeftIndex,
        Landmark::RightIndex,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
    ];

    pub const REQUIRED: [Landmark; 13] = [
        Landmark::Nose,
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Landmark::Nose => "nose",
            Landmark::LeftShoulder => "left_shoulder",
            Landmark::RightShoulder => "right_shoulder",
            Landmark::LeftElbow => "left_elbow",
            Landmark::RightElbow => "right_elbow",
            Landmark::LeftWrist => "left_wrist",
            Landmark::RightWrist => "right_wrist",
            Landmark::LeftIndex => "left_index",
            Landmark::RightIndex => "right_index",
            Landmark::LeftHip => "left_hip",
            Landmark::RightHip => "right_hip",
            Landmark::LeftKnee => "left_knee",
            Landmark::RightKnee => "right_knee",
            Landmark::LeftAnkle => "left_ankle",
            Landmark::RightAnkle => "right_ankle",
        }
    }

    pub fn from_name(name: &str) -> Option<Landmark> {
        Landmark::ALL.into_iter().find(|lm| lm.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    #[serde(flatten)]
    pub position: Point3,
    /// Detector visibility/confidence in [0, 1]; absent means visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Keypoint {
    pub const fn at(position: Point3) -> Self {
        Self {
            position,
            visibility: None,
        }
    }

    pub fn is_visible(&self, min_visibility: f64) -> bool {
        match self.visibility {
            Some(v) => v >= min_visibility,
            None => true,
        }
    }
}

/// One frame's keypoints, keyed by landmark. Landmarks may be absent.
///
/// Deserialises from a JSON object keyed by landmark name; names outside
/// the vocabulary (eyes, ears, heels, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Keypoint>",
    into = "BTreeMap<String, Keypoint>"
)]
pub struct KeypointSet {
    points: BTreeMap<Landmark, Keypoint>,
}

impl KeypointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, landmark: Landmark, position: Point3) -> Self {
        self.points.insert(landmark, Keypoint::at(position));
        self
    }

    pub fn insert(&mut self, landmark: Landmark, keypoint: Keypoint) {
        self.points.insert(landmark, keypoint);
    }

    pub fn remove(&mut self, landmark: Landmark) -> Option<Keypoint> {
        self.points.remove(&landmark)
    }

    pub fn get(&self, landmark: Landmark) -> Option<&Keypoint> {
        self.points.get(&landmark)
    }

    /// Position of a landmark that is present, finite and visible enough.
    pub fn visible(&self, landmark: Landmark, min_visibility: f64) -> Option<Point3> {
        self.points
            .get(&landmark)
            .filter(|kp| kp.is_visible(min_visibility) && kp.position.is_finite())
            .map(|kp| kp.position)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Landmark, &Keypoint)> {
        self.points.iter().map(|(lm, kp)| (*lm, kp))
    }

    pub fn missing_required(&self) -> Vec<Landmark> {
        Landmark::REQUIRED
            .into_iter()
            .filter(|lm| !self.points.contains_key(lm))
            .collect()
    }

    /// Rescales the horizontal axis, e.g. by width/height to undo the
    /// anisotropy of coordinates normalised per image axis.
    pub fn rescaled_x(&self, factor: f64) -> KeypointSet {
        let points = self
            .points
            .iter()
            .map(|(lm, kp)| {
                let mut kp = *kp;
                kp.position.x *= factor;
                kp.position.z *= factor;
                (*lm, kp)
            })
            .collect();
        KeypointSet { points }
    }
}

impl FromIterator<(Landmark, Keypoint)> for KeypointSet {
    fn from_iter<I: IntoIterator<Item = (Landmark, Keypoint)>>(iter: I) -> Self {
        KeypointSet {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, Keypoint>> for KeypointSet {
    fn from(raw: BTreeMap<String, Keypoint>) -> Self {
        raw.into_iter()
            .filter_map(|(name, kp)| Landmark::from_name(&name).map(|lm| (lm, kp)))
            .collect()
    }
}

impl From<KeypointSet> for BTreeMap<String, Keypoint> {
    fn from(set: KeypointSet) -> Self {
        set.points
            .into_iter()
            .map(|(lm, kp)| (lm.name().to_string(), kp))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/keypoints.rs"]
mod tests;
