use crate::model::keypoints::{Keypoint, KeypointSet, Landmark, Point3};

/// Landmarks per pose in the MediaPipe Pose topology.
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Position of a landmark in the MediaPipe Pose output.
pub fn landmark_index(landmark: Landmark) -> usize {
    match landmark {
        Landmark::Nose => 0,
        Landmark::LeftShoulder => 11,
        Landmark::RightShoulder => 12,
        Landmark::LeftElbow => 13,
        Landmark::RightElbow => 14,
        Landmark::LeftWrist => 15,
        Landmark::RightWrist => 16,
        Landmark::LeftIndex => 19,
        Landmark::RightIndex => 20,
        Landmark::LeftHip => 23,
        Landmark::RightHip => 24,
        Landmark::LeftKnee => 25,
        Landmark::RightKnee => 26,
        Landmark::LeftAnkle => 27,
        Landmark::RightAnkle => 28,
    }
}

/// Converts one positional landmark list (`[x, y]`, `[x, y, z]` or
/// `[x, y, z, visibility, ...]` per entry) to named keypoints. Entries
/// outside the vocabulary are ignored but must still be well-formed.
pub fn keypoints_from_landmarks(rows: &[Vec<f64>]) -> Result<KeypointSet, String> {
    if rows.len() != POSE_LANDMARK_COUNT {
        return Err(format!(
            "expected {} landmarks, found {}",
            POSE_LANDMARK_COUNT,
            rows.len()
        ));
    }
    for (idx, row) in rows.iter().enumerate() {
        if row.len() < 2 {
            return Err(format!(
                "landmark {} has {} values; expected at least x and y",
                idx,
                row.len()
            ));
        }
    }

    let mut set = KeypointSet::new();
    for landmark in Landmark::ALL {
        let row = &rows[landmark_index(landmark)];
        let keypoint = match row.as_slice() {
            [x, y] => Keypoint::at(Point3::planar(*x, *y)),
            [x, y, z] => Keypoint::at(Point3::new(*x, *y, *z)),
            [x, y, z, visibility, ..] => Keypoint {
                position: Point3::new(*x, *y, *z),
                visibility: Some(*visibility),
            },
            _ => return Err(format!("landmark {} is malformed", landmark.name())),
        };
        if !keypoint.position.is_finite() {
            return Err(format!("landmark {} is not finite", landmark.name()));
        }
        set.insert(landmark, keypoint);
    }
    Ok(set)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mediapipe.rs"]
mod tests;
