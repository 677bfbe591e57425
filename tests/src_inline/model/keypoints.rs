use super::*;

#[test]
fn test_landmark_names_round_trip() {
    for lm in Landmark::ALL {
        assert_eq!(Landmark::from_name(lm.name()), Some(lm));
    }
    assert_eq!(Landmark::from_name("left_eye"), None);
}

#[test]
fn test_deserialize_ignores_unknown_names() {
    let json = r#"{
        "nose": {"x": 0.5, "y": 0.1},
        "left_eye": {"x": 0.48, "y": 0.08},
        "left_wrist": {"x": 0.4, "y": 0.5, "z": 0.1, "visibility": 0.3}
    }"#;
    let set: KeypointSet = serde_json::from_str(json).unwrap();
    assert_eq!(set.len(), 2);

    let nose = set.get(Landmark::Nose).unwrap();
    assert_eq!(nose.position, Point3::planar(0.5, 0.1));
    assert_eq!(nose.visibility, None);

    let wrist = set.get(Landmark::LeftWrist).unwrap();
    assert_eq!(wrist.position.z, 0.1);
    assert_eq!(wrist.visibility, Some(0.3));
}

#[test]
fn test_visible_respects_threshold_and_finiteness() {
    let mut set = KeypointSet::new().with(Landmark::Nose, Point3::planar(0.5, 0.1));
    set.insert(
        Landmark::LeftWrist,
        Keypoint {
            position: Point3::planar(0.4, 0.5),
            visibility: Some(0.3),
        },
    );
    set.insert(
        Landmark::RightWrist,
        Keypoint::at(Point3::planar(f64::NAN, 0.5)),
    );

    assert!(set.visible(Landmark::Nose, 0.5).is_some());
    assert!(set.visible(Landmark::LeftWrist, 0.5).is_none());
    assert!(set.visible(Landmark::LeftWrist, 0.2).is_some());
    assert!(set.visible(Landmark::RightWrist, 0.0).is_none());
    assert!(set.visible(Landmark::LeftHip, 0.0).is_none());
}

#[test]
fn test_missing_required() {
    let set = KeypointSet::new()
        .with(Landmark::Nose, Point3::planar(0.5, 0.1))
        .with(Landmark::LeftIndex, Point3::planar(0.4, 0.6));
    let missing = set.missing_required();
    assert_eq!(missing.len(), 12);
    assert!(!missing.contains(&Landmark::Nose));
    assert!(!missing.contains(&Landmark::LeftIndex));
}

#[test]
fn test_rescaled_x_keeps_y() {
    let set = KeypointSet::new().with(Landmark::Nose, Point3::new(0.25, 0.5, 0.1));
    let scaled = set.rescaled_x(2.0);
    let p = scaled.get(Landmark::Nose).unwrap().position;
    assert_eq!(p, Point3::new(0.5, 0.5, 0.2));
}

#[test]
fn test_serialize_uses_landmark_names() {
    let set = KeypointSet::new().with(Landmark::RightKnee, Point3::planar(0.5, 0.75));
    let value = serde_json::to_value(&set).unwrap();
    assert_eq!(value["right_knee"]["x"], 0.5);
    assert_eq!(value["right_knee"]["y"], 0.75);
    assert!(value["right_knee"].get("visibility").is_none());
}
