use crate::model::angle::Angle;
use crate::model::keypoints::Point3;

/// Angle at vertex `b` between rays `b -> a` and `b -> c`, in [0, 180].
///
/// Uses all three axes. A zero-length (or non-finite) ray yields 0 rather
/// than NaN.
pub fn angle_at(a: Point3, b: Point3, c: Point3) -> Angle {
    let v1 = a - b;
    let v2 = c - b;
    let denom = v1.norm() * v2.norm();
    if denom == 0.0 || !denom.is_finite() {
        return Angle::ZERO;
    }
    // floating-point drift can push the cosine just past +/-1
    let cos = (v1.dot(v2) / denom).clamp(-1.0, 1.0);
    Angle::from_degrees(cos.acos().to_degrees())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_geometry.rs"]
mod tests;
