/// A joint angle in degrees, always finite and within [0, 180].
///
/// The precise value is kept; thresholding uses the whole-degree value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    precise: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { precise: 0.0 };

    pub fn from_degrees(degrees: f64) -> Angle {
        if degrees.is_nan() {
            return Angle::ZERO;
        }
        Angle {
            precise: degrees.clamp(0.0, 180.0),
        }
    }

    pub fn precise(self) -> f64 {
        self.precise
    }

    /// Nearest whole degree.
    pub fn degrees(self) -> u16 {
        self.precise.round() as u16
    }

    pub fn mean(a: Angle, b: Angle) -> Angle {
        Angle::from_degrees((a.precise + b.precise) * 0.5)
    }

    /// Supplement of the included angle: 0 for a straight joint.
    pub fn flexion(self) -> Angle {
        Angle::from_degrees(180.0 - self.precise)
    }

    pub fn right_angle_deviation(self) -> Angle {
        Angle::from_degrees((self.precise - 90.0).abs())
    }
}
