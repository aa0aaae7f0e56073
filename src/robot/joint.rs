//! Joint enumeration and display helpers.
//!
//! Defines the [`Joint`] enum for identifying each joint of a leg, innermost
//! (body mounted yaw) to outermost (knee), plus the mechanical limits that every
//! solved angle is checked against before it reaches actuation.
use core::fmt::Display;

/// The three joints of a leg. The discriminant is the index used by the
/// per-joint tables (calibration, channel map, angle triples).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    /// Hip yaw, rotating the whole leg around the body mounting point.
    Coxa = 0,
    /// Hip pitch.
    Femur = 1,
    /// Knee.
    Tibia = 2,
}

impl Joint {
    pub const ALL: [Joint; 3] = [Joint::Coxa, Joint::Femur, Joint::Tibia];

    /// Accepted angle range in degrees, inclusive on both ends.
    pub const fn limits(self) -> (f32, f32) {
        match self {
            Joint::Coxa => (-45.0, 45.0),
            Joint::Femur => (-90.0, 90.0),
            Joint::Tibia => (36.0, 150.0),
        }
    }

    pub fn accepts(self, angle: f32) -> bool {
        let (min, max) = self.limits();
        (min..=max).contains(&angle)
    }
}

impl Display for Joint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Joint::Coxa => f.write_str("coxa"),
            Joint::Femur => f.write_str("femur"),
            Joint::Tibia => f.write_str("tibia"),
        }
    }
}

impl TryFrom<usize> for Joint {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Joint::Coxa),
            1 => Ok(Joint::Femur),
            2 => Ok(Joint::Tibia),
            other => Err(other),
        }
    }
}
