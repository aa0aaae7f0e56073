//! Inverse kinematics and servo pulse conversion.
//!
//! Converts a foot position in the body frame into the three joint angles of a
//! leg, checks those angles against the mechanical limits, and maps accepted
//! angles to actuation pulse widths.
//!
//! Used by the gait engine on every tick and during homing.
use fugit::MicrosDurationU32;

use crate::error::LegFault;
use crate::robot::{
    config::{Position, LEG_MOUNTS, LEG_YAWS, LENGTH_A, LENGTH_B, LENGTH_C, US_PER_DEGREE},
    joint::Joint,
    leg::Leg,
};

/// Joint angles of one leg, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointAngles {
    pub coxa: f32,
    pub femur: f32,
    pub tibia: f32,
}

impl JointAngles {
    pub fn get(&self, joint: Joint) -> f32 {
        match joint {
            Joint::Coxa => self.coxa,
            Joint::Femur => self.femur,
            Joint::Tibia => self.tibia,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.coxa.is_finite() && self.femur.is_finite() && self.tibia.is_finite()
    }
}

/// Closed form inverse kinematics for `leg` reaching `target`.
///
/// No bound checking happens here: unreachable targets come back with NaN
/// angles (the `asin`/`acos` arguments leave `[-1, 1]`). Pass the result
/// through [`validate`] before using it.
pub fn cartesian_to_polar(leg: Leg, target: Position) -> JointAngles {
    let mount = LEG_MOUNTS[leg];

    // shift origin to the hip
    let x = target[0] - mount[0];
    let y = target[1] - mount[1];
    let z = target[2] - mount[2];

    let coxa = normalize_degrees(y.atan2(x).to_degrees() - LEG_YAWS[leg]);

    // planar reach, seen from the side of the leg
    let xp = (x * x + y * y).sqrt() - LENGTH_C;
    let yp = z;
    let lr = (xp * xp + yp * yp).sqrt();
    let ar = (yp / lr).asin().to_degrees();

    let at = ((lr * lr + LENGTH_A * LENGTH_A - LENGTH_B * LENGTH_B) / (2.0 * LENGTH_A * lr))
        .acos()
        .to_degrees();
    let az = ((lr * lr - LENGTH_A * LENGTH_A + LENGTH_B * LENGTH_B) / (2.0 * LENGTH_B * lr))
        .acos()
        .to_degrees();

    JointAngles {
        coxa,
        femur: at + ar,
        tibia: 180.0 - at - az,
    }
}

/// Wraps an angle into `(-180, 180]`.
fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Accepts angles that are finite and inside every joint's limits.
pub fn validate(angles: JointAngles) -> Result<JointAngles, LegFault> {
    if !angles.is_finite() {
        return Err(LegFault::OutOfReach { angles });
    }
    for joint in Joint::ALL {
        let angle = angles.get(joint);
        if !joint.accepts(angle) {
            return Err(LegFault::OutOfBound { joint, angle });
        }
    }
    Ok(angles)
}

/// Solve and validate in one go.
pub fn solve(leg: Leg, target: Position) -> Result<JointAngles, LegFault> {
    validate(cartesian_to_polar(leg, target))
}

/// Maps a joint angle to a pulse width around the joint's calibrated centre.
///
/// Hip pitch turns the opposite way of the other joints, and the knee is
/// centred at 90 degrees.
pub fn angle_to_pulse(joint: Joint, angle: f32, calibration_us: u32) -> MicrosDurationU32 {
    let delta = match joint {
        Joint::Coxa => angle,
        Joint::Femur => -angle,
        Joint::Tibia => angle - 90.0,
    } * US_PER_DEGREE;
    let pulse = (calibration_us as f32 + delta).round().max(0.0);
    MicrosDurationU32::from_ticks(pulse as u32)
}
