//! Physical dimensions of the robot.
//!
//! Coordinates are in millimetres in the body frame: x > 0 is left, y > 0 is
//! front, z > 0 is up, origin at the body centre.
use super::leg::LEG_COUNT;

/// A point (or offset) in the body frame.
pub type Position = [f32; 3];

// ROBOT SIZE
/// Hip to knee.
pub const LENGTH_A: f32 = 42.0;
/// Knee to foot.
pub const LENGTH_B: f32 = 84.0;
/// Lateral offset between the yaw axis and the pitch axis of the hip.
pub const LENGTH_C: f32 = 36.0;

/// Where each leg is mounted on the body.
pub const LEG_MOUNTS: [Position; LEG_COUNT] = [
    [40.36, 70.36, 0.0],
    [55.25, 0.0, 0.0],
    [40.36, -70.36, 0.0],
    [-40.36, -70.36, 0.0],
    [-55.25, 0.0, 0.0],
    [-40.36, 70.36, 0.0],
];

/// Direction each hip points to at zero yaw, in degrees.
pub const LEG_YAWS: [f32; LEG_COUNT] = [45.0, 0.0, 315.0, 225.0, 180.0, 135.0];

/// Resting foot positions. Every gait reports an offset from these.
pub const DEFAULT_POSE: [Position; LEG_COUNT] = [
    [95.52, 125.52, -62.0],
    [133.25, 0.0, -62.0],
    [95.52, -125.52, -62.0],
    [-95.52, -125.52, -62.0],
    [-133.25, 0.0, -62.0],
    [-95.52, 125.52, -62.0],
];

/// Pulse width change per degree of joint rotation, in microseconds.
pub const US_PER_DEGREE: f32 = 500.0 / 45.0;

/// Upper bound on transition steps; sizes the transition queue.
pub const MAX_SWITCH_STEPS: usize = 64;

pub fn add(a: Position, b: Position) -> Position {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: Position, b: Position) -> Position {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(a: Position, k: f32) -> Position {
    [a[0] * k, a[1] * k, a[2] * k]
}
