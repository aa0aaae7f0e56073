//! Leg kinematics and gait generation.
//!
//! - [`conversion`] turns foot positions into joint angles and servo pulses.
//! - [`tables`] holds the pre-computed gait cycles.
//! - [`gait`] maps a mode and a time index to a foot offset per leg.
//! - [`transition`] plans the glide between two gaits.
//! - [`gait_engine`] is the state machine the motion task ticks.
pub mod conversion;
pub mod gait;
pub mod gait_engine;
pub mod tables;
pub mod transition;
