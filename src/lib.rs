//! Library root for the hexapod gait engine.
//!
//! Re-exports all main modules: [`kinematics`], [`robot`], and [`tasks`].
//! Used by the host binary and by the integration tests.

pub mod error;
pub mod kinematics;
pub mod robot;
pub mod tasks;

pub const COMMAND_CHANNEL_SIZE: usize = 4;
