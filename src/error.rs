//! Error types shared by the gait engine, the motion task and the host binary.
use core::fmt::Debug;

use thiserror::Error;

use crate::kinematics::conversion::JointAngles;
use crate::robot::{joint::Joint, leg::Leg};

/// Why a leg was left where it was for one tick. Never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LegFault {
    #[error("target out of reach (angles {angles:?})")]
    OutOfReach { angles: JointAngles },
    #[error("{joint} angle {angle:.2} out of bounds")]
    OutOfBound { joint: Joint, angle: f32 },
}

/// Fatal errors: once raised the engine emits nothing else.
#[derive(Debug, Error)]
pub enum MotionError<E: Debug> {
    #[error("{leg} {joint}: write to channel {channel} failed: {cause:?}")]
    Actuation {
        leg: Leg,
        joint: Joint,
        channel: u8,
        cause: E,
    },
    #[error("diagnostic write to channel {channel} failed: {cause:?}")]
    Diagnostic { channel: u8, cause: E },
    #[error("output halted after an actuation fault")]
    Faulted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("bad argument `{0}`")]
    BadArgument(String),
    #[error("missing argument for `{0}`")]
    MissingArgument(&'static str),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot decode settings: {0}")]
    Decode(#[from] basic_toml::Error),
    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}
