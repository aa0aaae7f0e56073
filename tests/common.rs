//! Shared helpers for the gait engine integration tests.

#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use fugit::MicrosDurationU32;
use hexapod_gait::kinematics::gait_engine::GaitEngine;
use hexapod_gait::kinematics::transition::Frame;
use hexapod_gait::robot::{
    commands::Mode,
    config::{add, DEFAULT_POSE},
    leg::Leg,
    servo::{Actuator, Status},
    settings::Settings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteFailed;

/// Records every write, and fails once `fail_at` writes went through.
#[derive(Debug, Default)]
pub struct RecordingActuator {
    pub writes: Vec<(u8, u32)>,
    pub status: Option<Status>,
    pub fail_at: Option<usize>,
}

impl Actuator for RecordingActuator {
    type Error = WriteFailed;

    fn actuate(&mut self, channel: u8, pulse: MicrosDurationU32) -> Result<(), Self::Error> {
        if self.fail_at == Some(self.writes.len()) {
            return Err(WriteFailed);
        }
        self.writes.push((channel, pulse.ticks()));
        Ok(())
    }

    fn indicate(&mut self, status: Status) {
        self.status = Some(status);
    }
}

/// An engine homed to the default pose.
pub fn homed_engine() -> (GaitEngine, RecordingActuator) {
    let mut engine = GaitEngine::new(Settings::default());
    let mut actuator = RecordingActuator::default();
    engine.home(&mut actuator).unwrap();
    (engine, actuator)
}

/// Absolute foot positions of `mode` at time 0.
pub fn time_zero_frame(mode: Mode) -> Frame {
    let gait = mode.gait();
    let mut frame = DEFAULT_POSE;
    for leg in Leg::ALL {
        frame[leg] = add(DEFAULT_POSE[leg], gait.pose(leg, 0).0);
    }
    frame
}

pub fn assert_frame_eq(a: &Frame, b: &Frame) {
    for leg in Leg::ALL {
        for axis in 0..3 {
            assert_abs_diff_eq!(a[leg][axis], b[leg][axis], epsilon = 1e-3);
        }
    }
}
