//! Diagnostic sweep: swings one joint back and forth around a fixed centre so
//! the wiring and the servo range can be checked by eye.
use fugit::MicrosDurationU32;

use crate::robot::{joint::Joint, leg::Leg, settings::SweepSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticSweep {
    pub leg: Leg,
    pub joint: Joint,
    pub channel: u8,
    center_us: u32,
    amplitude_us: i32,
    offset_us: i32,
    step_us: i32,
}

impl DiagnosticSweep {
    pub fn new(leg: Leg, joint: Joint, channel: u8, settings: &SweepSettings) -> Self {
        Self {
            leg,
            joint,
            channel,
            center_us: settings.center_us,
            amplitude_us: settings.amplitude_us as i32,
            offset_us: 0,
            step_us: settings.step_us as i32,
        }
    }

    /// Pulse for the next period. The step reverses once the offset reaches
    /// the amplitude on either side.
    pub fn advance(&mut self) -> MicrosDurationU32 {
        self.offset_us += self.step_us;
        if self.offset_us.abs() >= self.amplitude_us {
            self.step_us = -self.step_us;
        }
        let pulse = self.center_us as i32 + self.offset_us;
        MicrosDurationU32::from_ticks(pulse.max(0) as u32)
    }
}
