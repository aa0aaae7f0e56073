use log::{debug, error, info, warn};

use crate::error::{LegFault, MotionError};
use crate::kinematics::{
    conversion::{angle_to_pulse, solve},
    transition::{Frame, TransitionPath},
};
use crate::robot::{
    commands::Mode,
    config::{add, Position, DEFAULT_POSE},
    joint::Joint,
    leg::{Leg, LEG_COUNT},
    servo::{Actuator, Status},
    settings::Settings,
};

/// What the engine does on the next tick.
#[derive(Debug, Clone)]
pub enum GaitState {
    /// Running `mode`'s gait at `time`.
    Steady { mode: Mode, time: usize },
    /// Playing back a transition towards `target`.
    Transitioning { target: Mode, path: TransitionPath },
}

/// Per-leg outcome of one tick. `None` means the leg moved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub faults: [Option<LegFault>; LEG_COUNT],
}

impl TickReport {
    pub fn rejected(&self) -> impl Iterator<Item = (Leg, LegFault)> + '_ {
        Leg::ALL
            .into_iter()
            .filter_map(|leg| self.faults[leg].map(|fault| (leg, fault)))
    }

    pub fn all_moved(&self) -> bool {
        self.faults.iter().all(Option::is_none)
    }
}

/// State machine that owns the current mode, the time index and the foot
/// positions, and produces one frame per tick.
///
/// Foot positions only change after a leg's angles were validated and all
/// three of its joints were written.
#[derive(Debug)]
pub struct GaitEngine {
    state: GaitState,
    legs: Frame, // last accepted foot position of each leg
    settings: Settings,
    faulted: bool,
}

impl GaitEngine {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: GaitState::Steady {
                mode: Mode::Stop,
                time: 0,
            },
            legs: DEFAULT_POSE,
            settings,
            faulted: false,
        }
    }

    /// Drive every leg to its default pose and settle in [`Mode::Stop`].
    pub fn home<A: Actuator>(
        &mut self,
        actuator: &mut A,
    ) -> Result<TickReport, MotionError<A::Error>> {
        self.state = GaitState::Steady {
            mode: Mode::Stop,
            time: 0,
        };
        let report = self.apply_frame(&DEFAULT_POSE, actuator)?;
        info!("[GAIT_ENGINE] legs homed");
        Ok(report)
    }

    /// Current mode, or the mode being switched to.
    pub fn mode(&self) -> Mode {
        match &self.state {
            GaitState::Steady { mode, .. } => *mode,
            GaitState::Transitioning { target, .. } => *target,
        }
    }

    /// Time index of the steady gait, 0 while transitioning.
    pub fn time(&self) -> usize {
        match &self.state {
            GaitState::Steady { time, .. } => *time,
            GaitState::Transitioning { .. } => 0,
        }
    }

    pub fn state(&self) -> &GaitState {
        &self.state
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, GaitState::Transitioning { .. })
    }

    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    pub fn legs(&self) -> &Frame {
        &self.legs
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Takes effect on the next joint written.
    pub fn set_calibration(&mut self, leg: Leg, joint: Joint, value_us: u32) {
        info!("[GAIT_ENGINE] calibration {leg} {joint} = {value_us}us");
        self.settings.set_calibration(leg, joint, value_us);
    }

    /// Switch to `mode`, gliding from the current foot positions.
    ///
    /// Returns `false` when `mode` is already the current one. Any transition
    /// in flight is dropped and the new one starts where the legs are now.
    pub fn command(&mut self, mode: Mode) -> bool {
        let current = self.mode();
        if mode == current {
            debug!("[GAIT_ENGINE] already in {mode}");
            return false;
        }

        let path = TransitionPath::plan(&self.legs, &mode.gait(), self.settings.switch_steps);
        info!(
            "[GAIT_ENGINE] switching from {current} to {mode} in {} frames",
            path.remaining()
        );
        self.state = GaitState::Transitioning { target: mode, path };
        true
    }

    /// Run one tick: the next transition frame if one is pending, one step of
    /// the current gait otherwise.
    pub fn tick<A: Actuator>(
        &mut self,
        actuator: &mut A,
    ) -> Result<TickReport, MotionError<A::Error>> {
        if self.faulted {
            return Err(MotionError::Faulted);
        }

        if let GaitState::Transitioning { target, path } = &mut self.state {
            let target = *target;
            let frame = path.next_frame();
            if path.is_empty() {
                info!("[GAIT_ENGINE] now in {target}");
                self.state = GaitState::Steady {
                    mode: target,
                    time: 0,
                };
            }
            if let Some(frame) = frame {
                return self.apply_frame(&frame, actuator);
            }
        }

        self.step(actuator)
    }

    fn step<A: Actuator>(
        &mut self,
        actuator: &mut A,
    ) -> Result<TickReport, MotionError<A::Error>> {
        let GaitState::Steady { mode, time } = self.state else {
            return Ok(TickReport::default());
        };

        let gait = mode.gait();
        let mut report = TickReport::default();
        let mut next = time;
        for leg in Leg::ALL {
            let (offset, next_time) = gait.pose(leg, time);
            next = next_time;
            report.faults[leg] = self.move_leg(leg, add(DEFAULT_POSE[leg], offset), actuator)?;
        }

        self.state = GaitState::Steady { mode, time: next };
        Ok(report)
    }

    fn apply_frame<A: Actuator>(
        &mut self,
        frame: &Frame,
        actuator: &mut A,
    ) -> Result<TickReport, MotionError<A::Error>> {
        let mut report = TickReport::default();
        for leg in Leg::ALL {
            report.faults[leg] = self.move_leg(leg, frame[leg], actuator)?;
        }
        Ok(report)
    }

    /// Solve, validate and write one leg. A rejected leg keeps its position.
    fn move_leg<A: Actuator>(
        &mut self,
        leg: Leg,
        target: Position,
        actuator: &mut A,
    ) -> Result<Option<LegFault>, MotionError<A::Error>> {
        let angles = match solve(leg, target) {
            Ok(angles) => angles,
            Err(fault) => {
                warn!("[GAIT_ENGINE] {leg} cannot reach {target:?}: {fault}");
                return Ok(Some(fault));
            }
        };

        for joint in Joint::ALL {
            let channel = self.settings.channel(leg, joint);
            let pulse = angle_to_pulse(
                joint,
                angles.get(joint),
                self.settings.calibration(leg, joint),
            );
            if let Err(cause) = actuator.actuate(channel, pulse) {
                error!("[GAIT_ENGINE] {leg} {joint}: channel {channel} write failed: {cause:?}");
                self.faulted = true;
                actuator.indicate(Status::Fault);
                return Err(MotionError::Actuation {
                    leg,
                    joint,
                    channel,
                    cause,
                });
            }
        }

        self.legs[leg] = target;
        Ok(None)
    }
}
