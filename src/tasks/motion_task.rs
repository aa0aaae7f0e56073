//! Motion task: the single periodic driver of the robot.
//!
//! Receives commands, and on every tick either plays the next transition
//! frame, steps the current gait, or advances the diagnostic sweep. Ticks
//! never overlap and a command is only applied between two ticks.
use core::convert::Infallible;

use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Channel, Receiver},
};
use embassy_time::{with_deadline, Duration, Instant, Timer};
use log::{debug, error, info, trace};

use crate::error::MotionError;
use crate::kinematics::gait_engine::GaitEngine;
use crate::robot::{
    commands::Command,
    servo::{Actuator, Status},
    settings::Settings,
};
use crate::tasks::sweep::DiagnosticSweep;
use crate::COMMAND_CHANNEL_SIZE;

/// Commands for the motion task. The only way into the gait engine from
/// another context.
pub static COMMANDS: Channel<CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE> =
    Channel::new();

pub type CommandReceiver<'a> =
    Receiver<'a, CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;

/// The single slot holding what the next tick does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Gait,
    Sweep(DiagnosticSweep),
}

/// What a handled command means for the pending tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reschedule {
    /// Keep waiting for the tick already scheduled.
    Keep,
    /// Drop the pending tick and wait a full delay from now.
    Restart,
}

pub struct Scheduler<A> {
    engine: GaitEngine,
    actuator: A,
    next: NextAction,
}

impl<A: Actuator> Scheduler<A> {
    pub fn new(engine: GaitEngine, actuator: A) -> Self {
        Self {
            engine,
            actuator,
            next: NextAction::Gait,
        }
    }

    pub fn engine(&self) -> &GaitEngine {
        &self.engine
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn next_action(&self) -> &NextAction {
        &self.next
    }

    /// Home every leg. The caller waits for the settle delay, then calls
    /// [`Scheduler::ready`].
    pub fn start(&mut self) -> Result<(), MotionError<A::Error>> {
        self.engine.home(&mut self.actuator)?;
        Ok(())
    }

    pub fn ready(&mut self) {
        self.actuator.indicate(Status::Ready);
        info!("[MOTION_TASK] ready");
    }

    /// Delay until the action in the slot runs.
    pub fn delay(&self) -> Duration {
        match self.next {
            NextAction::Gait => Duration::from_millis(self.engine.settings().step_delay_ms),
            NextAction::Sweep(_) => Duration::from_millis(self.engine.settings().sweep.period_ms),
        }
    }

    /// Apply a command between two ticks.
    pub fn handle(&mut self, cmd: Command) -> Result<Reschedule, MotionError<A::Error>> {
        let stamp = "[MOTION_TASK] received";
        match cmd {
            Command::Mode(mode) => {
                info!("{stamp} mode {mode}");
                let was_sweeping = matches!(self.next, NextAction::Sweep(_));
                self.next = NextAction::Gait;
                if self.engine.command(mode) {
                    // the first frame of the transition plays right away
                    self.run_next()?;
                    Ok(Reschedule::Restart)
                } else if was_sweeping {
                    Ok(Reschedule::Restart)
                } else {
                    Ok(Reschedule::Keep)
                }
            }
            Command::Calibrate {
                leg,
                joint,
                value_us,
            } => {
                info!("{stamp} calibrate {leg} {joint} {value_us}");
                self.engine.set_calibration(leg, joint, value_us);
                Ok(Reschedule::Keep)
            }
            Command::Sweep { leg, joint } => {
                info!("{stamp} sweep {leg} {joint}");
                let settings = self.engine.settings();
                let channel = settings.channel(leg, joint);
                self.next = NextAction::Sweep(DiagnosticSweep::new(
                    leg,
                    joint,
                    channel,
                    &settings.sweep,
                ));
                Ok(Reschedule::Restart)
            }
        }
    }

    /// Run the action in the slot.
    pub fn run_next(&mut self) -> Result<(), MotionError<A::Error>> {
        match &mut self.next {
            NextAction::Gait => {
                let report = self.engine.tick(&mut self.actuator)?;
                trace!(
                    "[MOTION_TASK] tick done, mode {} time {}, {} legs rejected",
                    self.engine.mode(),
                    self.engine.time(),
                    report.rejected().count()
                );
            }
            NextAction::Sweep(sweep) => {
                let pulse = sweep.advance();
                debug!(
                    "[MOTION_TASK] sweep {} {} -> {}us",
                    sweep.leg,
                    sweep.joint,
                    pulse.ticks()
                );
                if let Err(cause) = self.actuator.actuate(sweep.channel, pulse) {
                    self.actuator.indicate(Status::Fault);
                    return Err(MotionError::Diagnostic {
                        channel: sweep.channel,
                        cause,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Drive the robot until a fatal error, which is returned.
///
/// `on_settings_changed` sees the settings after every calibration change.
pub async fn motion_loop<A: Actuator>(
    scheduler: &mut Scheduler<A>,
    commands: CommandReceiver<'_>,
    mut on_settings_changed: impl FnMut(&Settings),
) -> Result<Infallible, MotionError<A::Error>> {
    scheduler.start()?;
    Timer::after_millis(scheduler.engine().settings().settle_delay_ms).await;
    scheduler.ready();

    let mut deadline = Instant::now() + scheduler.delay();
    loop {
        match with_deadline(deadline, commands.receive()).await {
            Ok(cmd) => {
                let reschedule = scheduler.handle(cmd).inspect_err(|e| error!("{e}"))?;
                if matches!(cmd, Command::Calibrate { .. }) {
                    on_settings_changed(scheduler.engine().settings());
                }
                if reschedule == Reschedule::Restart {
                    deadline = Instant::now() + scheduler.delay();
                }
            }
            Err(_) => {
                scheduler.run_next().inspect_err(|e| error!("{e}"))?;
                deadline = Instant::now() + scheduler.delay();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::{commands::Mode, joint::Joint, leg::Leg, servo::LogActuator};

    fn scheduler() -> Scheduler<LogActuator> {
        let engine = GaitEngine::new(Settings::default());
        let mut scheduler = Scheduler::new(engine, LogActuator::default());
        scheduler.start().unwrap();
        scheduler
    }

    #[test]
    fn mode_change_plays_first_frame_at_once() {
        let mut scheduler = scheduler();
        let before = scheduler.actuator().writes();
        assert_eq!(
            scheduler.handle(Command::Mode(Mode::Forward)).unwrap(),
            Reschedule::Restart
        );
        assert_eq!(scheduler.actuator().writes(), before + 18);
        assert!(scheduler.engine().is_transitioning());
    }

    #[test]
    fn same_mode_keeps_the_pending_tick() {
        let mut scheduler = scheduler();
        assert_eq!(
            scheduler.handle(Command::Mode(Mode::Stop)).unwrap(),
            Reschedule::Keep
        );
        assert!(!scheduler.engine().is_transitioning());
    }

    #[test]
    fn sweep_takes_the_slot_until_a_mode_command() {
        let mut scheduler = scheduler();
        scheduler
            .handle(Command::Sweep {
                leg: Leg::RearRight,
                joint: Joint::Tibia,
            })
            .unwrap();
        assert!(matches!(scheduler.next_action(), NextAction::Sweep(s) if s.channel == 11));
        assert_eq!(scheduler.delay(), Duration::from_millis(1000));

        let before = scheduler.actuator().writes();
        scheduler.run_next().unwrap();
        assert_eq!(scheduler.actuator().writes(), before + 1);

        // stop is current: no transition, but the sweep ends
        assert_eq!(
            scheduler.handle(Command::Mode(Mode::Stop)).unwrap(),
            Reschedule::Restart
        );
        assert_eq!(scheduler.next_action(), &NextAction::Gait);
        assert_eq!(scheduler.delay(), Duration::from_millis(20));
    }

    #[test]
    fn calibration_keeps_the_schedule() {
        let mut scheduler = scheduler();
        let cmd = Command::Calibrate {
            leg: Leg::FrontLeft,
            joint: Joint::Femur,
            value_us: 1450,
        };
        assert_eq!(scheduler.handle(cmd).unwrap(), Reschedule::Keep);
        assert_eq!(
            scheduler.engine().settings().calibration(Leg::FrontLeft, Joint::Femur),
            1450
        );
    }
}
