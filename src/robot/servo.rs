use core::convert::Infallible;
use core::fmt::Debug;

use embedded_hal::pwm::SetDutyCycle;
use fugit::{HertzU32, MicrosDurationU32};
use heapless::Vec;
use log::{debug, error, info};
use thiserror::Error;

/// Upper bound on actuation channels driven by one actuator.
pub const MAX_CHANNELS: usize = 18;

/// State reported to the operator through the status signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Legs homed, commands accepted.
    Ready,
    /// An actuation write failed; output is halted.
    Fault,
}

/// The only way the engine touches hardware.
pub trait Actuator {
    type Error: Debug;

    /// Drives `channel` with a pulse of the given width.
    fn actuate(&mut self, channel: u8, pulse: MicrosDurationU32) -> Result<(), Self::Error>;

    /// Raises the status signal. Defaults to doing nothing.
    fn indicate(&mut self, _status: Status) {}
}

#[derive(Debug, Error)]
pub enum PwmError<E: Debug> {
    #[error("no pwm bound to channel {0}")]
    UnknownChannel(u8),
    #[error("pulse of {0}us does not fit the pwm period")]
    PulseTooLong(u32),
    #[error("pwm driver error: {0:?}")]
    Driver(E),
}

/// Drives one PWM output per actuation channel, channel `n` being the `n`th
/// output handed to [`PwmActuator::new`].
#[derive(Debug)]
pub struct PwmActuator<PWM> {
    outputs: Vec<PWM, MAX_CHANNELS>,
    frequency: HertzU32,
}

impl<PWM> PwmActuator<PWM>
where
    PWM: SetDutyCycle,
{
    pub fn new(outputs: Vec<PWM, MAX_CHANNELS>, frequency: HertzU32) -> Self {
        Self { outputs, frequency }
    }
}

impl<PWM> Actuator for PwmActuator<PWM>
where
    PWM: SetDutyCycle,
{
    type Error = PwmError<PWM::Error>;

    fn actuate(&mut self, channel: u8, pulse: MicrosDurationU32) -> Result<(), Self::Error> {
        let period_us = 1_000_000 / self.frequency.raw();
        let pulse_us = pulse.ticks();
        if pulse_us > period_us || period_us > u16::MAX as u32 {
            return Err(PwmError::PulseTooLong(pulse_us));
        }

        let output = self
            .outputs
            .get_mut(channel as usize)
            .ok_or(PwmError::UnknownChannel(channel))?;
        output
            .set_duty_cycle_fraction(pulse_us as u16, period_us as u16)
            .map_err(PwmError::Driver)
    }
}

/// Dry run actuator: logs every write and never fails.
#[derive(Debug, Default)]
pub struct LogActuator {
    writes: usize,
}

impl LogActuator {
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Actuator for LogActuator {
    type Error = Infallible;

    fn actuate(&mut self, channel: u8, pulse: MicrosDurationU32) -> Result<(), Self::Error> {
        self.writes += 1;
        debug!("[SERVO] channel {channel} <- {}us", pulse.ticks());
        Ok(())
    }

    fn indicate(&mut self, status: Status) {
        match status {
            Status::Ready => info!("[SERVO] status: ready"),
            Status::Fault => error!("[SERVO] status: fault"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::pwm::{ErrorKind, ErrorType};

    #[derive(Debug, Default)]
    struct FakePwm {
        duty: u16,
        fail: bool,
    }

    impl ErrorType for FakePwm {
        type Error = ErrorKind;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            4095
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            self.duty = duty;
            Ok(())
        }
    }

    fn actuator(outputs: usize) -> PwmActuator<FakePwm> {
        let mut pwms = Vec::new();
        for _ in 0..outputs {
            pwms.push(FakePwm::default()).unwrap();
        }
        PwmActuator::new(pwms, HertzU32::from_raw(50))
    }

    #[test]
    fn pulse_becomes_a_duty_fraction() {
        let mut pwm = actuator(2);
        pwm.actuate(1, MicrosDurationU32::from_ticks(1500)).unwrap();
        // 1500us of a 20ms period
        assert_eq!(pwm.outputs[1].duty, 307);
        assert_eq!(pwm.outputs[0].duty, 0);
    }

    #[test]
    fn unknown_channel_and_driver_errors() {
        let mut pwm = actuator(1);
        assert!(matches!(
            pwm.actuate(4, MicrosDurationU32::from_ticks(1500)),
            Err(PwmError::UnknownChannel(4))
        ));
        pwm.outputs[0].fail = true;
        assert!(matches!(
            pwm.actuate(0, MicrosDurationU32::from_ticks(1500)),
            Err(PwmError::Driver(ErrorKind::Other))
        ));
    }

    #[test]
    fn log_actuator_counts_writes() {
        let mut log = LogActuator::default();
        log.actuate(3, MicrosDurationU32::from_ticks(1000)).unwrap();
        log.indicate(Status::Ready);
        assert_eq!(log.writes(), 1);
    }
}
