//! Command types for robot control and inter-task communication.
//!
//! Defines the locomotion [`Mode`]s, the [`Command`]s accepted by the motion
//! task, and their text parsing. Used by the command reader of the binary and
//! by the motion task.
use core::fmt::Display;
use core::str::FromStr;

use crate::error::ParseCommandError;
use crate::robot::{joint::Joint, leg::Leg};

/// Locomotion modes. Each one selects a gait from the gait library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Adjust,
    Stop,
    Dance1,
    Dance2,
    Dance3,
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    ShiftLeft,
    ShiftRight,
}

impl Mode {
    pub const ALL: [Mode; 11] = [
        Mode::Adjust,
        Mode::Stop,
        Mode::Dance1,
        Mode::Dance2,
        Mode::Dance3,
        Mode::Forward,
        Mode::Backward,
        Mode::TurnLeft,
        Mode::TurnRight,
        Mode::ShiftLeft,
        Mode::ShiftRight,
    ];

    /// Short token used on the command line.
    pub const fn token(self) -> &'static str {
        match self {
            Mode::Adjust => "adj",
            Mode::Stop => "s",
            Mode::Dance1 => "d1",
            Mode::Dance2 => "d2",
            Mode::Dance3 => "d3",
            Mode::Forward => "fwd",
            Mode::Backward => "bwd",
            Mode::TurnLeft => "tl",
            Mode::TurnRight => "tr",
            Mode::ShiftLeft => "sl",
            Mode::ShiftRight => "sr",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Mode {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s {
            "adj" | "adjust" => Mode::Adjust,
            "s" | "stop" => Mode::Stop,
            "d1" | "dance1" => Mode::Dance1,
            "d2" | "dance2" => Mode::Dance2,
            "d3" | "dance3" => Mode::Dance3,
            "fwd" | "forward" => Mode::Forward,
            "bwd" | "backward" => Mode::Backward,
            "tl" | "turn-left" => Mode::TurnLeft,
            "tr" | "turn-right" => Mode::TurnRight,
            "sl" | "shift-left" => Mode::ShiftLeft,
            "sr" | "shift-right" => Mode::ShiftRight,
            other => return Err(ParseCommandError::Unknown(other.to_owned())),
        };
        Ok(mode)
    }
}

/// Everything the motion task can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch locomotion mode.
    Mode(Mode),
    /// Store a new centre pulse width for one joint.
    Calibrate { leg: Leg, joint: Joint, value_us: u32 },
    /// Oscillate one joint for hardware testing.
    Sweep { leg: Leg, joint: Joint },
}

impl TryFrom<&str> for Command {
    type Error = ParseCommandError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut tokens = value.split_whitespace();
        let cmd = tokens.next().ok_or(ParseCommandError::Empty)?;

        match cmd {
            "cal" => {
                let leg = parse_leg(tokens.next(), "cal")?;
                let joint = parse_joint(tokens.next(), "cal")?;
                let value_us = parse_number(tokens.next(), "cal")?;
                Ok(Command::Calibrate {
                    leg,
                    joint,
                    value_us,
                })
            }
            "test" => {
                let leg = parse_leg(tokens.next(), "test")?;
                let joint = parse_joint(tokens.next(), "test")?;
                Ok(Command::Sweep { leg, joint })
            }
            mode => mode.parse().map(Command::Mode),
        }
    }
}

fn parse_number<T: FromStr>(
    token: Option<&str>,
    cmd: &'static str,
) -> Result<T, ParseCommandError> {
    let token = token.ok_or(ParseCommandError::MissingArgument(cmd))?;
    token
        .parse()
        .map_err(|_| ParseCommandError::BadArgument(token.to_owned()))
}

fn parse_leg(token: Option<&str>, cmd: &'static str) -> Result<Leg, ParseCommandError> {
    let index: usize = parse_number(token, cmd)?;
    Leg::try_from(index).map_err(|i| ParseCommandError::BadArgument(i.to_string()))
}

fn parse_joint(token: Option<&str>, cmd: &'static str) -> Result<Joint, ParseCommandError> {
    let index: usize = parse_number(token, cmd)?;
    Joint::try_from(index).map_err(|i| ParseCommandError::BadArgument(i.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_parses_from_its_token() {
        for mode in Mode::ALL {
            assert_eq!(Command::try_from(mode.token()), Ok(Command::Mode(mode)));
        }
        assert_eq!(
            Command::try_from("  turn-left \n"),
            Ok(Command::Mode(Mode::TurnLeft))
        );
    }

    #[test]
    fn demo_is_not_a_gait() {
        assert_eq!(
            Command::try_from("demo"),
            Err(ParseCommandError::Unknown("demo".into()))
        );
        assert_eq!(Command::try_from("   "), Err(ParseCommandError::Empty));
    }

    #[test]
    fn calibration_and_sweep_arguments() {
        assert_eq!(
            Command::try_from("cal 4 2 1420"),
            Ok(Command::Calibrate {
                leg: Leg::MiddleRight,
                joint: Joint::Tibia,
                value_us: 1420
            })
        );
        assert_eq!(
            Command::try_from("test 0 1"),
            Ok(Command::Sweep {
                leg: Leg::FrontLeft,
                joint: Joint::Femur
            })
        );
        assert_eq!(
            Command::try_from("cal 6 0 1500"),
            Err(ParseCommandError::BadArgument("6".into()))
        );
        assert_eq!(
            Command::try_from("cal 1 0"),
            Err(ParseCommandError::MissingArgument("cal"))
        );
        assert_eq!(
            Command::try_from("test x 0"),
            Err(ParseCommandError::BadArgument("x".into()))
        );
    }
}
