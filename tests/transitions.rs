//! Mode changes, transitions and fault handling of the gait engine.

mod common;

use common::{assert_frame_eq, homed_engine, time_zero_frame, WriteFailed};
use hexapod_gait::error::{MotionError, ParseCommandError};
use hexapod_gait::robot::{
    commands::{Command, Mode},
    config::DEFAULT_POSE,
    joint::Joint,
    leg::Leg,
    servo::Status,
};

#[test]
fn stop_to_forward_glides_in_eleven_frames() {
    let (mut engine, mut actuator) = homed_engine();
    assert!(engine.command(Mode::Forward));

    engine.tick(&mut actuator).unwrap();
    assert_frame_eq(engine.legs(), &DEFAULT_POSE);

    for _ in 1..11 {
        assert!(engine.is_transitioning());
        let report = engine.tick(&mut actuator).unwrap();
        assert!(report.all_moved());
    }
    assert!(!engine.is_transitioning());
    assert_eq!(engine.mode(), Mode::Forward);
    assert_eq!(engine.time(), 0);
    assert_frame_eq(engine.legs(), &time_zero_frame(Mode::Forward));
}

#[test]
fn repeated_command_is_a_no_op() {
    let (mut engine, mut actuator) = homed_engine();
    assert!(engine.command(Mode::Backward));
    while engine.is_transitioning() {
        engine.tick(&mut actuator).unwrap();
    }
    for _ in 0..4 {
        engine.tick(&mut actuator).unwrap();
    }
    let time = engine.time();
    assert_eq!(time, 16);

    assert!(!engine.command(Mode::Backward));
    assert!(!engine.command(Mode::Backward));
    assert!(!engine.is_transitioning());
    assert_eq!(engine.time(), time);
}

#[test]
fn new_command_restarts_from_where_the_legs_are() {
    let (mut engine, mut actuator) = homed_engine();
    engine.command(Mode::Adjust);
    for _ in 0..4 {
        engine.tick(&mut actuator).unwrap();
    }
    let halfway = *engine.legs();
    assert!(halfway[Leg::FrontLeft][2] < DEFAULT_POSE[Leg::FrontLeft][2]);

    assert!(engine.command(Mode::Stop));
    engine.tick(&mut actuator).unwrap();
    assert_frame_eq(engine.legs(), &halfway);

    let mut ticks = 1;
    while engine.is_transitioning() {
        engine.tick(&mut actuator).unwrap();
        ticks += 1;
    }
    assert_eq!(ticks, 11);
    assert_frame_eq(engine.legs(), &DEFAULT_POSE);
}

#[test]
fn actuation_fault_halts_all_output() {
    let (mut engine, mut actuator) = homed_engine();
    // second leg, femur
    actuator.fail_at = Some(actuator.writes.len() + 4);

    let err = engine.tick(&mut actuator).unwrap_err();
    assert!(matches!(
        err,
        MotionError::Actuation {
            leg: Leg::MiddleLeft,
            joint: Joint::Femur,
            channel: 4,
            cause: WriteFailed,
        }
    ));
    assert_eq!(actuator.status, Some(Status::Fault));
    assert!(engine.is_faulted());

    let written = actuator.writes.len();
    actuator.fail_at = None;
    assert!(matches!(
        engine.tick(&mut actuator),
        Err(MotionError::Faulted)
    ));
    assert_eq!(actuator.writes.len(), written);
}

#[test]
fn calibration_applies_on_the_next_tick() {
    let (mut engine, mut actuator) = homed_engine();
    engine.set_calibration(Leg::FrontLeft, Joint::Coxa, 1600);
    actuator.writes.clear();

    engine.tick(&mut actuator).unwrap();
    assert_eq!(actuator.writes[0], (0, 1600));
}

#[test]
fn unknown_tokens_are_rejected_without_state_change() {
    let (mut engine, mut actuator) = homed_engine();
    assert!(matches!(
        Command::try_from("moonwalk"),
        Err(ParseCommandError::Unknown(_))
    ));
    engine.tick(&mut actuator).unwrap();
    assert_eq!(engine.mode(), Mode::Stop);
    assert!(!engine.is_transitioning());
}
