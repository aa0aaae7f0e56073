//! Gait library and steady-state stepping through the public API.

mod common;

use approx::assert_abs_diff_eq;
use common::homed_engine;
use hexapod_gait::kinematics::{
    conversion::{cartesian_to_polar, solve, validate},
    gait::{phase_offset, Gait},
    tables,
};
use hexapod_gait::robot::{
    commands::Mode,
    config::{DEFAULT_POSE, LEG_MOUNTS},
    joint::Joint,
    leg::Leg,
};

#[test]
fn front_left_default_pose_is_accepted() {
    assert_eq!(LEG_MOUNTS[Leg::FrontLeft], [40.36, 70.36, 0.0]);
    let raw = cartesian_to_polar(Leg::FrontLeft, DEFAULT_POSE[Leg::FrontLeft]);
    assert_abs_diff_eq!(raw.coxa, 0.0, epsilon = 1e-2);

    let angles = validate(raw).unwrap();
    for joint in Joint::ALL {
        assert!(joint.accepts(angles.get(joint)), "{joint} {}", angles.get(joint));
    }
    assert_eq!(solve(Leg::FrontLeft, DEFAULT_POSE[Leg::FrontLeft]), Ok(angles));
}

#[test]
fn dances_visit_every_row_once_and_wrap() {
    for mode in [Mode::Dance1, Mode::Dance2, Mode::Dance3] {
        let gait = mode.gait();
        let Gait::Tabulated(table) = gait else {
            panic!("{mode} is not tabulated");
        };
        let n = gait.period().unwrap();
        for leg in Leg::ALL {
            let mut time = 0;
            for row in table[leg].iter() {
                let (offset, next) = gait.pose(leg, time);
                assert_eq!(&offset, row);
                time = next;
            }
            assert_eq!(time, 0, "{mode} {leg} after {n} ticks");
        }
    }
}

#[test]
fn walk_phases_legs_by_parity() {
    for leg in Leg::ALL {
        let expected = if leg.index() % 2 == 0 { 5 } else { 15 };
        assert_eq!(phase_offset(leg, tables::WALK.len()), expected);
    }

    // right legs mirror x, left legs read the table as is
    let forward = Mode::Forward.gait();
    assert_eq!(forward.pose(Leg::FrontLeft, 0).0, tables::WALK[5]);
    let [x, y, z] = tables::WALK[5];
    assert_eq!(forward.pose(Leg::MiddleRight, 0).0, [-x, y, z]);
    assert_eq!(forward.pose(Leg::MiddleLeft, 0).0, tables::WALK[15]);
}

#[test]
fn forward_advances_and_backward_retreats() {
    let forward = Mode::Forward.gait();
    let backward = Mode::Backward.gait();
    for time in 0..20 {
        assert_eq!(forward.pose(Leg::RearLeft, time).1, (time + 1) % 20);
        assert_eq!(backward.pose(Leg::RearLeft, time).1, (time + 19) % 20);
    }
}

#[test]
fn shift_reuses_the_walking_table() {
    let shift = Mode::ShiftLeft.gait();
    // front left reads row 3 + 5
    let [_, y, z] = tables::WALK[8];
    let (offset, next) = shift.pose(Leg::FrontLeft, 3);
    assert_abs_diff_eq!(offset[0], y / 1.5, epsilon = 1e-5);
    assert_eq!(offset[1], 0.0);
    assert_eq!(offset[2], z);
    assert_eq!(next, 2);
    assert_eq!(Mode::ShiftRight.gait().pose(Leg::FrontLeft, 3).1, 4);
}

#[test]
fn steady_gait_takes_the_time_index_of_the_last_leg() {
    let (mut engine, mut actuator) = homed_engine();
    assert!(engine.command(Mode::TurnLeft));
    while engine.is_transitioning() {
        engine.tick(&mut actuator).unwrap();
    }

    for expected in 1..=25 {
        engine.tick(&mut actuator).unwrap();
        assert_eq!(engine.time(), expected % 20);
    }
}

#[test]
fn stationary_gaits_keep_the_time_index() {
    let (mut engine, mut actuator) = homed_engine();
    for _ in 0..3 {
        engine.tick(&mut actuator).unwrap();
        assert_eq!(engine.time(), 0);
    }
    assert_eq!(engine.legs(), &DEFAULT_POSE);
    assert_eq!(Mode::Adjust.gait().pose(Leg::RearRight, 7), ([0.0, 0.0, -20.0], 7));
}
